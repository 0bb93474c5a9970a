use crate::domain::{FormData, SearchCriteria};
use crate::errors::ServerError;
use crate::exports::export_results;
use crate::responses::{attachment_response, html_response, stylesheet_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages;
use astra::Request;
use std::fs;
use std::io::Read;

const MAIN_CSS: &str = include_str!("../assets/main.css");
const DOWNLOAD_PREFIX: &str = "/download/";

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),
        ("POST", "/results") => results(req, state),
        ("GET", "/assets/main.css") => stylesheet_response(MAIN_CSS),
        ("GET", p) if p.starts_with(DOWNLOAD_PREFIX) => download(&p[DOWNLOAD_PREFIX.len()..], state),
        _ => Err(ServerError::NotFound),
    }
}

/// Form intake -> scrape -> export -> results page, all on this worker.
fn results(req: Request, state: &AppState) -> ResultResp {
    let mut raw = Vec::new();
    req.into_body().reader().read_to_end(&mut raw)?;

    let criteria = SearchCriteria::from_form(&FormData::parse(&raw))?;
    log::info!(
        "🔎 Search '{}' ({}) radius={:?} past_days={:?}",
        criteria.location,
        criteria.listing_type,
        criteria.radius,
        criteria.past_days
    );

    let table = state.source.scrape_property(&criteria)?;
    let exported = export_results(table, &state.export_dir, state.now())?;
    log::debug!(
        "Export {} holds {} rows (created {})",
        exported.artifact.path.display(),
        exported.artifact.row_count,
        exported.artifact.created_at
    );

    html_response(pages::results_page(
        &exported.artifact.download_url(),
        &exported.table,
    ))
}

/// Bare file names only; anything that could leave the export directory is treated as missing.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && !name.contains("..")
        && !name.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
}

fn download(raw_name: &str, state: &AppState) -> ResultResp {
    let name = urlencoding::decode(raw_name).map_err(|_| ServerError::NotFound)?;
    if !is_safe_filename(&name) {
        log::warn!("Rejected download name {raw_name:?}");
        return Err(ServerError::NotFound);
    }

    let path = state.export_dir.join(name.as_ref());
    if !path.is_file() {
        return Err(ServerError::NotFound);
    }

    let bytes = fs::read(&path)?;
    attachment_response(bytes, &name)
}
