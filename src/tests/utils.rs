use crate::domain::{PropertyTable, SearchCriteria};
use crate::router::handle;
use crate::scraper::{PropertySource, ScraperError};
use crate::state::{AppState, Clock};
use astra::{Body, Response};
use chrono::{NaiveDate, NaiveDateTime};
use http::{Method, Request};
use std::io::Read;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub type Calls = Arc<Mutex<Vec<SearchCriteria>>>;

/// Records every criteria it is called with and answers with a small table
/// whose last column is an internal id.
pub struct MockSource {
    calls: Calls,
    fail: bool,
}

impl PropertySource for MockSource {
    fn scrape_property(&self, criteria: &SearchCriteria) -> Result<PropertyTable, ScraperError> {
        self.calls.lock().unwrap().push(criteria.clone());

        if self.fail {
            return Err(ScraperError::Network("connection refused".into()));
        }

        Ok(PropertyTable::new(
            vec!["street".into(), "location".into(), "internal_id".into()],
            vec![
                vec!["1 Main St".into(), criteria.location.clone(), "id-1".into()],
                vec!["2 Oak Ave".into(), criteria.location.clone(), "id-2".into()],
            ],
        ))
    }
}

pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub const FIXED_EXPORT: &str = "property_results_2024-05-01_12-00-00.csv";

pub struct TestApp {
    pub state: AppState,
    pub calls: Calls,
    pub dir: TempDir,
}

fn build_app(fail: bool, clock: Clock) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp export dir");
    let calls = Calls::default();

    let source = MockSource {
        calls: calls.clone(),
        fail,
    };
    let mut state = AppState::new(Box::new(source), dir.path());
    state.clock = clock;

    TestApp { state, calls, dir }
}

/// Fresh app with an empty export dir and a clock pinned to 2024-05-01 12:00:00.
pub fn init_test_app() -> TestApp {
    build_app(false, fixed_clock)
}

pub fn init_failing_app() -> TestApp {
    build_app(true, fixed_clock)
}

impl TestApp {
    pub fn get(&self, uri: &str) -> Result<Response, crate::errors::ServerError> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        handle(req, &self.state)
    }

    pub fn post_form(&self, form: &str) -> Result<Response, crate::errors::ServerError> {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/results")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form.as_bytes().to_vec()))
            .unwrap();
        handle(req, &self.state)
    }

    pub fn calls(&self) -> Vec<SearchCriteria> {
        self.calls.lock().unwrap().clone()
    }

    pub fn exported_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
