// errors.rs
use crate::scraper::ScraperError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, form intake, missing files) or downstream layers (scraper, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Unusable form input: {0}")]
    Intake(String),

    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScraperError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    /// HTTP status the error page is served with.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            _ => 500,
        }
    }
}
