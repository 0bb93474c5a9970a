use crate::config::Config;
use crate::scraper::{PropertySource, RealtorScraper, ScraperError};
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

/// Source of export timestamps.
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Everything a request handler needs. Shared read-only across workers.
pub struct AppState {
    pub source: Box<dyn PropertySource>,
    pub export_dir: PathBuf,
    pub clock: Clock,
}

impl AppState {
    pub fn new(source: Box<dyn PropertySource>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            export_dir: export_dir.into(),
            clock: local_now,
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self, ScraperError> {
        let scraper = RealtorScraper::new(cfg.scrape_timeout(), cfg.zenrows_api_key.clone())?;
        Ok(Self::new(Box::new(scraper), cfg.export_dir.clone()))
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}
