use crate::domain::{PropertyTable, SearchCriteria};
use crate::scraper::ScraperError;

/// Anything that can turn search criteria into a table of listings.
///
/// Called synchronously on the request's worker thread. Implementations own
/// their network behaviour; callers neither retry nor translate errors.
pub trait PropertySource: Send + Sync {
    fn scrape_property(&self, criteria: &SearchCriteria) -> Result<PropertyTable, ScraperError>;
}
