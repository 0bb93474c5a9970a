pub mod models;
mod realtor;
mod scraper_error;
mod source;

pub use realtor::RealtorScraper;
pub use scraper_error::ScraperError;
pub use source::PropertySource;
