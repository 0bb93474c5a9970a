use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Blocked by site: {0}")]
    Blocked(String),

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("__NEXT_DATA__ not found")]
    MissingNextData,

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),

    #[error("Deserialize error: {0}")]
    Deserialize(String),

    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error("Config error: {0}")]
    Config(String),
}
