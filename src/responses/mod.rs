pub mod download;
pub mod errors;
pub mod html;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

pub use download::attachment_response;
pub use errors::error_to_response;
pub use html::{html_response, stylesheet_response};
