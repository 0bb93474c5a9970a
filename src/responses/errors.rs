use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into an HTML error page.
/// Anything but a missing file shares one generic message; the detail only goes to the log.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();

    let message = match &err {
        ServerError::NotFound => "Not Found",
        _ => {
            log::error!("❌ {err}");
            "Internal Server Error"
        }
    };

    let html = error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
