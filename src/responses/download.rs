// responses/download.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return file bytes as a download, content type guessed from the extension.
pub fn attachment_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    let content_type = mime_guess::from_path(filename).first_or_octet_stream();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
