use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status_code();
    if status >= 500 {
        error!(status, "request failed: {err}");
    } else {
        warn!(status, "request rejected: {err}");
    }

    let message = match &err {
        // keep internals out of the page
        ServerError::DbError(_) | ServerError::Filter(_) | ServerError::InternalError => {
            "Internal Server Error".to_string()
        }
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
