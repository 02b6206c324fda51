// errors.rs
use crate::filters::FilterError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, backend).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Backend Error: {0}")]
    Backend(String),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Backend(_) => 502,
            ServerError::DbError(_)
            | ServerError::XlsxError(_)
            | ServerError::Filter(_)
            | ServerError::InternalError => 500,
        }
    }
}
