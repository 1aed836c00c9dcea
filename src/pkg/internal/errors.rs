use axum::http::StatusCode;
use standard_error::{Interpolate, StandardError, Status};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("duplicate job id {0}")]
    DuplicateId(u32),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown rate type: {0}")]
    UnknownRateType(String),

    #[error("malformed rate: {0}")]
    MalformedRate(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("catalog io: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BoardError {
    fn error_code(&self) -> (&'static str, StatusCode) {
        match self {
            BoardError::DuplicateId(_) | BoardError::Io(_) | BoardError::Parse(_) => {
                ("ERR-CATALOG-000", StatusCode::INTERNAL_SERVER_ERROR)
            }
            BoardError::UnknownCategory(_)
            | BoardError::UnknownRateType(_)
            | BoardError::MalformedRate(_)
            | BoardError::MissingField(_) => ("ERR-JOB-001", StatusCode::BAD_REQUEST),
        }
    }

    /// Coded service error carrying the matching http status.
    pub fn into_standard_error(self) -> StandardError {
        let (code, status) = self.error_code();
        StandardError::new(code)
            .code(status)
            .interpolate_err(self.to_string())
    }
}
