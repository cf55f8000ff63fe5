use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::error;
use wayfinder_core::Error;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub description: String,
}

impl ErrorBody {
    pub fn response(status: StatusCode, description: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            description: description.into(),
        })
    }
}

/// Core error surfaced through HTTP.
///
/// Validation-class errors are the caller's fault and are echoed back as 400 (404 for a
/// missing graph); anything else is logged and hidden behind a generic 500.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            Error::GraphNotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
            ErrorBody::response(status, "Internal server error. Please retry later")
        } else {
            ErrorBody::response(status, self.0.to_string())
        }
    }
}
