use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::services::ValidationError;

/// Message returned for every 500 in production
pub const GENERIC_FAULT_MESSAGE: &str = "server error";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidParameter(#[from] ValidationError),

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    #[error("Request handler panicked: {0}")]
    Panic(String),

    /// Unexpected failure inside a handler. Nothing on the `/movie` path
    /// produces one today; handlers return it for faults that should reach
    /// the fault boundary as a 500 rather than panic.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Details of an unhandled fault, attached to the 500 response so the
/// fault boundary can log it and decide how much of it to expose.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub kind: &'static str,
    pub message: String,
}

impl Fault {
    /// Body exposed in production
    pub fn public_body() -> Value {
        json!({ "error": { "message": GENERIC_FAULT_MESSAGE } })
    }

    /// Body exposed in development, carrying the full detail
    pub fn detailed_body(&self) -> Value {
        json!({
            "message": self.message,
            "error": {
                "kind": self.kind,
                "message": self.message,
            }
        })
    }
}

impl AppError {
    fn fault(&self) -> Option<Fault> {
        let kind = match self {
            AppError::Panic(_) => "panic",
            AppError::Internal(_) => "internal",
            AppError::InvalidParameter(_) | AppError::MalformedQuery(_) => return None,
        };
        Some(Fault {
            kind,
            message: self.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(fault) = self.fault() {
            let mut response =
                (StatusCode::INTERNAL_SERVER_ERROR, Json(Fault::public_body())).into_response();
            response.extensions_mut().insert(fault);
            return response;
        }

        // Client errors are plain text guidance
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
