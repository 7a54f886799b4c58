use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    config::Environment,
    error::{AppError, Fault},
};

/// Turns a caught panic payload into an [`AppError::Panic`] response
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Panic(message).into_response()
}

/// Terminal boundary for unhandled faults.
///
/// Responses carrying a [`Fault`] are logged, then passed through unchanged
/// in production or replaced with the detailed body in development.
pub async fn fault_boundary(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let Some(fault) = response.extensions().get::<Fault>().cloned() else {
        return response;
    };

    tracing::error!(kind = fault.kind, error = %fault.message, "Unhandled fault");

    if environment.is_production() {
        return response;
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(fault.detailed_body())).into_response()
}
