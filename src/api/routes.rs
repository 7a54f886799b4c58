use axum::{
    http::{header, HeaderValue},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    config::Environment,
    middleware::{fault_boundary, make_span_with_request_id, panic_response, request_id_middleware},
};

use super::handlers;
use super::AppState;

/// Creates the API router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let environment = state.environment();

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/movie", get(handlers::get_movies))
        .with_state(state);

    apply_middleware(router, environment)
}

/// Wraps `router` in the fault boundary, tracing, CORS, hardening headers
/// and request ID layers. The last layer added runs first.
pub fn apply_middleware(router: Router, environment: Environment) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(environment, fault_boundary))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CorsLayer::permissive())
        .layer(from_fn(request_id_middleware))
}
