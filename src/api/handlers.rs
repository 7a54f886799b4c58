use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::MovieQuery,
    services::{filter, validation, FilterOutcome},
};

use super::AppState;

/// Body sent when valid criteria match nothing
pub const NO_MATCHES_MESSAGE: &str = "No matches found. Please try again.";

impl IntoResponse for FilterOutcome<'_> {
    fn into_response(self) -> Response {
        match self {
            FilterOutcome::Unfiltered(movies) => Json(movies).into_response(),
            FilterOutcome::Matches(movies) => Json(movies).into_response(),
            // An empty result is a successful outcome, not an error
            FilterOutcome::NoMatches => (StatusCode::OK, NO_MATCHES_MESSAGE).into_response(),
        }
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "movies": state.dataset().len() })),
    )
}

/// `GET /movie`: filter the collection by genre, country and minimum average vote
pub async fn get_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<MovieQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|rejection| AppError::MalformedQuery(rejection.body_text()))?;

    tracing::info!(
        request_id = %request_id,
        genre = ?query.genre,
        country = ?query.country,
        avg_vote = ?query.avg_vote,
        "Processing movie search"
    );

    let criteria = validation::validate(&query)?;
    let outcome = filter::apply(state.dataset().movies(), &criteria);

    Ok(outcome.into_response())
}
