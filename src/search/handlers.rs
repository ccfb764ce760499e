// HTTP handlers for the flight-search endpoints
// Thin adapters between axum and the search validator held in app state.

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::search::models::{SearchRequest, SearchSnapshot};
use crate::AppState;

/// Handler for POST /api/search
/// Validates a flight-search request and commits it as the current search
#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Request accepted and committed", body = SearchSnapshot),
        (status = 422, description = "Request violated a business rule", body = String, example = json!({"error_code": "EMERGENCY_ROW_REQUIRES_ECONOMY", "message": "Emergency row seating is only offered in economy"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error_code": "INTERNAL_ERROR", "message": "An internal server error occurred"}))
    ),
    tag = "search"
)]
pub async fn submit_search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchSnapshot>, ApiError> {
    tracing::debug!("Validating flight-search request");

    let mut validator = state
        .search
        .lock()
        .map_err(|_| ApiError::Internal("search state lock poisoned".to_string()))?;

    let snapshot = validator.submit(&payload)?.clone();

    tracing::debug!(
        "Committed flight search {} -> {}",
        snapshot.departure_airport_code,
        snapshot.destination_airport_code
    );
    Ok(Json(snapshot))
}

/// Handler for GET /api/search
/// Returns the snapshot of the last accepted flight search
#[utoipa::path(
    get,
    path = "/api/search",
    responses(
        (status = 200, description = "The current accepted search", body = SearchSnapshot),
        (status = 404, description = "No search has been accepted yet", body = String, example = json!({"error_code": "NOT_FOUND", "message": "No flight search has been accepted yet"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error_code": "INTERNAL_ERROR", "message": "An internal server error occurred"}))
    ),
    tag = "search"
)]
pub async fn current_search(
    State(state): State<AppState>,
) -> Result<Json<SearchSnapshot>, ApiError> {
    tracing::debug!("Fetching current flight search");

    let validator = state
        .search
        .lock()
        .map_err(|_| ApiError::Internal("search state lock poisoned".to_string()))?;

    let snapshot = validator
        .current()
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No flight search has been accepted yet".to_string()))?;

    Ok(Json(snapshot))
}
