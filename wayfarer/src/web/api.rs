use axum::{extract::State, Json};
use wayfarer_api_types::search::{SearchQuery, SearchResponse};
use wayfarer_api_types::stats::{HealthResponse, StatsResponse};

use super::error::ApiError;
use super::gateway::SearchGateway;

/// `POST /api/search`. Rejects blank queries before they ever reach the
/// search service.
pub(crate) async fn search(
    State(gateway): State<SearchGateway>,
    Json(body): Json<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = body.normalized().ok_or(ApiError::EmptyQuery)?;
    Ok(Json(gateway.search(&query).await?))
}

/// `GET /api/stats`. Index statistics, consumed by the client at startup.
pub(crate) async fn stats(
    State(gateway): State<SearchGateway>,
) -> Result<Json<StatsResponse>, ApiError> {
    Ok(Json(gateway.stats().await?))
}

/// `GET /api/health`.
pub(crate) async fn health(
    State(gateway): State<SearchGateway>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(gateway.health().await?))
}
