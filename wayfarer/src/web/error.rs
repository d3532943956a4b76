use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;
use wayfarer_api_types::result::ErrorBody;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Query is required")]
    EmptyQuery,
    #[error("upstream search service error: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyQuery => StatusCode::BAD_REQUEST,
            ApiError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Upstream detail goes to the log, not to the client.
    fn public_message(&self) -> String {
        match self {
            ApiError::EmptyQuery => self.to_string(),
            ApiError::Upstream(_) => "search service unavailable".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("api error: {self}");
        (
            self.as_status_code(),
            Json(ErrorBody::message(self.public_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_maps_to_bad_request() {
        let response = ApiError::EmptyQuery.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_query_message_matches_search_service() {
        assert_eq!(ApiError::EmptyQuery.public_message(), "Query is required");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_gateway_with_generic_message() {
        // port 9 (discard) is not listening, so this fails to connect
        let err = reqwest::get("http://127.0.0.1:9").await.unwrap_err();
        let api_err = ApiError::from(err);
        assert_eq!(api_err.as_status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(api_err.public_message(), "search service unavailable");
    }
}
