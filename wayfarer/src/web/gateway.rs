use std::sync::Arc;
use std::time::Duration;

use wayfarer_api_types::search::{SearchQuery, SearchResponse};
use wayfarer_api_types::stats::{HealthResponse, StatsResponse};

use super::error::ApiError;
use crate::config::Config;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the external search service. Owns the pooled HTTP client
/// and the upstream base URL; all ranking and graph work happens upstream.
#[derive(Clone)]
pub(crate) struct SearchGateway {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl SearchGateway {
    pub(crate) fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(UPSTREAM_TIMEOUT)
                .build()?,
            base_url: config.upstream_url.as_str().into(),
        })
    }

    pub(crate) async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/search", self.base_url))
            .json(query)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn stats(&self) -> Result<StatsResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn health(&self) -> Result<HealthResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;
        Ok(response.json().await?)
    }
}
