use serde::{Deserialize, Serialize};

/// Response of `GET /api/stats`. The stats payload is backend-defined and only
/// ever logged, so it stays an untyped JSON value.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `GET /api/health`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub components: serde_json::Value,
}
