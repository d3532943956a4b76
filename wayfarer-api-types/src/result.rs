use serde::{Deserialize, Serialize};

/// Error body the gateway returns for its own failures, mirroring the shape
/// the search service uses: `{"success": false, "error": "..."}`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
