//! Response bodies other than the stats payload itself.

use serde::{Deserialize, Serialize};

/// Message returned for every failed stats request.
pub const FAILURE_MESSAGE: &str = "Could not fetch Ubisoft page";

/// Uniform failure body: `{"ok": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub ok: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

impl Default for FailureResponse {
    fn default() -> Self {
        Self::new(FAILURE_MESSAGE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_body_shape() {
        let json = serde_json::to_value(FailureResponse::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ok": false, "error": "Could not fetch Ubisoft page" })
        );
    }
}
