use crate::utils::ApiTags;
use chrono::{DateTime, Utc};
use poem_openapi::{payload::Json, Object, OpenApi};
use serde::Serialize;

/// Liveness response returned by /api/health
#[derive(Debug, Object, Clone, Eq, PartialEq, Serialize)]
pub struct HealthStatus {
    /// always "ok" while the server is able to respond
    pub status: String,

    /// server time when the response was generated
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn now() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}

pub struct HealthCheck;

#[OpenApi(tag = "ApiTags::HealthCheck")]
impl HealthCheck {
    pub fn new() -> Self {
        Self
    }

    #[oai(path = "/health", method = "get")]
    async fn health(&self) -> Json<HealthStatus> {
        Json(HealthStatus::now())
    }
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self::new()
    }
}
