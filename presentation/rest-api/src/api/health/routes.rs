use chrono::{DateTime, Utc};
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process is serving requests
    pub status: String,
    pub timestamp: String,
    pub version: String,
    /// Backend holding the cart record ("sqlite" or "memory")
    pub storage: String,
    /// Seconds since the service started
    pub uptime_seconds: i64,
}

pub struct HealthApi {
    storage: String,
    started_at: DateTime<Utc>,
}

impl HealthApi {
    pub fn new(storage: impl Into<String>) -> Self {
        Self {
            storage: storage.into(),
            started_at: Utc::now(),
        }
    }

    fn report(&self, now: DateTime<Utc>) -> HealthCheckResponse {
        HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: self.storage.clone(),
            uptime_seconds: (now - self.started_at).num_seconds().max(0),
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Public liveness probe for the storefront front-end and container
    /// orchestration.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(self.report(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_report_storage_and_uptime() {
        let api = HealthApi::new("memory");

        let report = api.report(api.started_at + Duration::seconds(42));

        assert_eq!(report.status, "healthy");
        assert_eq!(report.storage, "memory");
        assert_eq!(report.uptime_seconds, 42);
    }
}
