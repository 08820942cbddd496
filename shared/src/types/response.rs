//! Health check response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Overall health of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Per-dependency status
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub services: HashMap<String, HealthStatus>,
}

impl HealthResponse {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: version.into(),
            timestamp: Utc::now(),
            services: HashMap::new(),
        }
    }

    /// Record a dependency; any unhealthy dependency degrades the service
    pub fn with_service(mut self, name: impl Into<String>, status: HealthStatus) -> Self {
        if status != HealthStatus::Healthy && self.status == HealthStatus::Healthy {
            self.status = HealthStatus::Degraded;
        }
        self.services.insert(name.into(), status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhealthy_dependency_degrades() {
        let health = HealthResponse::new("0.1.0").with_service("database", HealthStatus::Unhealthy);
        assert_eq!(health.status, HealthStatus::Degraded);
    }
}
