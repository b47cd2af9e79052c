use super::error::AppError;
use super::validate::Validate;
use serde::Deserialize;

/// Opaque payload of `/api/v1/health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(pub serde_json::Value);

impl HealthStatus {
    /// The `status` field, when the backend reports one.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(serde_json::Value::as_str)
    }

    pub fn is_healthy(&self) -> bool {
        self.status()
            .is_none_or(|s| matches!(s, "healthy" | "ok" | "operational"))
    }
}

impl Validate for HealthStatus {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_payload() {
        let json = r#"{
            "status": "healthy",
            "timestamp": "2025-10-04T12:30:45",
            "service": "stockgenie-backend",
            "environment": "development"
        }"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert_eq!(health.status(), Some("healthy"));
        assert!(health.is_healthy());
    }

    #[test]
    fn test_degraded_and_opaque_payloads() {
        let degraded: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());

        let opaque: HealthStatus = serde_json::from_str("\"pong\"").unwrap();
        assert_eq!(opaque.status(), None);
        assert!(opaque.is_healthy());
    }
}
