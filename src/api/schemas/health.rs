use crate::domain::health::{HealthReport, HealthStatus, ProbeResult};
use serde::Serialize;
use serde::ser::SerializeMap;

/// Body of `GET /health`: static liveness, no dependency checks.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
}

/// Body of `GET /health/detailed`.
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub checks: CheckMap,
}

/// Serializes probe results as a JSON object keyed by dependency name,
/// preserving probe registration order.
#[derive(Debug)]
pub struct CheckMap(Vec<ProbeResult>);

impl Serialize for CheckMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for check in &self.0 {
            map.serialize_entry(&check.name, &render_check(check))?;
        }
        map.end()
    }
}

fn render_check(check: &ProbeResult) -> String {
    if check.healthy {
        "healthy".to_string()
    } else {
        format!("unhealthy: {}", check.detail.as_deref().unwrap_or("unknown"))
    }
}

impl From<HealthReport> for DetailedHealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status,
            service: report.service,
            version: report.version,
            checks: CheckMap(report.checks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(checks: Vec<ProbeResult>) -> HealthReport {
        HealthReport::new("AI Road Trip Storyteller API".to_string(), "1.0.0".to_string(), checks)
    }

    #[test]
    fn test_all_healthy_rendering() {
        let response = DetailedHealthResponse::from(report(vec![
            ProbeResult::ok("database"),
            ProbeResult::ok("redis"),
        ]));

        let value = serde_json::to_value(&response).expect("serialization");
        assert_eq!(
            value,
            json!({
                "status": "healthy",
                "service": "AI Road Trip Storyteller API",
                "version": "1.0.0",
                "checks": {
                    "database": "healthy",
                    "redis": "healthy"
                }
            })
        );
    }

    #[test]
    fn test_failed_cache_rendering() {
        let response = DetailedHealthResponse::from(report(vec![
            ProbeResult::ok("database"),
            ProbeResult::failed("redis", "Connection refused"),
        ]));

        let value = serde_json::to_value(&response).expect("serialization");
        assert_eq!(value["status"], "unhealthy");
        assert_eq!(value["checks"]["database"], "healthy");
        assert_eq!(value["checks"]["redis"], "unhealthy: Connection refused");
    }
}
