use serde::Serialize;

/// Overall classification of a health report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
        }
    }
}

/// Outcome of a single dependency liveness check.
///
/// `detail` is present exactly when the check failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    pub name: String,
    pub healthy: bool,
    pub detail: Option<String>,
}

impl ProbeResult {
    #[must_use]
    pub fn ok(name: impl Into<String>) -> Self {
        Self { name: name.into(), healthy: true, detail: None }
    }

    #[must_use]
    pub fn failed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { name: name.into(), healthy: false, detail: Some(detail.into()) }
    }
}

/// Aggregated view over all dependency probes, built fresh for every request.
#[derive(Clone, Debug)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub checks: Vec<ProbeResult>,
}

impl HealthReport {
    /// Derives the overall status from the individual checks: unhealthy as
    /// soon as any single check is unhealthy.
    #[must_use]
    pub fn new(service: String, version: String, checks: Vec<ProbeResult>) -> Self {
        let status = if checks.iter().all(|c| c.healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        Self { status, service, version, checks }
    }
}
