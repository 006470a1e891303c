use crate::adapters::cache::CacheClient;
use crate::adapters::database::DbPool;
use crate::config::{HealthConfig, ServiceConfig};
use crate::domain::health::{HealthReport, ProbeResult};
use async_trait::async_trait;
use futures::future;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// A liveness check against one external dependency.
///
/// Implementations must not let errors escape: anything that goes wrong is
/// reported through the `Err` string so one broken dependency can never
/// abort the probing of another.
#[async_trait]
pub trait HealthProbe: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn check(&self) -> Result<(), String>;
}

/// Verifies database reachability with a trivial round-trip query.
///
/// The pool scopes the connection: it is acquired when the query runs and
/// returned on every exit path, success or failure.
#[derive(Clone, Debug)]
pub struct DatabaseProbe {
    pool: DbPool,
}

impl DatabaseProbe {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for DatabaseProbe {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> Result<(), String> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Verifies cache reachability with a `PING` round trip.
#[derive(Clone, Debug)]
pub struct CacheProbe {
    cache: CacheClient,
}

impl CacheProbe {
    #[must_use]
    pub const fn new(cache: CacheClient) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl HealthProbe for CacheProbe {
    fn name(&self) -> &str {
        "redis"
    }

    async fn check(&self) -> Result<(), String> {
        self.cache.ping().await.map_err(|e| e.to_string())
    }
}

/// Runs the registered probes and folds their results into one report.
#[derive(Clone, Debug)]
pub struct HealthService {
    service: String,
    version: String,
    probes: Arc<Vec<Arc<dyn HealthProbe>>>,
    probe_timeout: Duration,
}

impl HealthService {
    #[must_use]
    pub fn new(service: &ServiceConfig, probes: Vec<Arc<dyn HealthProbe>>, health: &HealthConfig) -> Self {
        Self {
            service: service.name.clone(),
            version: service.version.clone(),
            probes: Arc::new(probes),
            probe_timeout: Duration::from_millis(health.probe_timeout_ms),
        }
    }

    /// Probes every dependency and aggregates the outcomes.
    ///
    /// Probes share no mutable state, so they are fanned out concurrently
    /// and joined; the report lists results in registration order.
    pub async fn report(&self) -> HealthReport {
        let checks =
            future::join_all(self.probes.iter().map(|probe| self.run_probe(Arc::clone(probe)))).await;
        HealthReport::new(self.service.clone(), self.version.clone(), checks)
    }

    /// Runs one probe under the configured deadline, downgrading any
    /// failure to a `ProbeResult`.
    async fn run_probe(&self, probe: Arc<dyn HealthProbe>) -> ProbeResult {
        match timeout(self.probe_timeout, probe.check()).await {
            Ok(Ok(())) => ProbeResult::ok(probe.name()),
            Ok(Err(detail)) => {
                tracing::warn!(component = probe.name(), detail = %detail, "Health probe failed");
                ProbeResult::failed(probe.name(), detail)
            }
            Err(_) => {
                tracing::warn!(
                    component = probe.name(),
                    timeout_ms = self.probe_timeout.as_millis() as u64,
                    "Health probe timed out"
                );
                ProbeResult::failed(probe.name(), format!("{} check timed out", probe.name()))
            }
        }
    }
}
