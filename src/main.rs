#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use roadtrip_server::api::AppState;
use roadtrip_server::config::Config;
use roadtrip_server::services::health_service::{CacheProbe, DatabaseProbe, HealthProbe, HealthService};
use roadtrip_server::services::intrusion_service::IntrusionDetection;
use roadtrip_server::{adapters, api, telemetry};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(service = %config.service.name, "Starting AI Road Trip Storyteller API...");

    // Infrastructure: lazy pool so the server can come up while the
    // database is down and report it through the detailed health check.
    let pool = adapters::database::init_pool(&config.database)?;
    match adapters::database::run_migrations(&pool).await {
        Ok(()) => tracing::info!("Database connected successfully"),
        Err(e) => {
            tracing::warn!(error = %e, "Database connection failed");
            tracing::warn!("Running without database - some features will be limited");
        }
    }

    let cache = adapters::cache::CacheClient::new(&config.redis)?;

    let intrusion = Arc::new(IntrusionDetection::new());
    intrusion.start();

    let probes: Vec<Arc<dyn HealthProbe>> =
        vec![Arc::new(DatabaseProbe::new(pool)), Arc::new(CacheProbe::new(cache))];
    let health_service = HealthService::new(&config.service, probes, &config.health);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    roadtrip_server::spawn_signal_handler(shutdown_tx);

    let state = AppState { config: config.clone(), health_service, intrusion: Arc::clone(&intrusion) };
    let router = api::app_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "listening");

    let mut rx = shutdown_rx;
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = rx.wait_for(|&stopped| stopped).await;
        })
        .await?;

    intrusion.stop();
    tracing::info!("Shutting down API...");
    Ok(())
}
