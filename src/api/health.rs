use crate::api::AppState;
use crate::api::schemas::health::{DetailedHealthResponse, HealthResponse};
use crate::domain::health::HealthStatus;
use axum::{Json, extract::State, response::IntoResponse};

/// Basic health check: always reports healthy while the process serves
/// requests. Cheap enough for load balancers to poll aggressively.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        service: state.config.service.name.clone(),
        version: state.config.service.version.clone(),
    })
}

/// Detailed health check probing the database and the cache.
///
/// Always answers 200: the body carries the failure signal, so monitoring
/// tooling gets a polling target whose transport never errors.
pub async fn detailed_health_check(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.health_service.report().await;
    Json(DetailedHealthResponse::from(report))
}
