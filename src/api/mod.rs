use crate::config::Config;
use crate::error::AppError;
use crate::services::health_service::HealthService;
use crate::services::intrusion_service::{IntrusionDetection, ThreatLevel};
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod bookings;
pub mod health;
pub mod schemas;
pub mod stories;
pub mod users;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub health_service: HealthService,
    pub intrusion: Arc<IntrusionDetection>,
}

/// Configures and returns the application router.
pub fn app_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/users/profile", get(users::get_profile).put(users::update_profile))
        .route("/stories/generate", post(stories::generate_story))
        .route("/stories", get(stories::get_stories))
        .route("/bookings", get(bookings::get_bookings).post(bookings::create_booking));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .route("/health/detailed", get(health::detailed_health_check))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), inspect_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(Duration::from_secs(state.config.server.request_timeout_secs)))
        .layer(cors_layer(&state.config))
        .with_state(state)
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to AI Road Trip Storyteller API",
        "version": state.config.service.version,
        "docs": "/docs",
        "health": "/health"
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Runs every request past the intrusion detection stub before routing.
async fn inspect_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let verdict = state.intrusion.analyze_request(request.method().as_str(), request.uri().path());
    if verdict.threat_level != ThreatLevel::Low {
        tracing::warn!(
            method = %request.method(),
            path = request.uri().path(),
            analysis = %verdict.analysis,
            "Suspicious request"
        );
    }
    next.run(request).await
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .map_err(|e| tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
