use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn get_profile() -> impl IntoResponse {
    Json(json!({ "message": "User profile endpoint - TODO" }))
}

pub async fn update_profile() -> impl IntoResponse {
    Json(json!({ "message": "Update profile endpoint - TODO" }))
}
