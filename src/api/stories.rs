use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Returns a canned story until the narration engine is wired up.
pub async fn generate_story() -> impl IntoResponse {
    Json(json!({
        "id": "mock-story-123",
        "title": "The Journey Begins",
        "content": "Your adventure starts here...",
        "narrator": "Default Narrator",
        "duration": 180
    }))
}

pub async fn get_stories() -> impl IntoResponse {
    Json(json!({ "stories": [], "total": 0 }))
}
