use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn get_bookings() -> impl IntoResponse {
    Json(json!({ "bookings": [], "total": 0 }))
}

pub async fn create_booking() -> impl IntoResponse {
    Json(json!({ "message": "Booking creation endpoint - TODO" }))
}
