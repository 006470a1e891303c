use crate::api::schemas::auth::{Login, Refresh, Registration, Token, UserResponse};
use crate::error::{AppError, Result};
use axum::{Json, http::StatusCode, response::IntoResponse};
use time::OffsetDateTime;

// Placeholder issuance until a real account service exists. Payloads are
// validated, but no credentials are stored or checked.

pub async fn register(Json(payload): Json<Registration>) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::BadRequest)?;

    let token = placeholder_token(payload.email, payload.username, payload.full_name);
    Ok((StatusCode::CREATED, Json(token)))
}

pub async fn login(Json(payload): Json<Login>) -> Result<impl IntoResponse> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest("Email and password are required".to_string()));
    }

    let token = placeholder_token(payload.email, "traveler".to_string(), None);
    Ok(Json(token))
}

pub async fn refresh(Json(payload): Json<Refresh>) -> Result<impl IntoResponse> {
    if payload.refresh_token.is_empty() {
        return Err(AppError::BadRequest("Refresh token is required".to_string()));
    }

    let token = placeholder_token("traveler@example.com".to_string(), "traveler".to_string(), None);
    Ok(Json(token))
}

fn placeholder_token(email: String, username: String, full_name: Option<String>) -> Token {
    Token {
        access_token: "mock-access-token".to_string(),
        refresh_token: "mock-refresh-token".to_string(),
        token_type: "bearer".to_string(),
        user: UserResponse {
            id: 0,
            email,
            username,
            full_name,
            is_active: true,
            is_verified: false,
            subscription_tier: "free".to_string(),
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        },
    }
}
