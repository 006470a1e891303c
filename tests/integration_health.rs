#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc)]

use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_health_is_healthy_even_with_dependencies_down() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/health", app.base_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "AI Road Trip Storyteller API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_detailed_health_returns_200_when_unhealthy() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/health/detailed", app.base_url)).send().await.unwrap();

    // The body, not the transport status, carries the failure signal.
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["service"], "AI Road Trip Storyteller API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_detailed_health_reports_every_dependency() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/health/detailed", app.base_url)).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();

    // Both probes point at closed ports; each must still be reported with
    // its own failure detail.
    for component in ["database", "redis"] {
        let check = body["checks"][component].as_str().unwrap();
        assert!(
            check.starts_with("unhealthy: "),
            "{component} should be unhealthy, got {check:?}"
        );
        assert!(check.len() > "unhealthy: ".len(), "{component} detail must not be empty");
    }
}

#[tokio::test]
async fn test_detailed_health_is_idempotent() {
    let app = common::TestApp::spawn().await;
    let url = format!("{}/health/detailed", app.base_url);

    let first: serde_json::Value = app.client.get(&url).send().await.unwrap().json().await.unwrap();
    let second: serde_json::Value = app.client.get(&url).send().await.unwrap().json().await.unwrap();

    assert_eq!(first["status"], second["status"]);

    let first_checks = first["checks"].as_object().unwrap();
    let second_checks = second["checks"].as_object().unwrap();
    assert_eq!(
        first_checks.keys().collect::<Vec<_>>(),
        second_checks.keys().collect::<Vec<_>>()
    );
    for (name, value) in first_checks {
        let then = value.as_str().unwrap();
        let now = second_checks[name].as_str().unwrap();
        assert_eq!(
            then.starts_with("unhealthy"),
            now.starts_with("unhealthy"),
            "classification for {name} changed between calls"
        );
    }
}
