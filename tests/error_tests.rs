// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

use axum::http::StatusCode;
use axum::response::IntoResponse;
use wanderly::error::AppError;

#[test]
fn test_is_auth_error_matches_only_auth() {
    assert!(AppError::Auth("status 401".to_string()).is_auth_error());

    assert!(!AppError::Transport("HTTP 500".to_string()).is_auth_error());
    assert!(!AppError::Decode("missing field".to_string()).is_auth_error());
    assert!(!AppError::Validation("empty".to_string()).is_auth_error());
}

#[test]
fn test_status_mapping() {
    let cases = [
        (AppError::Validation("x".to_string()), StatusCode::BAD_REQUEST),
        (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (AppError::Auth("x".to_string()), StatusCode::BAD_GATEWAY),
        (AppError::Transport("x".to_string()), StatusCode::BAD_GATEWAY),
        (AppError::Decode("x".to_string()), StatusCode::BAD_GATEWAY),
        (
            AppError::Database("x".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::Internal(anyhow::anyhow!("x")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        let label = err.to_string();
        assert_eq!(err.into_response().status(), status, "{}", label);
    }
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let response = AppError::Database("connection refused to 10.0.0.3".to_string()).into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}
