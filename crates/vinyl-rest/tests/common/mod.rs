//! Shared helpers for the REST end-to-end tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use vinyl_config::{AuthConfig, SecurityConfig, ServerConfig};
use vinyl_repository::{DatabasePool, InMemoryAlbumRepository};
use vinyl_rest::{create_router, AppState};
use vinyl_security::{StaticCredentialProvider, TokenProvider};
use vinyl_service::{AlbumServiceImpl, AuthServiceImpl, RedisCacheService};

pub const TEST_SECRET: &str = "e2e-test-secret";

/// Router over an in-memory store with the cache switched off.
pub fn test_app() -> Router {
    let albums = AlbumServiceImpl::new(
        Arc::new(InMemoryAlbumRepository::new()),
        Arc::new(RedisCacheService::disabled()),
        Duration::from_secs(60),
    );

    let tokens = TokenProvider::new(&SecurityConfig {
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration_secs: 3600,
    })
    .unwrap();
    let credentials = StaticCredentialProvider::from_config(&AuthConfig::default()).unwrap();
    let auth = AuthServiceImpl::new(Arc::new(credentials), Arc::new(tokens));

    let state = AppState::new(
        Arc::new(albums),
        Arc::new(auth),
        Arc::new(DatabasePool::Memory),
    );
    create_router(state, &ServerConfig::default())
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty or non-JSON body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Logs in as the default configured user.
pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/auth/login",
        Some(serde_json::json!({"email": "demo@example.com", "password": "password123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
