//! Shared helpers for API integration tests.
//!
//! Builds the same router (middleware stack included) that `main.rs` runs,
//! against the per-test database `#[sqlx::test]` provides, and offers small
//! request/response helpers around `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use rebook_api::auth::jwt::{generate_access_token, JwtConfig};
use rebook_api::config::ServerConfig;
use rebook_api::router::build_app_router;
use rebook_api::state::AppState;
use rebook_db::models::member::CreateMember;
use rebook_db::repositories::MemberRepo;

/// HMAC secret shared by the test config and the token helpers.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `JwtConfig` with the shared secret.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a valid `Authorization` header value for the given member.
pub fn bearer(member_id: &str) -> String {
    let token = generate_access_token(member_id, &test_jwt_config())
        .expect("token generation should succeed");
    format!("Bearer {token}")
}

/// Insert a member row directly (members have no HTTP surface here).
pub async fn seed_member(pool: &PgPool, id: &str, nickname: &str) {
    MemberRepo::create(
        pool,
        &CreateMember {
            id: id.to_string(),
            nickname: nickname.to_string(),
        },
    )
    .await
    .expect("member creation should succeed");
}

/// Build a request with optional `Authorization` header and JSON body.
pub fn json_request(
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth_value) = auth {
        builder = builder.header(header::AUTHORIZATION, auth_value);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request construction should succeed")
}

/// Drive one request through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should be routed")
}

/// GET with no auth header.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, json_request(Method::GET, uri, None, None)).await
}

/// POST a JSON body, optionally authorized.
pub async fn post_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, auth, Some(body))).await
}

/// PUT a JSON body, optionally authorized.
pub async fn put_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, auth, Some(body))).await
}

/// DELETE with an optional auth header.
pub async fn delete(app: Router, uri: &str, auth: Option<&str>) -> Response {
    send(app, json_request(Method::DELETE, uri, auth, None)).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
