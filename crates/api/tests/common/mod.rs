#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use agritrace_api::auth::jwt::{JwtConfig, DEFAULT_EXPIRY_HOURS};
use agritrace_api::config::{ServerConfig, DEFAULT_UPLOAD_MAX_BYTES};
use agritrace_api::router::build_app_router;
use agritrace_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-with-enough-entropy";

/// Build a test `ServerConfig` with safe defaults, storing uploads in
/// `upload_dir`.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir,
        upload_max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        public_base_url: "http://localhost:8080".to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: DEFAULT_EXPIRY_HOURS,
        },
    }
}

/// Build the full application router, with the same middleware stack as
/// `main.rs`, using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, &std::env::temp_dir().join("agritrace-test-uploads"))
}

pub fn build_test_app_with_uploads(pool: PgPool, upload_dir: &Path) -> Router {
    build_test_app_with_config(pool, test_config(upload_dir.to_path_buf()))
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn put_empty(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::PUT, uri, None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a create request and return the new id from the envelope.
pub async fn create(app: Router, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::OK, "create at {uri} should succeed");
    let json = body_json(response).await;
    json["data"].as_i64().expect("create returns the new id")
}

/// Ids of one company, product, place, batch and shipment linked together.
pub struct Chain {
    pub company: i64,
    pub product: i64,
    pub place: i64,
    pub production: i64,
    pub logistics: i64,
}

/// Create a full production-to-shipment chain through the API.
pub async fn seed_chain(pool: &PgPool) -> Chain {
    let company = create(
        build_test_app(pool.clone()),
        "/company",
        serde_json::json!({
            "name": "Green Freight",
            "address": "1 Depot Rd",
            "administrator": "Lee",
            "phone": "555-0100"
        }),
    )
    .await;
    let product = create(
        build_test_app(pool.clone()),
        "/product",
        serde_json::json!({
            "name": "Jasmine Rice",
            "type": "grain",
            "unitPrice": 3.5
        }),
    )
    .await;
    let place = create(
        build_test_app(pool.clone()),
        "/productionPlace",
        serde_json::json!({
            "address": "North Field",
            "administrator": "Park",
            "phone": "555-0200"
        }),
    )
    .await;
    let production = create(
        build_test_app(pool.clone()),
        "/productionInfo",
        serde_json::json!({
            "productId": product,
            "productionPlaceId": place,
            "seedSource": "Co-op seed bank",
            "plantingDate": "2024-03-01",
            "harvestDate": "2024-07-15"
        }),
    )
    .await;
    let logistics = create(
        build_test_app(pool.clone()),
        "/logistics",
        serde_json::json!({
            "productionInfoId": production,
            "companyId": company,
            "startLocation": "North Field",
            "destination": "City Market",
            "startTime": "2024-07-16T08:00:00Z"
        }),
    )
    .await;

    Chain {
        company,
        product,
        place,
        production,
        logistics,
    }
}
