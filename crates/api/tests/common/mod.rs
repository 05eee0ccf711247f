//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use qurban_api::config::ServerConfig;
use qurban_api::router::build_app_router;
use qurban_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to the same [`build_app_router`] that `main.rs` uses, so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the given URI.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the given URI.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Catalog seeding
// ---------------------------------------------------------------------------

/// Seed a period and a shared cow package (1/7 slot) priced at 2,200,000.
/// Returns (period_id, package_period_id).
pub async fn seed_shared_cow_catalog(pool: &PgPool) -> (i64, i64) {
    seed_catalog(pool, "Qurban 1447H", "cow", "shared", Some(7), 2_200_000).await
}

/// Seed a period and an individual goat package priced at 900,000.
/// Returns (period_id, package_period_id).
pub async fn seed_goat_catalog(pool: &PgPool) -> (i64, i64) {
    seed_catalog(pool, "Qurban 1447H", "goat", "individual", None, 900_000).await
}

async fn seed_catalog(
    pool: &PgPool,
    period_name: &str,
    animal_type: &str,
    package_type: &str,
    max_slots: Option<i32>,
    price: i64,
) -> (i64, i64) {
    let (period_id,): (i64,) = sqlx::query_as("INSERT INTO periods (name) VALUES ($1) RETURNING id")
        .bind(period_name)
        .fetch_one(pool)
        .await
        .unwrap();

    let (package_id,): (i64,) = sqlx::query_as(
        "INSERT INTO packages (name, animal_type, package_type, max_slots) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(format!("{animal_type} {package_type}"))
    .bind(animal_type)
    .bind(package_type)
    .bind(max_slots)
    .fetch_one(pool)
    .await
    .unwrap();

    let (package_period_id,): (i64,) = sqlx::query_as(
        "INSERT INTO package_periods (package_id, period_id, price) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(package_id)
    .bind(period_id)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap();

    (period_id, package_period_id)
}

/// Create a savings account through the API and return its JSON payload.
pub async fn create_account_via_api(
    app: &Router,
    period_id: i64,
    package_period_id: i64,
) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/v1/savings",
        serde_json::json!({
            "donor_name": "Budi Santoso",
            "donor_phone": "+628123456789",
            "period_id": period_id,
            "package_period_id": package_period_id,
            "installment_frequency": "monthly",
            "installment_count": 12,
            "installment_day": 15,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Record a deposit through the API and return its JSON payload.
pub async fn record_deposit_via_api(
    app: &Router,
    savings_id: i64,
    amount: i64,
) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/savings/{savings_id}/deposits"),
        serde_json::json!({
            "amount": amount,
            "payment_method": "transfer",
            "payment_channel": "BSI",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
