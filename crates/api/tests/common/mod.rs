//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`,
//! without a TCP listener.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use tireshop_api::config::{LogFormat, ServerConfig};
use tireshop_api::photo_store::PhotoStore;
use tireshop_api::router::build_app_router;
use tireshop_api::state::AppState;

const MULTIPART_BOUNDARY: &str = "tireshop-test-boundary";

/// Build a test `ServerConfig` with a fresh storage root under the system
/// temp directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_root: std::env::temp_dir().join(format!("tireshop-api-{}", uuid::Uuid::new_v4())),
        max_photo_bytes: 1024,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        photos: PhotoStore::new(config.storage_root.clone()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Absolute path of a stored file below a config's storage root.
pub fn stored_file(config: &ServerConfig, relative: &str) -> PathBuf {
    config.storage_root.join(relative)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(body.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::PUT,
        uri,
        Body::from(body.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

/// POST a body verbatim with a JSON content type.
pub async fn send_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(body.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

/// PUT a single-file multipart body.
pub async fn put_file(
    app: Router,
    uri: &str,
    field: &str,
    file_name: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    send(
        app,
        Method::PUT,
        uri,
        Body::from(body),
        Some(format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")),
    )
    .await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

pub fn client_body(name: &str) -> Value {
    json!({"full_name": name, "phone": "+7 912 345-67-89"})
}

pub fn car_body(client_id: i64) -> Value {
    json!({
        "client_id": client_id,
        "brand": "Lada",
        "model": "Vesta",
        "manufacture_year": 2019,
        "license_plate": "А123ВС77",
        "vin": "XTA21129012345678",
    })
}

pub fn tire_body(car_id: i64) -> Value {
    json!({
        "car_id": car_id,
        "tire_type": "Radial",
        "seasonality": "Winter",
        "manufacturer": "Nokian",
        "tire_model": "Hakkapeliitta 10",
        "size": "205/55 R16",
        "load_index": 94,
        "wear_percentage": 85,
        "pressure": 1.6,
    })
}

pub fn master_body(name: &str) -> Value {
    json!({
        "full_name": name,
        "position": "Tire fitter",
        "rank": 4,
        "hourly_rate": "1500.00",
    })
}

pub fn service_body(name: &str) -> Value {
    json!({"service_name": name, "service_cost": "800.00"})
}

pub fn order_body(car_id: i64, master_id: Option<i64>) -> Value {
    json!({
        "order_date": "2026-03-10",
        "car_id": car_id,
        "master_id": master_id,
        "payment_date": null,
    })
}

pub fn work_body(order_number: i64, service_code: i64, master_id: i64) -> Value {
    json!({
        "order_number": order_number,
        "service_code": service_code,
        "master_id": master_id,
        "wheel_count": 4,
        "completion_time_min": 30,
        "work_total": "1200.00",
    })
}

/// Create a row through the API and return its key.
pub async fn create(pool: &PgPool, uri: &str, body: Value, key: &str) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), 201, "creating via {uri}");
    body_json(response).await[key].as_i64().unwrap()
}

/// Keys of a fully linked set of rows.
pub struct Seeded {
    pub client_id: i64,
    pub car_id: i64,
    pub tire_id: i64,
    pub master_id: i64,
    pub service_code: i64,
    pub order_number: i64,
    pub work_id: i64,
}

pub async fn seed(pool: &PgPool) -> Seeded {
    let client_id = create(pool, "/api/v1/clients", client_body("Ivan Petrov"), "client_id").await;
    let car_id = create(pool, "/api/v1/cars", car_body(client_id), "car_id").await;
    let tire_id = create(pool, "/api/v1/tires", tire_body(car_id), "tire_id").await;
    let master_id = create(pool, "/api/v1/masters", master_body("Sergei Ivanov"), "master_id").await;
    let service_code = create(
        pool,
        "/api/v1/services",
        service_body("Wheel balancing"),
        "service_code",
    )
    .await;
    let order_number = create(
        pool,
        "/api/v1/orders",
        order_body(car_id, Some(master_id)),
        "order_number",
    )
    .await;
    let work_id = create(
        pool,
        "/api/v1/completed-works",
        work_body(order_number, service_code, master_id),
        "work_id",
    )
    .await;

    Seeded {
        client_id,
        car_id,
        tire_id,
        master_id,
        service_code,
        order_number,
        work_id,
    }
}
