//! Cascade, set-null and restricted deletes as seen over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, seed};
use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_client_cascades_to_everything_it_owns(pool: PgPool) {
    let seeded = seed(&pool).await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/clients/{}", seeded.client_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for uri in [
        format!("/api/v1/cars/{}", seeded.car_id),
        format!("/api/v1/tires/{}", seeded.tire_id),
        format!("/api/v1/orders/{}", seeded.order_number),
        format!("/api/v1/completed-works/{}", seeded.work_id),
    ] {
        let response = get(build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    // Shared reference data survives.
    let response = get(
        build_test_app(pool),
        &format!("/api/v1/masters/{}", seeded.master_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn master_with_completed_work_cannot_be_deleted(pool: PgPool) {
    let seeded = seed(&pool).await;
    let uri = format!("/api/v1/masters/{}", seeded.master_id);

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = get(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_in_use_cannot_be_deleted(pool: PgPool) {
    let seeded = seed(&pool).await;

    let response = delete(
        build_test_app(pool),
        &format!("/api/v1/services/{}", seeded.service_code),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_master_unassigns_orders(pool: PgPool) {
    let seeded = seed(&pool).await;

    // Remove the work first so the restricted reference no longer blocks.
    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/completed-works/{}", seeded.work_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/masters/{}", seeded.master_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let order = body_json(
        get(
            build_test_app(pool),
            &format!("/api/v1/orders/{}", seeded.order_number),
        )
        .await,
    )
    .await;
    assert_eq!(order["master_id"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_order_removes_its_work(pool: PgPool) {
    let seeded = seed(&pool).await;

    delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/orders/{}", seeded.order_number),
    )
    .await;

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/completed-works/{}", seeded.work_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
