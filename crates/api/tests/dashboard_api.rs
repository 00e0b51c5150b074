//! The dashboard endpoint over HTTP.

mod common;

use axum::http::StatusCode;
use chrono::Local;
use common::{body_json, build_test_app, get, order_body, seed};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_shop_dashboard(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["counts"]["clients"], 0);
    assert_eq!(json["active_orders"], 0);
    assert_eq!(json["completed_orders"], 0);
    assert_eq!(json["top_clients"], json!([]));
    assert_eq!(json["recent_orders"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts_todays_orders_and_nests_related_rows(pool: PgPool) {
    let seeded = seed(&pool).await;
    let mut today_order = order_body(seeded.car_id, None);
    today_order["order_date"] = json!(Local::now().date_naive());
    common::create(&pool, "/api/v1/orders", today_order, "order_number").await;

    let json = body_json(get(build_test_app(pool), "/api/v1/dashboard").await).await;

    assert_eq!(json["counts"]["orders"], 2);
    assert_eq!(json["counts"]["completed_works"], 1);
    assert_eq!(json["completed_orders"], 1);
    assert_eq!(json["active_orders"], 1);
    assert_eq!(json["orders_today"], 1);
    assert_eq!(json["unpaid_orders"], 2);
    assert_eq!(json["assigned_orders"], 1);

    assert_eq!(json["top_clients"][0]["client_id"], seeded.client_id);
    assert_eq!(json["top_clients"][0]["order_count"], 2);

    // Newest first; the seeded order is dated 2026-03-10.
    let recent = json["recent_orders"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[1]["order"]["order_number"], seeded.order_number);
    assert_eq!(recent[1]["client"]["full_name"], "Ivan Petrov");
    assert_eq!(recent[1]["master"]["master_id"], seeded.master_id);
    assert_eq!(recent[0]["master"], serde_json::Value::Null);
}
