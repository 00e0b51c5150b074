//! Aggregate queries for the home-page dashboard.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::PgPool;
use tireshop_core::types::DbId;

use crate::crud::{CrudRepo, Entity};
use crate::models::car::Car;
use crate::models::client::Client;
use crate::models::dashboard::{
    DashboardSummary, EntityCounts, OrderStats, RecentOrder, TopClient,
};
use crate::models::master::Master;
use crate::models::order::Order;

/// Number of clients in the top-clients ranking.
pub const TOP_CLIENTS_LIMIT: i64 = 3;

/// Number of orders in the recent-orders list.
pub const RECENT_ORDERS_LIMIT: i64 = 5;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Build the full dashboard. `today` decides which orders count as placed today.
    pub async fn summary(pool: &PgPool, today: NaiveDate) -> Result<DashboardSummary, sqlx::Error> {
        let counts = Self::entity_counts(pool).await?;
        let order_stats = Self::order_stats(pool, today).await?;
        let top_clients = Self::top_clients(pool, TOP_CLIENTS_LIMIT).await?;
        let recent_orders = Self::recent_orders(pool, RECENT_ORDERS_LIMIT).await?;

        Ok(DashboardSummary {
            counts,
            order_stats,
            top_clients,
            recent_orders,
        })
    }

    pub async fn entity_counts(pool: &PgPool) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as::<_, EntityCounts>(
            "SELECT
                (SELECT COUNT(*) FROM clients) AS clients,
                (SELECT COUNT(*) FROM cars) AS cars,
                (SELECT COUNT(*) FROM tires) AS tires,
                (SELECT COUNT(*) FROM masters) AS masters,
                (SELECT COUNT(*) FROM services) AS services,
                (SELECT COUNT(*) FROM orders) AS orders,
                (SELECT COUNT(*) FROM completed_works) AS completed_works",
        )
        .fetch_one(pool)
        .await
    }

    /// Order breakdowns. Active and completed orders are split on the same
    /// `has_work` flag, so they always sum to the order count.
    pub async fn order_stats(pool: &PgPool, today: NaiveDate) -> Result<OrderStats, sqlx::Error> {
        sqlx::query_as::<_, OrderStats>(
            "WITH order_flags AS (
                SELECT o.order_date,
                       o.payment_date,
                       o.master_id,
                       EXISTS (
                           SELECT 1 FROM completed_works w
                           WHERE w.order_number = o.order_number
                       ) AS has_work
                FROM orders o
             )
             SELECT
                COUNT(*) FILTER (WHERE NOT has_work) AS active_orders,
                COUNT(*) FILTER (WHERE has_work) AS completed_orders,
                COUNT(*) FILTER (WHERE order_date = $1) AS orders_today,
                COUNT(*) FILTER (WHERE payment_date IS NULL) AS unpaid_orders,
                COUNT(*) FILTER (WHERE master_id IS NOT NULL) AS assigned_orders
             FROM order_flags",
        )
        .bind(today)
        .fetch_one(pool)
        .await
    }

    /// Clients with the most orders across all their cars. Ties go to the
    /// lower client id. Clients without orders rank last with a count of 0.
    pub async fn top_clients(pool: &PgPool, limit: i64) -> Result<Vec<TopClient>, sqlx::Error> {
        sqlx::query_as::<_, TopClient>(
            "SELECT cl.client_id, cl.full_name, cl.phone, COUNT(o.order_number) AS order_count
             FROM clients cl
             LEFT JOIN cars c ON c.client_id = cl.client_id
             LEFT JOIN orders o ON o.car_id = c.car_id
             GROUP BY cl.client_id
             ORDER BY order_count DESC, cl.client_id
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Most recent orders with their car, the car's owner and the assigned master.
    ///
    /// Related rows are loaded with one query per table rather than per order.
    pub async fn recent_orders(pool: &PgPool, limit: i64) -> Result<Vec<RecentOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM orders ORDER BY order_date DESC, order_number DESC LIMIT $1",
            Order::COLUMNS
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let car_ids: Vec<DbId> = orders.iter().map(|o| o.car_id).collect();
        let cars = by_id(CrudRepo::<Car>::find_many(pool, &car_ids).await?);

        let client_ids: Vec<DbId> = cars.values().map(|c| c.client_id).collect();
        let clients = by_id(CrudRepo::<Client>::find_many(pool, &client_ids).await?);

        let master_ids: Vec<DbId> = orders.iter().filter_map(|o| o.master_id).collect();
        let masters = by_id(CrudRepo::<Master>::find_many(pool, &master_ids).await?);

        // Rows deleted between the queries are dropped rather than reported.
        Ok(orders
            .into_iter()
            .filter_map(|order| {
                let car = cars.get(&order.car_id)?.clone();
                let client = clients.get(&car.client_id)?.clone();
                let master = order.master_id.and_then(|id| masters.get(&id).cloned());
                Some(RecentOrder {
                    order,
                    car,
                    client,
                    master,
                })
            })
            .collect())
    }
}

fn by_id<E: Entity>(rows: Vec<E>) -> HashMap<DbId, E> {
    rows.into_iter().map(|row| (row.id(), row)).collect()
}
