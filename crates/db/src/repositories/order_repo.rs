//! Order-specific queries.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tireshop_core::types::DbId;

use crate::crud::CrudRepo;
use crate::models::order::Order;

impl CrudRepo<Order> {
    /// Orders placed for a car, most recent first.
    pub async fn list_by_car(pool: &PgPool, car_id: DbId) -> Result<Vec<Order>, sqlx::Error> {
        Self::list_by(pool, "car_id", car_id).await
    }

    /// Sum of the work totals billed against an order. Zero when nothing was done yet.
    pub async fn total_cost(pool: &PgPool, order_number: DbId) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(work_total), 0) FROM completed_works WHERE order_number = $1",
        )
        .bind(order_number)
        .fetch_one(pool)
        .await
    }
}
