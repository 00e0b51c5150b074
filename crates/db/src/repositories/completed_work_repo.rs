//! Completed-work-specific queries.

use sqlx::PgPool;
use tireshop_core::types::DbId;

use crate::crud::CrudRepo;
use crate::models::completed_work::CompletedWork;

impl CrudRepo<CompletedWork> {
    /// Work billed against an order.
    pub async fn list_by_order(
        pool: &PgPool,
        order_number: DbId,
    ) -> Result<Vec<CompletedWork>, sqlx::Error> {
        Self::list_by(pool, "order_number", order_number).await
    }
}
