//! Tire-specific queries.

use sqlx::PgPool;
use tireshop_core::types::DbId;

use crate::crud::CrudRepo;
use crate::models::tire::Tire;

impl CrudRepo<Tire> {
    /// All tires fitted to a car.
    pub async fn list_by_car(pool: &PgPool, car_id: DbId) -> Result<Vec<Tire>, sqlx::Error> {
        Self::list_by(pool, "car_id", car_id).await
    }
}
