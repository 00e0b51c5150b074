//! Car-specific queries.

use sqlx::PgPool;
use tireshop_core::types::DbId;

use crate::crud::{CrudRepo, Entity};
use crate::models::car::Car;

impl CrudRepo<Car> {
    /// All cars owned by a client.
    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Car>, sqlx::Error> {
        Self::list_by(pool, "client_id", client_id).await
    }

    /// Stored photo paths of every car a client owns.
    pub async fn photo_paths_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT photo_path FROM cars WHERE client_id = $1 AND photo_path IS NOT NULL",
        )
        .bind(client_id)
        .fetch_all(pool)
        .await
    }

    /// Replace the stored photo path, returning the updated car.
    ///
    /// Returns `None` if the car does not exist.
    pub async fn set_photo_path(
        pool: &PgPool,
        car_id: DbId,
        photo_path: Option<&str>,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET photo_path = $2 WHERE car_id = $1 RETURNING {}",
            Car::COLUMNS
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(car_id)
            .bind(photo_path)
            .fetch_optional(pool)
            .await
    }
}
