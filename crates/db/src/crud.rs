//! Generic CRUD repository shared by every entity table.
//!
//! Each model implements [`Entity`] to describe its table: name, key column,
//! selected columns, writable columns and how its input DTO binds to them.
//! [`CrudRepo`] then builds the SQL once for all seven entity types.
//! Entity-specific queries are added as inherent impls on `CrudRepo<E>` in
//! the `repositories` module.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use tireshop_core::types::DbId;
use validator::Validate;

/// A `query_as` builder against Postgres.
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// A table-backed record with a single `BIGSERIAL` key.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// DTO carrying every writable field (used for both create and update).
    type Input: Validate + DeserializeOwned + Send + Sync + 'static;

    /// Human-readable entity name used in errors and logs.
    const NAME: &'static str;
    const TABLE: &'static str;
    const KEY: &'static str;
    /// Comma-separated column list matching the `FromRow` struct.
    const COLUMNS: &'static str;
    /// Columns written on insert and update, in `bind_input` order.
    const WRITE_COLUMNS: &'static [&'static str];
    /// `ORDER BY` clause for listings.
    const ORDER_BY: &'static str = Self::KEY;

    fn id(&self) -> DbId;

    /// Bind the input's values in `WRITE_COLUMNS` order.
    fn bind_input<'q, O>(input: &'q Self::Input, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O>;
}

/// Result of a full-record update.
#[derive(Debug)]
pub enum UpdateOutcome<E> {
    Updated(E),
    /// No row with the key existed when the update started.
    NotFound,
    /// The row existed at the presence check but was gone by the write.
    Conflict,
}

/// Zero-sized repository providing CRUD for any [`Entity`].
pub struct CrudRepo<E>(PhantomData<E>);

impl<E: Entity> CrudRepo<E> {
    /// List all rows in the entity's display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY {}",
            E::COLUMNS,
            E::TABLE,
            E::ORDER_BY
        );
        sqlx::query_as::<_, E>(&query).fetch_all(pool).await
    }

    /// List rows whose foreign key `column` equals `parent_id`.
    ///
    /// `column` must be a trusted column name, never user input.
    pub async fn list_by(
        pool: &PgPool,
        column: &'static str,
        parent_id: DbId,
    ) -> Result<Vec<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {column} = $1 ORDER BY {}",
            E::COLUMNS,
            E::TABLE,
            E::ORDER_BY
        );
        sqlx::query_as::<_, E>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            E::COLUMNS,
            E::TABLE,
            E::KEY
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every row whose key is in `ids`. Missing keys are skipped.
    pub async fn find_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<E>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {} FROM {} WHERE {} = ANY($1)",
            E::COLUMNS,
            E::TABLE,
            E::KEY
        );
        sqlx::query_as::<_, E>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE {} = $1)",
            E::TABLE,
            E::KEY
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Insert a new row, returning it with its assigned key.
    pub async fn create(pool: &PgPool, input: &E::Input) -> Result<E, sqlx::Error> {
        let placeholders = (1..=E::WRITE_COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING {}",
            E::TABLE,
            E::WRITE_COLUMNS.join(", "),
            E::COLUMNS
        );
        E::bind_input(input, sqlx::query_as::<_, E>(&query))
            .fetch_one(pool)
            .await
    }

    /// Overwrite every writable column of an existing row.
    ///
    /// Concurrency control is a presence check: a row deleted between the
    /// check and the write yields [`UpdateOutcome::Conflict`]. Concurrent
    /// edits to a row that still exists are last-writer-wins.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &E::Input,
    ) -> Result<UpdateOutcome<E>, sqlx::Error> {
        if !Self::exists(pool, id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        let assignments = E::WRITE_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE {} SET {assignments} WHERE {} = $1 RETURNING {}",
            E::TABLE,
            E::KEY,
            E::COLUMNS
        );
        let updated = E::bind_input(input, sqlx::query_as::<_, E>(&query).bind(id))
            .fetch_optional(pool)
            .await?;

        Ok(match updated {
            Some(row) => UpdateOutcome::Updated(row),
            None => {
                tracing::warn!(entity = E::NAME, id, "Row disappeared during update");
                UpdateOutcome::Conflict
            }
        })
    }

    /// Delete a row, returning it if it existed.
    ///
    /// Dependent rows cascade or block the delete according to the schema's
    /// foreign keys; a blocked delete surfaces as a foreign key violation.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE {} = $1 RETURNING {}",
            E::TABLE,
            E::KEY,
            E::COLUMNS
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
