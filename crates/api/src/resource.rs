//! HTTP-facing behaviour of each entity.
//!
//! [`Resource`] extends the persistence-level [`Entity`] with what the
//! generic handlers in [`crate::handlers::crud`] need: the response view,
//! reference checks run during validation, and the stored files a delete
//! leaves behind.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;
use tireshop_core::types::DbId;
use tireshop_core::validation::missing_reference;
use tireshop_db::crud::{CrudRepo, Entity};
use tireshop_db::models::car::{Car, CarView, SaveCar};
use tireshop_db::models::client::Client;
use tireshop_db::models::completed_work::{CompletedWork, CompletedWorkView, SaveCompletedWork};
use tireshop_db::models::master::{Master, MasterView};
use tireshop_db::models::order::{Order, OrderView, SaveOrder};
use tireshop_db::models::service::Service;
use tireshop_db::models::tire::{SaveTire, Tire, TireView};
use tireshop_db::repositories::CarRepo;
use validator::ValidationErrors;

use crate::context::RequestContext;

#[async_trait]
pub trait Resource: Entity {
    /// Response body for a single record.
    type View: Serialize + Send;

    fn present(self, ctx: &RequestContext) -> Self::View;

    /// Record a field error for every row the input references that does not exist.
    async fn check_references(
        _pool: &PgPool,
        _input: &Self::Input,
        _errors: &mut ValidationErrors,
    ) -> Result<(), sqlx::Error> {
        Ok(())
    }

    /// Stored files that belong to the row or to rows its delete cascades to.
    async fn attached_files(_pool: &PgPool, _id: DbId) -> Result<Vec<String>, sqlx::Error> {
        Ok(Vec::new())
    }
}

/// Add a `not_found` error on `field` unless `E` has a row with key `id`.
async fn require<E: Entity>(
    pool: &PgPool,
    field: &'static str,
    id: DbId,
    errors: &mut ValidationErrors,
) -> Result<(), sqlx::Error> {
    if !CrudRepo::<E>::exists(pool, id).await? {
        errors.add(field, missing_reference(E::NAME));
    }
    Ok(())
}

#[async_trait]
impl Resource for Client {
    type View = Client;

    fn present(self, _ctx: &RequestContext) -> Client {
        self
    }

    async fn attached_files(pool: &PgPool, id: DbId) -> Result<Vec<String>, sqlx::Error> {
        CarRepo::photo_paths_for_client(pool, id).await
    }
}

#[async_trait]
impl Resource for Car {
    type View = CarView;

    fn present(self, ctx: &RequestContext) -> CarView {
        Car::into_view(self, ctx.current_year())
    }

    async fn check_references(
        pool: &PgPool,
        input: &SaveCar,
        errors: &mut ValidationErrors,
    ) -> Result<(), sqlx::Error> {
        require::<Client>(pool, "client_id", input.client_id, errors).await
    }

    async fn attached_files(pool: &PgPool, id: DbId) -> Result<Vec<String>, sqlx::Error> {
        Ok(CarRepo::find_by_id(pool, id)
            .await?
            .and_then(|car| car.photo_path)
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl Resource for Tire {
    type View = TireView;

    fn present(self, _ctx: &RequestContext) -> TireView {
        Tire::into_view(self)
    }

    async fn check_references(
        pool: &PgPool,
        input: &SaveTire,
        errors: &mut ValidationErrors,
    ) -> Result<(), sqlx::Error> {
        require::<Car>(pool, "car_id", input.car_id, errors).await
    }
}

impl Resource for Master {
    type View = MasterView;

    fn present(self, _ctx: &RequestContext) -> MasterView {
        Master::into_view(self)
    }
}

impl Resource for Service {
    type View = Service;

    fn present(self, _ctx: &RequestContext) -> Service {
        self
    }
}

#[async_trait]
impl Resource for Order {
    type View = OrderView;

    fn present(self, _ctx: &RequestContext) -> OrderView {
        Order::into_view(self)
    }

    async fn check_references(
        pool: &PgPool,
        input: &SaveOrder,
        errors: &mut ValidationErrors,
    ) -> Result<(), sqlx::Error> {
        require::<Car>(pool, "car_id", input.car_id, errors).await?;
        if let Some(master_id) = input.master_id {
            require::<Master>(pool, "master_id", master_id, errors).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for CompletedWork {
    type View = CompletedWorkView;

    fn present(self, _ctx: &RequestContext) -> CompletedWorkView {
        CompletedWork::into_view(self)
    }

    async fn check_references(
        pool: &PgPool,
        input: &SaveCompletedWork,
        errors: &mut ValidationErrors,
    ) -> Result<(), sqlx::Error> {
        require::<Order>(pool, "order_number", input.order_number, errors).await?;
        require::<Service>(pool, "service_code", input.service_code, errors).await?;
        require::<Master>(pool, "master_id", input.master_id, errors).await
    }
}
