//! Generic CRUD handlers, instantiated once per [`Resource`] in `routes`.
//!
//! Every entity shares the same contract: list, get (404 when absent),
//! create and update (field validation, including reference checks, before
//! anything is written) and delete (a no-op when absent).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;
use tireshop_core::error::CoreError;
use tireshop_core::types::DbId;
use tireshop_db::crud::{CrudRepo, Entity};
use tireshop_db::repositories::UpdateOutcome;
use validator::{Validate, ValidationErrors};

use crate::context::RequestContext;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::resource::Resource;
use crate::state::AppState;

/// Load a row or fail with a 404 naming the entity.
pub async fn find_or_404<E: Entity>(pool: &PgPool, id: DbId) -> AppResult<E> {
    CrudRepo::<E>::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: E::NAME,
            id,
        }))
}

/// Run field rules and reference checks, collecting every failure.
async fn validate_input<R: Resource>(pool: &PgPool, input: &R::Input) -> AppResult<()> {
    let mut errors = input.validate().err().unwrap_or_else(ValidationErrors::new);
    R::check_references(pool, input, &mut errors).await?;
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

/// GET /api/v1/{resource}
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<Json<Vec<R::View>>> {
    let rows = CrudRepo::<R>::list(&state.pool).await?;
    Ok(Json(rows.into_iter().map(|row| row.present(&ctx)).collect()))
}

/// GET /api/v1/{resource}/{id}
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<R::View>> {
    let row = find_or_404::<R>(&state.pool, id).await?;
    Ok(Json(row.present(&ctx)))
}

/// POST /api/v1/{resource}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ctx: RequestContext,
    AppJson(input): AppJson<R::Input>,
) -> AppResult<(StatusCode, Json<R::View>)> {
    validate_input::<R>(&state.pool, &input).await?;
    let row = CrudRepo::<R>::create(&state.pool, &input).await?;
    tracing::info!(entity = R::NAME, id = row.id(), "Created");
    Ok((StatusCode::CREATED, Json(row.present(&ctx))))
}

/// PUT /api/v1/{resource}/{id}
///
/// Overwrites every writable field. 404 when the row does not exist, 409
/// when it was deleted while the update was in flight.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<R::Input>,
) -> AppResult<Json<R::View>> {
    validate_input::<R>(&state.pool, &input).await?;
    match CrudRepo::<R>::update(&state.pool, id, &input).await? {
        UpdateOutcome::Updated(row) => {
            tracing::info!(entity = R::NAME, id, "Updated");
            Ok(Json(row.present(&ctx)))
        }
        UpdateOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: R::NAME,
            id,
        })),
        UpdateOutcome::Conflict => Err(AppError::Core(CoreError::Conflict(format!(
            "{} with id {id} was deleted while being updated",
            R::NAME
        )))),
    }
}

/// DELETE /api/v1/{resource}/{id}
///
/// Deleting an absent row succeeds. A row still referenced by a restricted
/// foreign key yields 409 and nothing is removed. Stored files of the
/// removed rows are deleted afterwards.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let files = R::attached_files(&state.pool, id).await?;
    if CrudRepo::<R>::delete(&state.pool, id).await?.is_some() {
        tracing::info!(entity = R::NAME, id, files = files.len(), "Deleted");
        for file in &files {
            state.photos.remove(file).await;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}
