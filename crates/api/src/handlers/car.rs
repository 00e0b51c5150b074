//! Car-scoped listings and photo management.
//!
//! Photos are uploaded to `/cars/{id}/photo` and served from `/uploads`.
//! Saving a car through the generic CRUD handlers never touches its photo.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use tireshop_core::error::CoreError;
use tireshop_core::types::DbId;
use tireshop_core::uploads;
use tireshop_db::models::car::{Car, CarView};
use tireshop_db::models::order::{Order, OrderView};
use tireshop_db::models::tire::{Tire, TireView};
use tireshop_db::repositories::{CarRepo, OrderRepo, TireRepo};

use crate::context::RequestContext;
use crate::error::{AppError, AppResult};
use crate::handlers::crud::find_or_404;
use crate::state::AppState;

/// Multipart field carrying the photo file.
const PHOTO_FIELD: &str = "photo";

/// GET /api/v1/cars/{id}/tires
pub async fn list_tires(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TireView>>> {
    find_or_404::<Car>(&state.pool, id).await?;
    let tires = TireRepo::list_by_car(&state.pool, id).await?;
    Ok(Json(tires.into_iter().map(Tire::into_view).collect()))
}

/// GET /api/v1/cars/{id}/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<OrderView>>> {
    find_or_404::<Car>(&state.pool, id).await?;
    let orders = OrderRepo::list_by_car(&state.pool, id).await?;
    Ok(Json(orders.into_iter().map(Order::into_view).collect()))
}

/// PUT /api/v1/cars/{id}/photo
///
/// Accepts a multipart body with a `photo` file field. Replaces any previous
/// photo; the old file is removed once the new path is stored.
pub async fn upload_photo(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<CarView>> {
    let existing = find_or_404::<Car>(&state.pool, id).await?;
    let max_bytes = state.config.max_photo_bytes;

    let mut photo: Option<(String, Vec<u8>)> = None;
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let ext = uploads::photo_extension(field.file_name().unwrap_or(""))?;

        // Read in chunks so an oversized upload is rejected without buffering it whole.
        let mut data = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            if data.len() + chunk.len() > max_bytes {
                uploads::validate_photo_size(data.len() + chunk.len(), max_bytes)?;
            }
            data.extend_from_slice(&chunk);
        }
        photo = Some((ext, data));
    }

    let (ext, data) = photo.ok_or_else(|| {
        AppError::BadRequest(format!("Missing required '{PHOTO_FIELD}' field"))
    })?;
    uploads::validate_photo_size(data.len(), max_bytes)?;

    let stored = state
        .photos
        .save_car_photo(&ext, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store photo: {e}")))?;

    let car = match CarRepo::set_photo_path(&state.pool, id, Some(&stored)).await {
        Ok(Some(car)) => car,
        Ok(None) => {
            // The car was deleted while the file was being written.
            state.photos.remove(&stored).await;
            return Err(AppError::Core(CoreError::NotFound { entity: "Car", id }));
        }
        Err(e) => {
            state.photos.remove(&stored).await;
            return Err(e.into());
        }
    };

    if let Some(previous) = existing.photo_path.as_deref() {
        if previous != stored {
            state.photos.remove(previous).await;
        }
    }

    tracing::info!(car_id = id, path = %stored, bytes = data.len(), "Car photo uploaded");
    Ok(Json(car.into_view(ctx.current_year())))
}

/// DELETE /api/v1/cars/{id}/photo
///
/// Clears the car's photo. A car without a photo is returned unchanged.
pub async fn delete_photo(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<CarView>> {
    let existing = find_or_404::<Car>(&state.pool, id).await?;
    let Some(previous) = existing.photo_path.clone() else {
        return Ok(Json(existing.into_view(ctx.current_year())));
    };

    let car = CarRepo::set_photo_path(&state.pool, id, None)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Car", id }))?;
    state.photos.remove(&previous).await;

    tracing::info!(car_id = id, "Car photo removed");
    Ok(Json(car.into_view(ctx.current_year())))
}
