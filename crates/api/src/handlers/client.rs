//! Client-scoped listings.

use axum::extract::{Path, State};
use axum::Json;
use tireshop_core::types::DbId;
use tireshop_db::models::car::{Car, CarView};
use tireshop_db::models::client::Client;
use tireshop_db::repositories::CarRepo;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::handlers::crud::find_or_404;
use crate::state::AppState;

/// GET /api/v1/clients/{id}/cars
pub async fn list_cars(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CarView>>> {
    find_or_404::<Client>(&state.pool, id).await?;
    let cars = CarRepo::list_by_client(&state.pool, id).await?;
    Ok(Json(
        cars.into_iter()
            .map(|car| Car::into_view(car, ctx.current_year()))
            .collect(),
    ))
}
