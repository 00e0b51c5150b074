//! Order-scoped listings.

use axum::extract::{Path, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use tireshop_core::types::DbId;
use tireshop_db::models::completed_work::{CompletedWork, CompletedWorkView};
use tireshop_db::models::order::Order;
use tireshop_db::repositories::{CompletedWorkRepo, OrderRepo};

use crate::error::AppResult;
use crate::handlers::crud::find_or_404;
use crate::state::AppState;

/// Work billed against an order, with the order's total cost.
#[derive(Debug, Serialize)]
pub struct OrderWorks {
    pub order_number: DbId,
    pub works: Vec<CompletedWorkView>,
    pub total: Decimal,
}

/// GET /api/v1/orders/{id}/works
pub async fn list_works(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderWorks>> {
    find_or_404::<Order>(&state.pool, id).await?;
    let works = CompletedWorkRepo::list_by_order(&state.pool, id).await?;
    let total = OrderRepo::total_cost(&state.pool, id).await?;

    Ok(Json(OrderWorks {
        order_number: id,
        works: works.into_iter().map(CompletedWork::into_view).collect(),
        total,
    }))
}
