//! Handler for the home-page dashboard.

use axum::extract::State;
use axum::Json;
use tireshop_db::models::dashboard::DashboardSummary;
use tireshop_db::repositories::DashboardRepo;

use crate::context::RequestContext;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn summary(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.pool, ctx.today).await?;
    Ok(Json(summary))
}
