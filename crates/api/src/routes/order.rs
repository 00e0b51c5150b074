//! Route definitions for the `/orders` resource.

use axum::routing::get;
use axum::Router;
use tireshop_db::models::order::Order;

use crate::handlers::{crud, order};
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /              -> list (newest first)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (cascades to completed work)
/// GET    /{id}/works    -> list_works
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Order>).post(crud::create::<Order>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Order>)
                .put(crud::update::<Order>)
                .delete(crud::delete::<Order>),
        )
        .route("/{id}/works", get(order::list_works))
}
