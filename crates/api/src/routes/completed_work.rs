//! Route definitions for the `/completed-works` resource.

use axum::routing::get;
use axum::Router;
use tireshop_db::models::completed_work::CompletedWork;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/completed-works`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<CompletedWork>).post(crud::create::<CompletedWork>))
        .route(
            "/{id}",
            get(crud::get_by_id::<CompletedWork>)
                .put(crud::update::<CompletedWork>)
                .delete(crud::delete::<CompletedWork>),
        )
}
