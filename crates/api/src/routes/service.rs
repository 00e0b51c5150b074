//! Route definitions for the `/services` resource.

use axum::routing::get;
use axum::Router;
use tireshop_db::models::service::Service;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (409 while any completed work uses the service)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Service>).post(crud::create::<Service>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Service>)
                .put(crud::update::<Service>)
                .delete(crud::delete::<Service>),
        )
}
