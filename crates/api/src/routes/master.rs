//! Route definitions for the `/masters` resource.

use axum::routing::get;
use axum::Router;
use tireshop_db::models::master::Master;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/masters`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (409 while any completed work names the master)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Master>).post(crud::create::<Master>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Master>)
                .put(crud::update::<Master>)
                .delete(crud::delete::<Master>),
        )
}
