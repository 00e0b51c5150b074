//! Route definitions for the `/clients` resource.

use axum::routing::get;
use axum::Router;
use tireshop_db::models::client::Client;

use crate::handlers::{client, crud};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (cascades to cars, tires, orders, work)
/// GET    /{id}/cars     -> list_cars
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Client>).post(crud::create::<Client>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Client>)
                .put(crud::update::<Client>)
                .delete(crud::delete::<Client>),
        )
        .route("/{id}/cars", get(client::list_cars))
}
