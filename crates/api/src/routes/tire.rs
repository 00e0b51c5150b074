//! Route definitions for the `/tires` resource.

use axum::routing::get;
use axum::Router;
use tireshop_db::models::tire::Tire;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/tires`.
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
        .route("/", get(crud::list::<Tire>).post(crud::create::<Tire>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Tire>)
                .put(crud::update::<Tire>)
                .delete(crud::delete::<Tire>),
        )
}
