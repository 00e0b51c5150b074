//! Route definitions for the `/cars` resource and its photo.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;
use tireshop_db::models::car::Car;

use crate::handlers::{car, crud};
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (also removes the stored photo)
/// GET    /{id}/tires    -> list_tires
/// GET    /{id}/orders   -> list_orders
/// PUT    /{id}/photo    -> upload_photo (multipart)
/// DELETE /{id}/photo    -> delete_photo
/// ```
///
/// The photo route lifts the default body limit; `upload_photo` enforces
/// the configured photo size while streaming the file.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Car>).post(crud::create::<Car>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Car>)
                .put(crud::update::<Car>)
                .delete(crud::delete::<Car>),
        )
        .route("/{id}/tires", get(car::list_tires))
        .route("/{id}/orders", get(car::list_orders))
        .route(
            "/{id}/photo",
            put(car::upload_photo)
                .delete(car::delete_photo)
                .layer(DefaultBodyLimit::disable()),
        )
}
