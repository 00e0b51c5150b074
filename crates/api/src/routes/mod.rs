pub mod car;
pub mod client;
pub mod completed_work;
pub mod dashboard;
pub mod health;
pub mod master;
pub mod order;
pub mod service;
pub mod tire;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                        list, create
/// /clients/{id}                   get, update, delete
/// /clients/{id}/cars              cars owned by the client
///
/// /cars                           list, create
/// /cars/{id}                      get, update, delete
/// /cars/{id}/tires                tires fitted to the car
/// /cars/{id}/orders               orders for the car
/// /cars/{id}/photo                upload (PUT, multipart), remove (DELETE)
///
/// /tires                          list, create
/// /tires/{id}                     get, update, delete
///
/// /masters                        list, create
/// /masters/{id}                   get, update, delete
///
/// /services                       list, create
/// /services/{id}                  get, update, delete
///
/// /orders                         list, create
/// /orders/{id}                    get, update, delete
/// /orders/{id}/works              completed work with the order total
///
/// /completed-works                list, create
/// /completed-works/{id}           get, update, delete
///
/// /dashboard                      home-page summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/cars", car::router())
        .nest("/tires", tire::router())
        .nest("/masters", master::router())
        .nest("/services", service::router())
        .nest("/orders", order::router())
        .nest("/completed-works", completed_work::router())
        .nest("/dashboard", dashboard::router())
}
