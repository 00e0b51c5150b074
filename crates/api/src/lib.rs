//! Tire shop API server library.
//!
//! Exposes the building blocks (config, state, error handling, resources,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod photo_store;
pub mod resource;
pub mod router;
pub mod routes;
pub mod state;
