//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` save DTO used for both inserts and full updates
//! - The [`Entity`](crate::crud::Entity) impl describing its table
//! - A view struct with derived display values, where the entity has any

pub mod car;
pub mod client;
pub mod completed_work;
pub mod dashboard;
pub mod master;
pub mod order;
pub mod service;
pub mod tire;
