//! Domain rules for the tire-service shop.
//!
//! Pure logic only: error types, identifiers, field validators and the
//! derived display values computed from stored records. Nothing in this
//! crate touches the database or the filesystem.

pub mod billing;
pub mod error;
pub mod tire;
pub mod types;
pub mod uploads;
pub mod validation;
pub mod vehicle;
