use validator::ValidationErrors;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Per-field constraint violations, reported back to the caller as a map.
    #[error("Validation failed: {0}")]
    FieldValidation(#[from] ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),
}
