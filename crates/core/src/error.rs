use crate::types::DbId;

/// Domain error kinds surfaced by the service layer.
///
/// The HTTP boundary maps each variant to exactly one status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
