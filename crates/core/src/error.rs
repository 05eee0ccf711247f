use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A data-integrity problem in reference data (e.g. a shared package
    /// without a slot count). Requires an out-of-band fix by staff, not a
    /// corrected request.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The deposit was already verified or rejected by another actor.
    /// Expected under concurrent verification; callers should refresh
    /// their pending list and move on.
    #[error("Deposit {id} is already finalized")]
    AlreadyFinalized { id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
