use crate::types::RecordId;
use crate::violation::ViolationList;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed:\n{0}")]
    Validation(ViolationList),
}
