use crate::error::ValidationError;
use crate::models::ContactPayload;

/// Check that all four required fields are present. Presence only: type,
/// emptiness and email well-formedness are deliberately not checked.
pub fn require_fields(payload: &ContactPayload) -> Result<(), ValidationError> {
    let present = payload.name.is_some()
        && payload.email.is_some()
        && payload.subject.is_some()
        && payload.message.is_some();

    if present {
        Ok(())
    } else {
        Err(ValidationError)
    }
}
