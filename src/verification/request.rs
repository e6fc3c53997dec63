//! Verification request input and field validation.

use crate::error::FieldError;

/// One identity-verification attempt's input.
///
/// Created per attempt and discarded after use; the client never stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub document_number: String,
}

impl VerificationRequest {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
        }
    }
}

/// Validate a request's fields without touching the network.
///
/// The document number must be ASCII alphanumeric. The empty string is not
/// an error here: callers short-circuit it to an unverified result before
/// validation.
pub fn validate(request: &VerificationRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !request
        .document_number
        .chars()
        .all(|c| c.is_ascii_alphanumeric())
    {
        errors.push(FieldError::new(
            "document_number",
            "must contain only letters and digits",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
