//! Error types for census verification.

/// A validation failure on a single input field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors from a census verification attempt.
///
/// Every variant is terminal for the attempt; a failed verification is only
/// retried by a new caller action, never automatically.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Input rejected before any network call was made.
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// The HTTP request to the registry could not complete.
    #[error("census request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The registry answered with a body that is not well-formed XML.
    #[error("malformed census response: {0}")]
    Parse(#[from] quick_xml::Error),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
