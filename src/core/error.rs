use thiserror::Error;

use super::types::RowId;

/// Errors that can occur while editing, checking or submitting an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or oversized input.
    #[error("builder error: {0}")]
    Builder(String),

    /// A row edit referenced a row that is not part of the draft.
    #[error("unknown row {0}")]
    UnknownRow(RowId),

    /// Currency code has no entry in the currency table.
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),

    /// Amount cannot be represented in fixed-point arithmetic.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// The invoice service answered with a non-success status.
    #[error("invoice service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure talking to the invoice service.
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected envelope.
    #[error("decode error: {0}")]
    Decode(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "lines[1].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Fold a list of validation errors into a single [`InvoiceError::Validation`].
///
/// An empty list is success.
pub fn ensure_valid(errors: Vec<ValidationError>) -> Result<(), InvoiceError> {
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(InvoiceError::Validation(msg))
}
