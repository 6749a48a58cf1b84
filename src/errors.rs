use thiserror::Error;

/// Error type raised at validating construction of a budget document.
///
/// Ordinary mutations and lookups never raise; they signal absence with
/// `None` and leave state untouched instead.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(u32),
    #[error("Validation failed: {0}")]
    Validation(String),
}
