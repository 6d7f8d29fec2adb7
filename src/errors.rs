use thiserror::Error;

/// Error type for ledger storage and reference failures.
///
/// The computation cores in [`crate::core`] never surface this type to
/// callers; they degrade to terminal classifications instead.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("Unsupported snapshot: {0}")]
    Unsupported(String),
}
