use thiserror::Error;

/// Unified error type for the entire crypto-tracker-core library.
///
/// Empty form submissions are not errors: they are discarded silently and
/// surface as `None` from the action that was attempted.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lookup ──────────────────────────────────────────────────────
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Index {index} out of range for {len} data points")]
    IndexOutOfRange { index: usize, len: usize },

    // ── Validation ──────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Runtime ─────────────────────────────────────────────────────
    #[error("Scheduler unavailable: {0}")]
    Scheduler(String),

    #[error("Entropy source failed: {0}")]
    Entropy(String),

    // ── Export / Import ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<getrandom::Error> for CoreError {
    fn from(e: getrandom::Error) -> Self {
        CoreError::Entropy(e.to_string())
    }
}

impl From<tokio::runtime::TryCurrentError> for CoreError {
    fn from(e: tokio::runtime::TryCurrentError) -> Self {
        CoreError::Scheduler(e.to_string())
    }
}
