//! Error types for configuration, storage and persistence
//!
//! None of these reach the host: the persistence adapter logs them and falls
//! back to empty defaults, so in-memory state stays authoritative.

/// Errors raised by a key-value store backend
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store is missing or disabled (private mode, no window).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused a write, usually a quota limit.
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// Any other backend failure, with the backend's message.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors rejecting a host-supplied configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not JSON for the config shape.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A size, step or duration that must be above zero.
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// A length that must not be below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Errors raised while mirroring desktop state to storage
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The underlying store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored value was not valid JSON for the expected shape.
    #[error("failed to decode {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
