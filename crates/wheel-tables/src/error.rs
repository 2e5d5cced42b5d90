//! Error types for wheel-tables.

use thiserror::Error;

/// Result type for wheel-tables operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading config or rendering tables.
#[derive(Debug, Error)]
pub enum Error {
    /// Derivation inputs were rejected.
    #[error("Topology error: {0}")]
    Topology(#[from] roulette_topology::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An environment variable held an unusable value.
    #[error("Invalid {key}: {reason}")]
    Config { key: &'static str, reason: String },

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}
