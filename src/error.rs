//! Error types for voxsync
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in voxsync
#[derive(Debug, Error)]
pub enum VoxsyncError {
    /// Missing or invalid runtime configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend (PostgREST) error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Agent platform API error
    #[error("Platform error: {0}")]
    Platform(String),

    /// No client records matched the requested filter
    #[error("No clients matched the sync criteria")]
    NoMatchingClients,

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for voxsync operations
pub type Result<T> = std::result::Result<T, VoxsyncError>;
