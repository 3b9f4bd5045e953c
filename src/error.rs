//! Error types for DashOxide
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use thiserror::Error;

/// Main error type for DashOxide operations
#[derive(Error, Debug)]
pub enum DashError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// HTTP request error
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed dashboard snapshot
    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for DashOxide operations
pub type Result<T> = std::result::Result<T, DashError>;

/// UI-friendly error message formatting
impl DashError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DashError::FileIo(e) => format!("File error: {}", e),
            DashError::Http(e) => format!("Server error: {}", e),
            DashError::Json(e) => format!("Data error: {}", e),
            DashError::Snapshot(msg) => format!("Snapshot error: {}", msg),
            DashError::Custom(msg) => msg.clone(),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            DashError::FileIo(_) => "File Error",
            DashError::Http(_) => "Server Error",
            DashError::Json(_) => "Data Error",
            DashError::Snapshot(_) => "Snapshot Error",
            DashError::Custom(_) => "Error",
        }
    }
}
