//! Error types and handling for the `TripBud` backend

use thiserror::Error;

/// Main error type for the `TripBud` backend
#[derive(Error, Debug)]
pub enum TripBudError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// HTTP server errors
    #[error("Server error: {message}")]
    Server { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripBudError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripBudError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TripBudError::Server { message } => format!("Server failed: {message}"),
            TripBudError::Io { .. } => {
                "I/O operation failed. Please check the bind address and permissions.".to_string()
            }
        }
    }
}
