//! # Error Types
//!
//! Structured error types for quote_core. The quoting rules themselves are
//! lenient: bad dimensions are clamped and unreadable pitches count as flat,
//! so the only error a user can hit while building a quote is an infeasible
//! garage door. The remaining variants cover loading rate tables and
//! exporting summaries.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::QuoteError;
//!
//! let err = QuoteError::infeasible_door("10x10", 10.0, 10.0, 2.0);
//! assert_eq!(
//!     err.to_string(),
//!     "Cannot add 10x10 garage door: sidewall must be at least 2' taller than door height."
//! );
//! assert_eq!(err.error_code(), "INFEASIBLE_DOOR_PLACEMENT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core operations
pub type QuoteCoreResult<T> = Result<T, QuoteError>;

/// Structured error type for quoting operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// A garage door is too tall for the sidewall (needs header clearance).
    ///
    /// The message is shown to the customer verbatim.
    #[error("Cannot add {size} garage door: sidewall must be at least {clearance_ft}' taller than door height.")]
    InfeasibleDoorPlacement {
        size: String,
        door_height_ft: f64,
        sidewall_height_ft: f64,
        /// Header clearance in effect when the door was rejected
        clearance_ft: f64,
    },

    /// A rate table could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl QuoteError {
    /// Create an InfeasibleDoorPlacement error
    pub fn infeasible_door(
        size: impl Into<String>,
        door_height_ft: f64,
        sidewall_height_ft: f64,
        clearance_ft: f64,
    ) -> Self {
        QuoteError::InfeasibleDoorPlacement {
            size: size.into(),
            door_height_ft,
            sidewall_height_ft,
            clearance_ft,
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        QuoteError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        QuoteError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the user can fix this by changing their inputs
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, QuoteError::InfeasibleDoorPlacement { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InfeasibleDoorPlacement { .. } => "INFEASIBLE_DOOR_PLACEMENT",
            QuoteError::ConfigError { .. } => "CONFIG_ERROR",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
