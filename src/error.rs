//! Error types for the valve parameter protocol.

use std::io;
use thiserror::Error;

/// Result type alias for valve operations.
pub type Result<T> = std::result::Result<T, ValveError>;

/// Errors that can occur during valve communication.
///
/// Local errors (`NotFound`, `InvalidArity`, `OversizeCommand`,
/// `InvalidValue`) are detected before any network I/O is attempted.
/// Transport errors (`Timeout`, `Io`) carry the underlying cause and are
/// never collapsed with device-reported status codes.
#[derive(Debug, Error)]
pub enum ValveError {
    /// No parameter with a matching name exists in the compound.
    #[error("parameter '{name}' not found")]
    NotFound {
        /// The name that failed to match.
        name: String,
    },

    /// Value count does not match the compound's member count.
    #[error("invalid value count: expected {expected}, got {actual}")]
    InvalidArity {
        /// Number of values the compound requires.
        expected: usize,
        /// Number of values supplied by the caller.
        actual: usize,
    },

    /// Encoded command exceeds the wire length limit.
    #[error("command length {length} exceeds maximum of {max} characters")]
    OversizeCommand {
        /// Length of the encoded message, terminator included.
        length: usize,
        /// The protocol's length limit.
        max: usize,
    },

    /// A value or identifier could not be encoded or decoded.
    #[error("invalid value '{token}': {reason}")]
    InvalidValue {
        /// The offending token.
        token: String,
        /// Description of why the token is invalid.
        reason: String,
    },

    /// Status code reported by the valve controller.
    ///
    /// This is a normal rejection by the device, not a client fault.
    /// Callers that want the full matched set should inspect
    /// [`Response::errors`](crate::Response::errors) instead.
    #[error("device error {code}: {message}")]
    Device {
        /// The 2-hex-digit status code.
        code: &'static str,
        /// Human-readable message for the code.
        message: &'static str,
    },

    /// Communication timeout.
    #[error("communication timeout")]
    Timeout,

    /// I/O error during communication.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ValveError {
    /// Creates a new `NotFound` error.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::ValveError;
    ///
    /// let err = ValveError::not_found("Target Velocity");
    /// ```
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a new `InvalidArity` error.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::ValveError;
    ///
    /// let err = ValveError::invalid_arity(4, 3);
    /// ```
    pub fn invalid_arity(expected: usize, actual: usize) -> Self {
        Self::InvalidArity { expected, actual }
    }

    /// Creates a new `OversizeCommand` error.
    pub fn oversize(length: usize, max: usize) -> Self {
        Self::OversizeCommand { length, max }
    }

    /// Creates a new `InvalidValue` error.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::ValveError;
    ///
    /// let err = ValveError::invalid_value("XYZ", "not hexadecimal");
    /// ```
    pub fn invalid_value(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
