//! Response parsing and error classification.
//!
//! The controller replies with one burst of ASCII text: zero or more
//! 8-hex-digit value tokens and/or an embedded 2-hex status code, with no
//! length prefix or checksum. [`Response::parse`] classifies the text
//! against the status table first; any non-`"00"` match short-circuits the
//! numeric decode, since an error reply carries no meaningful values.
//!
//! Classification runs on the raw text, so a value token containing an
//! error code's two digits (10.5 encodes to `41280000`, which contains
//! `80`) is reported as that error. This loose matching is preserved for
//! compatibility with the controller tooling this crate replaces; see
//! [`status`](crate::status) for the details.
//!
//! # Example
//!
//! ```
//! use vat_valve::{Response, Value};
//!
//! let ok = Response::parse("40000000;40400000\r\n");
//! assert!(ok.is_success());
//! assert_eq!(ok.values(), &[Value::Float(2.0), Value::Float(3.0)]);
//!
//! let rejected = Response::parse("7D00000000");
//! assert!(!rejected.is_success());
//! assert!(rejected.values().is_empty());
//! ```

use crate::error::{Result, ValveError};
use crate::status::{self, ErrorEntry};
use crate::value::{self, Value};

/// A decoded controller response.
///
/// Ephemeral, produced once per exchange.
#[derive(Debug, Clone)]
pub struct Response {
    raw: String,
    values: Vec<Value>,
    errors: Vec<&'static ErrorEntry>,
}

impl Response {
    /// Parses raw response text.
    ///
    /// Trailing whitespace is stripped, the status table is scanned, and
    /// only when no error code matches are the 8-hex-digit tokens decoded
    /// in encounter order.
    pub fn parse(text: &str) -> Self {
        let raw = text.trim_end();
        let errors = status::classify(raw);
        let values = if errors.is_empty() {
            value::decode_all(raw)
        } else {
            Vec::new()
        };
        Self {
            raw: raw.to_string(),
            values,
            errors,
        }
    }

    /// Parses raw response bytes, replacing invalid UTF-8.
    ///
    /// The protocol is plain ASCII; anything else in the buffer is noise
    /// worth keeping visible in [`raw`](Response::raw) rather than failing
    /// the whole exchange over.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(data))
    }

    /// Returns whether the controller accepted the command (no status code
    /// other than `"00"` matched).
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The response text with trailing whitespace stripped.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Decoded values in wire order. Empty for error responses.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Status entries matched in the response, in table order.
    pub fn errors(&self) -> &[&'static ErrorEntry] {
        &self.errors
    }

    /// Converts a device-reported error into a hard failure.
    ///
    /// Returns `Ok(())` on success; otherwise the first matched status
    /// entry as [`ValveError::Device`]. The full matched set stays
    /// available through [`errors`](Response::errors).
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::Response;
    ///
    /// let response = Response::parse("7A");
    /// let err = response.check_errors().unwrap_err();
    /// assert_eq!(err.to_string(), "device error 7A: wrong service");
    /// ```
    pub fn check_errors(&self) -> Result<()> {
        match self.errors.first() {
            None => Ok(()),
            Some(entry) => Err(ValveError::Device {
                code: entry.code,
                message: entry.message,
            }),
        }
    }

    /// Returns the single decoded value of a plain GET response.
    ///
    /// # Errors
    ///
    /// Returns the device error if one matched, or `InvalidValue` when the
    /// response carries no decodable token.
    pub fn single_value(&self) -> Result<Value> {
        self.check_errors()?;
        self.values
            .first()
            .copied()
            .ok_or_else(|| ValveError::invalid_value(&self.raw, "response carries no value token"))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
