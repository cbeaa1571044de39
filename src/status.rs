//! Status code taxonomy for valve controller responses.
//!
//! The controller rejects a command by embedding a terse 2-hex-digit status
//! code in its ASCII reply. This module holds the fixed code table and the
//! classifier that maps a raw response to its matched entries.
//!
//! # Matching semantics
//!
//! [`classify`] scans the full table and reports every code whose two
//! characters occur anywhere in the response text. The match is deliberately
//! loose and not field-positional, mirroring the controller tooling this
//! crate replaces: a decoded data token that happens to contain a code's
//! digits can produce a false positive. Callers should treat a match as a
//! strong hint, not proof of position. Code `"00"` means success and is
//! never reported as an error.
//!
//! # Example
//!
//! ```
//! use vat_valve::status;
//!
//! let matches = status::classify("7A");
//! assert_eq!(matches[0].code, "7A");
//! assert_eq!(matches[0].message, "wrong service");
//!
//! assert!(status::classify("00").is_empty());
//! ```

/// A single entry of the device status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorEntry {
    /// 2-hex-digit status code as it appears on the wire.
    pub code: &'static str,
    /// Human-readable description.
    pub message: &'static str,
}

/// Status code indicating success.
pub const NO_ERROR: &str = "00";

/// The controller's complete status code table.
///
/// Codes are unique; `"00"` denotes success. Order matters for
/// [`classify`], which reports matches in table order.
pub static ERROR_TABLE: &[ErrorEntry] = &[
    ErrorEntry { code: "00", message: "no error" },
    ErrorEntry { code: "0C", message: "wrong command length" },
    ErrorEntry { code: "1C", message: "value too low" },
    ErrorEntry { code: "1D", message: "value too high" },
    ErrorEntry { code: "20", message: "resulting zero adjust offset" },
    ErrorEntry { code: "21", message: "sensor voltage too high or too low" },
    ErrorEntry { code: "22", message: "not valid because no sensor enabled" },
    ErrorEntry { code: "50", message: "wrong access mode" },
    ErrorEntry { code: "51", message: "timeout" },
    ErrorEntry { code: "6D", message: "NV memory not ready" },
    ErrorEntry { code: "6E", message: "wrong parameter ID" },
    ErrorEntry { code: "70", message: "parameter not settable" },
    ErrorEntry { code: "71", message: "parameter not readable" },
    ErrorEntry { code: "73", message: "wrong parameter index" },
    ErrorEntry { code: "76", message: "wrong value within range" },
    ErrorEntry { code: "78", message: "not allowed in this state" },
    ErrorEntry { code: "79", message: "setting lock" },
    ErrorEntry { code: "7A", message: "wrong service" },
    ErrorEntry { code: "7B", message: "parameter not active" },
    ErrorEntry { code: "7C", message: "parameter system error" },
    ErrorEntry { code: "7D", message: "communication error" },
    ErrorEntry { code: "7E", message: "unknown service" },
    ErrorEntry { code: "7F", message: "unexpected character" },
    ErrorEntry { code: "80", message: "no access rights" },
    ErrorEntry { code: "81", message: "no adequate hardware" },
    ErrorEntry { code: "82", message: "wrong object state" },
    ErrorEntry { code: "84", message: "no slave command" },
    ErrorEntry { code: "85", message: "command to unknown slave" },
    ErrorEntry { code: "87", message: "command to master only" },
    ErrorEntry { code: "88", message: "only G command allowed" },
    ErrorEntry { code: "89", message: "not supported" },
    ErrorEntry { code: "A0", message: "function is disabled" },
    ErrorEntry { code: "A1", message: "already done" },
];

/// Scans `text` for device status codes and returns every matched entry.
///
/// The success code `"00"` is excluded: success is the absence of any
/// non-`"00"` match. See the module docs for the substring-matching caveat.
///
/// # Example
///
/// ```
/// use vat_valve::status::classify;
///
/// let matched = classify("7D00000000");
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].message, "communication error");
/// ```
pub fn classify(text: &str) -> Vec<&'static ErrorEntry> {
    ERROR_TABLE
        .iter()
        .filter(|entry| entry.code != NO_ERROR && text.contains(entry.code))
        .collect()
}

/// Looks up a status entry by exact code.
///
/// # Example
///
/// ```
/// use vat_valve::status::find;
///
/// assert_eq!(find("51").unwrap().message, "timeout");
/// assert!(find("FF").is_none());
/// ```
pub fn find(code: &str) -> Option<&'static ErrorEntry> {
    ERROR_TABLE.iter().find(|entry| entry.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = ERROR_TABLE.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), ERROR_TABLE.len());
    }

    #[test]
    fn test_classify_wrong_service_anywhere() {
        // "7A" must be reported wherever the substring appears.
        let matched = classify("junk7Ajunk");
        assert!(matched.iter().any(|e| e.code == "7A"));
    }

    #[test]
    fn test_classify_success_not_reported() {
        // A bare success response must not be double-reported as an error.
        assert!(classify("00").is_empty());
    }

    #[test]
    fn test_classify_multiple_matches_in_table_order() {
        let matched = classify("1C1D");
        let codes: Vec<_> = matched.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["1C", "1D"]);
    }

    #[test]
    fn test_classify_false_positive_from_data() {
        // Known limitation: a data token containing "51" matches "timeout".
        let matched = classify("41510000");
        assert!(matched.iter().any(|e| e.code == "51"));
    }

    #[test]
    fn test_find_exact() {
        assert_eq!(find("7D").unwrap().message, "communication error");
        assert_eq!(find("00").unwrap().message, "no error");
        assert!(find("ZZ").is_none());
    }
}
