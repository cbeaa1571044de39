//! Value codec for the valve parameter protocol.
//!
//! Values travel on the wire as 8-hex-digit uppercase tokens. Floating point
//! values are the raw IEEE-754 single-precision bit pattern rendered as hex;
//! integers are rendered directly. Decoding reverses the float path, so
//! `decode_token(&encode_float(x))` returns `x` for every representable
//! `f32`.
//!
//! # Example
//!
//! ```
//! use vat_valve::value::{decode_token, encode_float, Value};
//!
//! assert_eq!(encode_float(1.0), "3F800000");
//! assert_eq!(decode_token("3F800000"), Some(Value::Float(1.0)));
//! ```

/// A native value carried by a parameter command or response.
///
/// Parameters are floating point by default; a handful of settings (control
/// mode, access mode, bitmaps) are integer-typed, which the caller declares
/// by choosing the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// 32-bit IEEE-754 floating point value.
    Float(f32),
    /// Unsigned integer value.
    Int(u32),
}

impl Value {
    /// Renders this value as its fixed-width 8-hex-digit wire token.
    ///
    /// Floats use their IEEE-754 bit pattern; integers are zero-padded.
    /// The command encoder always emits this form so that every value
    /// segment on the wire is exactly 8 characters.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::Value;
    ///
    /// assert_eq!(Value::Float(1.0).wire_token(), "3F800000");
    /// assert_eq!(Value::Int(4).wire_token(), "00000004");
    /// ```
    pub fn wire_token(self) -> String {
        match self {
            Value::Float(x) => encode_float(x),
            Value::Int(x) => format!("{:08X}", x),
        }
    }

    /// Returns the value as `f32`, converting an integer if necessary.
    pub fn as_f32(self) -> f32 {
        match self {
            Value::Float(x) => x,
            Value::Int(x) => x as f32,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Float(x) => write!(f, "{}", x),
            Value::Int(x) => write!(f, "{}", x),
        }
    }
}

/// Encodes a float as the uppercase hex rendering of its IEEE-754 bit
/// pattern, zero-padded to 8 digits.
///
/// # Example
///
/// ```
/// use vat_valve::value::encode_float;
///
/// assert_eq!(encode_float(0.0), "00000000");
/// assert_eq!(encode_float(10.5), "41280000");
/// ```
pub fn encode_float(x: f32) -> String {
    format!("{:08X}", x.to_bits())
}

/// Encodes an integer as uppercase hex with no fixed width.
///
/// Used for the few settings declared integer-typed where the controller
/// accepts a bare hex number. Commands built through [`Value::wire_token`]
/// use the fixed 8-digit form instead.
///
/// # Example
///
/// ```
/// use vat_valve::value::encode_int;
///
/// assert_eq!(encode_int(4), "4");
/// assert_eq!(encode_int(0x1A2B), "1A2B");
/// ```
pub fn encode_int(x: u32) -> String {
    format!("{:X}", x)
}

/// Decodes a hex token into a [`Value`].
///
/// A token of exactly 8 hex digits is reinterpreted as an IEEE-754 float
/// from its bit pattern. Any other valid hex string falls back to an
/// unsigned integer parse. Returns `None` for non-hex input.
///
/// # Example
///
/// ```
/// use vat_valve::value::{decode_token, Value};
///
/// assert_eq!(decode_token("41280000"), Some(Value::Float(10.5)));
/// assert_eq!(decode_token("1F"), Some(Value::Int(0x1F)));
/// assert_eq!(decode_token("hello"), None);
/// ```
pub fn decode_token(token: &str) -> Option<Value> {
    if token.len() == 8 {
        if let Ok(bits) = u32::from_str_radix(token, 16) {
            return Some(Value::Float(f32::from_bits(bits)));
        }
    }
    u32::from_str_radix(token, 16).ok().map(Value::Int)
}

/// Scans `text` left to right for non-overlapping runs of exactly 8
/// uppercase hex digits and returns them in encounter order.
///
/// Lowercase hex is not matched; the controller always replies in
/// uppercase. Remainder text between tokens is left for the status code
/// classifier.
///
/// # Example
///
/// ```
/// use vat_valve::value::scan_tokens;
///
/// let tokens = scan_tokens("ok 41280000;41A80000 end");
/// assert_eq!(tokens, vec!["41280000", "41A80000"]);
/// ```
pub fn scan_tokens(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i + 8 <= bytes.len() {
        if bytes[i..i + 8].iter().all(|b| is_wire_hex(*b)) {
            tokens.push(&text[i..i + 8]);
            i += 8;
        } else {
            i += 1;
        }
    }
    tokens
}

/// Decodes every 8-hex-digit token found in `text`, in encounter order.
pub fn decode_all(text: &str) -> Vec<Value> {
    scan_tokens(text)
        .into_iter()
        .filter_map(decode_token)
        .collect()
}

fn is_wire_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_float_known_patterns() {
        assert_eq!(encode_float(1.0), "3F800000");
        assert_eq!(encode_float(10.5), "41280000");
        assert_eq!(encode_float(0.0), "00000000");
        assert_eq!(encode_float(-2.0), "C0000000");
    }

    #[test]
    fn test_encode_int_no_padding() {
        assert_eq!(encode_int(0), "0");
        assert_eq!(encode_int(4), "4");
        assert_eq!(encode_int(0xDEAD), "DEAD");
    }

    #[test]
    fn test_wire_token_int_padded() {
        assert_eq!(Value::Int(4).wire_token(), "00000004");
        assert_eq!(Value::Int(0xFFFF_FFFF).wire_token(), "FFFFFFFF");
    }

    #[test]
    fn test_float_round_trip() {
        for x in [0.0f32, 1.0, -1.5, 10.5, 100.0, 0.001, f32::MAX, f32::MIN] {
            assert_eq!(decode_token(&encode_float(x)), Some(Value::Float(x)));
        }
    }

    #[test]
    fn test_decode_short_token_falls_back_to_int() {
        assert_eq!(decode_token("4"), Some(Value::Int(4)));
        assert_eq!(decode_token("1A2B"), Some(Value::Int(0x1A2B)));
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(decode_token(""), None);
        assert_eq!(decode_token("nothex!!"), None);
    }

    #[test]
    fn test_scan_tokens_order_and_boundaries() {
        let tokens = scan_tokens("41280000;41A80000");
        assert_eq!(tokens, vec!["41280000", "41A80000"]);
    }

    #[test]
    fn test_scan_tokens_nonoverlapping() {
        // A 16-digit run yields two adjacent tokens, not nine overlaps.
        let tokens = scan_tokens("4128000041A80000");
        assert_eq!(tokens, vec!["41280000", "41A80000"]);
    }

    #[test]
    fn test_scan_tokens_ignores_lowercase() {
        assert!(scan_tokens("4128000a").is_empty());
    }

    #[test]
    fn test_scan_tokens_skips_short_runs() {
        assert!(scan_tokens("1234567").is_empty());
        assert_eq!(scan_tokens("x12345678x"), vec!["12345678"]);
    }

    #[test]
    fn test_decode_all() {
        let values = decode_all("3F800000;40000000");
        assert_eq!(values, vec![Value::Float(1.0), Value::Float(2.0)]);
    }
}
