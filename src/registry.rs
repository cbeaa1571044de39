//! Parameter and compound catalog for the valve controller.
//!
//! Every device setting or reading is addressed by an 8-hex-digit parameter
//! identifier. A *compound* is a fixed-order group of parameters the
//! controller transfers as one multi-value command; the member order decides
//! which position each value occupies, so it must round-trip identically
//! between encode and decode.
//!
//! The catalog here is the controller's standard Ethernet interface: one SET
//! compound, one GET compound, and a combined SET/GET compound whose halves
//! are split by a reserved all-zero separator entry.
//!
//! # Name lookup
//!
//! [`Compound::find`] matches by case-insensitive substring containment in
//! declaration order and returns the first hit, so `"position"` finds
//! "Target Position" in [`COMPOUND_1`]. Ambiguity is not detected; a more
//! specific name is the caller's tool when a compound holds both a target
//! and an actual variant of the same quantity.
//!
//! # Example
//!
//! ```
//! use vat_valve::registry::COMPOUND_2;
//!
//! let p = COMPOUND_2.find("actual pressure").unwrap();
//! assert_eq!(p.id, "07010000");
//! ```

use crate::error::{Result, ValveError};

/// Maximum number of members a compound may hold.
pub const MAX_MEMBERS: usize = 20;

/// Identifier of the reserved "Not Used" / separator entries.
pub const UNUSED_ID: &str = "00000000";

/// A named device parameter and its protocol identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Human-readable parameter name.
    pub name: &'static str,
    /// 8-hex-digit parameter identifier, uppercase.
    pub id: &'static str,
}

impl Parameter {
    /// Creates a parameter definition.
    pub const fn new(name: &'static str, id: &'static str) -> Self {
        Self { name, id }
    }

    /// Returns whether this entry is a reserved all-zero placeholder.
    pub fn is_unused(&self) -> bool {
        self.id == UNUSED_ID
    }
}

/// An ordered, fixed-length group of parameters transferred as one command.
#[derive(Debug, Clone, Copy)]
pub struct Compound {
    /// Compound name used in diagnostics.
    pub name: &'static str,
    /// Members in wire order. Order is semantically significant.
    pub members: &'static [Parameter],
}

impl Compound {
    /// Number of members, placeholders included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the compound has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds a member by case-insensitive substring containment.
    ///
    /// Members are scanned in declaration order and the first match wins
    /// silently, so partial names work: `"position"` matches
    /// "Target Position". With both a target and an actual variant present,
    /// pass a more specific name.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::registry::COMPOUND_1;
    ///
    /// let p = COMPOUND_1.find("target position").unwrap();
    /// assert_eq!(p.id, "11020000");
    /// assert!(COMPOUND_1.find("flow rate").is_none());
    /// ```
    pub fn find(&self, name: &str) -> Option<&'static Parameter> {
        let needle = name.to_lowercase();
        self.members
            .iter()
            .find(|member| member.name.to_lowercase().contains(&needle))
    }

    /// Derives this compound's own protocol identifier.
    ///
    /// The controller recognizes a compound command by an identifier
    /// reconstructed from the first member: prefix `A9`, characters 0-1 of
    /// the member id, fixed `0A`, characters 4-5, trailing `00`. The rule
    /// must be reproduced exactly or the device falls back to treating the
    /// command as a plain parameter access.
    ///
    /// # Errors
    ///
    /// Returns an error if the compound is empty or the first member's
    /// identifier is too short to slice.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::registry::COMPOUND_1;
    ///
    /// assert_eq!(COMPOUND_1.address().unwrap(), "A90F0A0000");
    /// ```
    pub fn address(&self) -> Result<String> {
        let first = self
            .members
            .first()
            .ok_or_else(|| ValveError::invalid_value(self.name, "compound has no members"))?;
        match (first.id.get(0..2), first.id.get(4..6)) {
            (Some(head), Some(mid)) => Ok(format!("A9{head}0A{mid}00")),
            _ => Err(ValveError::invalid_value(
                first.id,
                "identifier too short for compound address derivation",
            )),
        }
    }
}

/// Finds a parameter by name across the whole built-in catalog.
///
/// Scans [`COMPOUND_1`], [`COMPOUND_2`], [`COMPOUND_3`] and the format
/// parameters in that order, with the same case-insensitive substring
/// matching as [`Compound::find`]. Use the compound-scoped lookup when the
/// compound is known; this is the fallback for callers holding only a name.
///
/// # Example
///
/// ```
/// use vat_valve::registry::find_parameter;
///
/// assert_eq!(find_parameter("warning").unwrap().id, "0F300100");
/// assert!(find_parameter("gas flow").is_none());
/// ```
pub fn find_parameter(name: &str) -> Option<&'static Parameter> {
    let needle = name.to_lowercase();
    [&COMPOUND_1, &COMPOUND_2, &COMPOUND_3]
        .into_iter()
        .flat_map(|compound| compound.members.iter())
        .chain([&FORMAT_INTEGER, &FORMAT_FLOATING_POINT])
        .find(|parameter| parameter.name.to_lowercase().contains(&needle))
}

/// Format setting for all integer values.
pub static FORMAT_INTEGER: Parameter = Parameter::new("Format Integer", "06020201");

/// Format setting for all floating point values.
pub static FORMAT_FLOATING_POINT: Parameter = Parameter::new("Format Floating Point", "06020202");

/// SET compound: control mode, target position, target pressure.
pub static COMPOUND_1: Compound = Compound {
    name: "Compound1",
    members: &[
        Parameter::new("Control Mode", "0F020000"),
        Parameter::new("Target Position", "11020000"),
        Parameter::new("Target Pressure", "07020000"),
        Parameter::new("Not Used", "00000000"),
    ],
};

/// GET compound: access/control state and actual readings.
pub static COMPOUND_2: Compound = Compound {
    name: "Compound2",
    members: &[
        Parameter::new("Access Mode", "0F0B0000"),
        Parameter::new("Control Mode", "0F020000"),
        Parameter::new("Actual Position", "10010000"),
        Parameter::new("Position State", "00100000"),
        Parameter::new("Actual Pressure", "07010000"),
        Parameter::new("Target Pressure Used", "07030000"),
        Parameter::new("Warning Bitmap", "0F300100"),
        Parameter::new("Not Used", "00000000"),
    ],
};

/// SET/GET compound: the Compound1 SET half, an all-zero separator, then
/// the Compound2 read half.
pub static COMPOUND_3: Compound = Compound {
    name: "Compound3",
    members: &[
        Parameter::new("Control Mode", "0F020000"),
        Parameter::new("Target Position", "11020000"),
        Parameter::new("Target Pressure", "07020000"),
        Parameter::new("Separation", "00000000"),
        Parameter::new("Access Mode", "0F0B0000"),
        Parameter::new("Actual Position", "10010000"),
        Parameter::new("Position State", "00100000"),
        Parameter::new("Actual Pressure", "07010000"),
        Parameter::new("Target Pressure Used", "07030000"),
        Parameter::new("Warning Bitmap", "0F300100"),
        Parameter::new("Not Used", "00000000"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes_within_limit() {
        for compound in [&COMPOUND_1, &COMPOUND_2, &COMPOUND_3] {
            assert!(compound.len() <= MAX_MEMBERS);
            assert!(!compound.is_empty());
        }
        assert_eq!(COMPOUND_1.len(), 4);
        assert_eq!(COMPOUND_2.len(), 8);
        assert_eq!(COMPOUND_3.len(), 11);
    }

    #[test]
    fn test_find_case_insensitive_substring() {
        let p = COMPOUND_1.find("POSITION").unwrap();
        assert_eq!(p.name, "Target Position");

        let p = COMPOUND_2.find("warning").unwrap();
        assert_eq!(p.id, "0F300100");
    }

    #[test]
    fn test_find_first_match_wins() {
        // "pressure" is ambiguous in Compound2; declaration order decides.
        let p = COMPOUND_2.find("pressure").unwrap();
        assert_eq!(p.name, "Actual Pressure");

        // "mode" hits Access Mode before Control Mode.
        let p = COMPOUND_2.find("mode").unwrap();
        assert_eq!(p.name, "Access Mode");
    }

    #[test]
    fn test_find_miss() {
        assert!(COMPOUND_1.find("gas flow").is_none());
    }

    #[test]
    fn test_address_derivation_reference_encoding() {
        // First member 0F020000: A9 + "0F" + 0A + "00" + 00.
        assert_eq!(COMPOUND_1.address().unwrap(), "A90F0A0000");
        assert_eq!(COMPOUND_2.address().unwrap(), "A90F0A0000");
    }

    #[test]
    fn test_address_empty_compound() {
        let empty = Compound {
            name: "Empty",
            members: &[],
        };
        assert!(empty.address().is_err());
    }

    #[test]
    fn test_separator_entry() {
        let sep = &COMPOUND_3.members[3];
        assert!(sep.is_unused());
        assert_eq!(sep.name, "Separation");
    }

    #[test]
    fn test_format_parameters() {
        assert_eq!(FORMAT_INTEGER.id, "06020201");
        assert_eq!(FORMAT_FLOATING_POINT.id, "06020202");
    }

    #[test]
    fn test_find_parameter_catalog_wide() {
        // Compound1 is scanned first, so "position" resolves to its
        // Target Position rather than Compound2's Actual Position.
        let p = find_parameter("position").unwrap();
        assert_eq!(p.name, "Target Position");

        assert_eq!(find_parameter("format integer").unwrap().id, "06020201");
        assert!(find_parameter("nonexistent").is_none());
    }
}
