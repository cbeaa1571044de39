//! Command construction and wire encoding.
//!
//! Every command is a single ASCII line:
//!
//! ```text
//! p:SSIIIIIIIIXXVVVVVVVV;VVVVVVVV...<LF>
//! ```
//!
//! where `SS` is the 2-hex service code, `IIIIIIII` the parameter or
//! compound identifier, `XX` the index (always `00` in this protocol
//! generation) and the `V` groups are 8-hex-digit value tokens joined with
//! `;`. A GET carries no value segment. There are no separators between the
//! fixed fields.
//!
//! A [`Command`] is validated and fully encoded at construction: arity
//! mismatches and oversize messages are rejected here, before anything
//! touches the transport.
//!
//! # Example
//!
//! ```
//! use vat_valve::{Command, Service, Value};
//! use vat_valve::registry::COMPOUND_1;
//!
//! let param = COMPOUND_1.find("control mode").unwrap();
//! let cmd = Command::single(Service::Set, param, Some(Value::Int(4))).unwrap();
//! assert_eq!(cmd.as_str(), "p:010F0200000000000004\n");
//! ```

use crate::error::{Result, ValveError};
use crate::registry::{Compound, Parameter, MAX_MEMBERS};
use crate::service::Service;
use crate::value::Value;

/// Control character terminating every wire message.
pub const TERMINATOR: char = '\n';

/// Maximum encoded message length in characters, terminator included.
pub const MAX_COMMAND_LEN: usize = 100;

/// Fixed sub-address index field. Reserved for future sub-addressing.
const INDEX: &str = "00";

/// A validated, fully encoded command ready for transmission.
///
/// Commands are ephemeral: build one per exchange and drop it after
/// sending.
#[derive(Debug, Clone)]
pub struct Command {
    service: Service,
    message: String,
}

impl Command {
    /// Builds a single-parameter command.
    ///
    /// SET services require exactly one value; GET must carry none.
    ///
    /// # Errors
    ///
    /// - `InvalidArity` if the value presence does not match the service.
    /// - `InvalidValue` if a compound service is passed.
    /// - `OversizeCommand` if the encoded message exceeds
    ///   [`MAX_COMMAND_LEN`].
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::{Command, Service};
    /// use vat_valve::registry::COMPOUND_2;
    ///
    /// let param = COMPOUND_2.find("actual position").unwrap();
    /// let cmd = Command::single(Service::Get, param, None).unwrap();
    /// assert_eq!(cmd.as_str(), "p:0B1001000000\n");
    /// ```
    pub fn single(service: Service, parameter: &Parameter, value: Option<Value>) -> Result<Self> {
        if service.is_compound() {
            return Err(ValveError::invalid_value(
                service.code(),
                "compound service used for a single-parameter command",
            ));
        }
        match (service.is_get(), value.is_some()) {
            (true, true) => return Err(ValveError::invalid_arity(0, 1)),
            (false, false) => return Err(ValveError::invalid_arity(1, 0)),
            _ => {}
        }

        let mut message = format!("p:{}{}{}", service.code(), parameter.id, INDEX);
        if let Some(value) = value {
            message.push_str(&value.wire_token());
        }
        message.push(TERMINATOR);
        Self::finish(service, message)
    }

    /// Builds a compound command.
    ///
    /// `CompoundSet` and `CompoundSetGet` require one value per member,
    /// reserved placeholder slots included. `CompoundGet` sends the compound
    /// address and index only and must be given no values.
    ///
    /// # Errors
    ///
    /// - `InvalidArity` if `values.len()` differs from the member count.
    /// - `InvalidValue` if a single-parameter service is passed or the
    ///   compound address cannot be derived.
    /// - `OversizeCommand` if the encoded message exceeds
    ///   [`MAX_COMMAND_LEN`]. Large compounds can trip this even with a
    ///   correct value count.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::{Command, Service, Value};
    /// use vat_valve::registry::COMPOUND_1;
    ///
    /// let values = vec![Value::Int(4); COMPOUND_1.len()];
    /// let cmd = Command::compound(Service::CompoundSet, &COMPOUND_1, &values).unwrap();
    /// assert!(cmd.as_str().starts_with("p:28A90F0A000000"));
    /// ```
    pub fn compound(service: Service, compound: &Compound, values: &[Value]) -> Result<Self> {
        if !service.is_compound() {
            return Err(ValveError::invalid_value(
                service.code(),
                "single-parameter service used for a compound command",
            ));
        }

        if compound.len() > MAX_MEMBERS {
            return Err(ValveError::invalid_value(
                compound.name,
                format!("compound exceeds {MAX_MEMBERS} members"),
            ));
        }

        let address = compound.address()?;
        let mut message = format!("p:{}{}{}", service.code(), address, INDEX);

        if service == Service::CompoundGet {
            if !values.is_empty() {
                return Err(ValveError::invalid_arity(0, values.len()));
            }
        } else {
            if values.len() != compound.len() {
                return Err(ValveError::invalid_arity(compound.len(), values.len()));
            }
            let tokens: Vec<String> = values.iter().map(|v| v.wire_token()).collect();
            message.push_str(&tokens.join(";"));
        }

        message.push(TERMINATOR);
        Self::finish(service, message)
    }

    fn finish(service: Service, message: String) -> Result<Self> {
        if message.len() > MAX_COMMAND_LEN {
            return Err(ValveError::oversize(message.len(), MAX_COMMAND_LEN));
        }
        Ok(Self { service, message })
    }

    /// Returns the service this command was built for.
    pub fn service(&self) -> Service {
        self.service
    }

    /// Returns the encoded message, terminator included.
    pub fn as_str(&self) -> &str {
        &self.message
    }

    /// Returns the encoded message as bytes for transmission.
    pub fn as_bytes(&self) -> &[u8] {
        self.message.as_bytes()
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Terminator stripped for readable logs.
        f.write_str(self.message.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{COMPOUND_1, COMPOUND_3};

    #[test]
    fn test_single_set_integer_exact_wire_string() {
        let param = COMPOUND_1.find("control mode").unwrap();
        let cmd = Command::single(Service::Set, param, Some(Value::Int(4))).unwrap();
        // p: + 01 + 0F020000 + 00 + 00000004 + LF, no field separators.
        assert_eq!(cmd.as_str(), "p:010F0200000000000004\n");
    }

    #[test]
    fn test_single_set_float() {
        let param = COMPOUND_1.find("target pressure").unwrap();
        let cmd = Command::single(Service::Set, param, Some(Value::Float(10.5))).unwrap();
        assert_eq!(cmd.as_str(), "p:01070200000041280000\n");
    }

    #[test]
    fn test_single_get_omits_value() {
        let param = COMPOUND_1.find("target position").unwrap();
        let cmd = Command::single(Service::Get, param, None).unwrap();
        assert_eq!(cmd.as_str(), "p:0B1102000000\n");
    }

    #[test]
    fn test_single_volatile_set_opcode() {
        let param = COMPOUND_1.find("control mode").unwrap();
        let cmd = Command::single(Service::SetVolatile, param, Some(Value::Int(1))).unwrap();
        assert!(cmd.as_str().starts_with("p:2B"));
    }

    #[test]
    fn test_single_arity_checks() {
        let param = COMPOUND_1.find("control mode").unwrap();
        assert!(matches!(
            Command::single(Service::Get, param, Some(Value::Int(1))),
            Err(ValveError::InvalidArity {
                expected: 0,
                actual: 1
            })
        ));
        assert!(matches!(
            Command::single(Service::Set, param, None),
            Err(ValveError::InvalidArity {
                expected: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn test_single_rejects_compound_service() {
        let param = COMPOUND_1.find("control mode").unwrap();
        assert!(Command::single(Service::CompoundSet, param, Some(Value::Int(1))).is_err());
    }

    #[test]
    fn test_compound_set_token_count_and_order() {
        let values = [
            Value::Float(10.5),
            Value::Float(12.0),
            Value::Float(13.5),
            Value::Float(15.0),
        ];
        let cmd = Command::compound(Service::CompoundSet, &COMPOUND_1, &values).unwrap();
        let message = cmd.as_str().trim_end();
        let segment = &message["p:28A90F0A000000".len()..];
        let tokens: Vec<&str> = segment.split(';').collect();
        assert_eq!(
            tokens,
            vec!["41280000", "41400000", "41580000", "41700000"]
        );
    }

    #[test]
    fn test_compound_get_address_and_index_only() {
        let cmd = Command::compound(Service::CompoundGet, &COMPOUND_1, &[]).unwrap();
        assert_eq!(cmd.as_str(), "p:29A90F0A000000\n");
    }

    #[test]
    fn test_compound_get_rejects_values() {
        let result = Command::compound(Service::CompoundGet, &COMPOUND_1, &[Value::Int(1)]);
        assert!(matches!(result, Err(ValveError::InvalidArity { .. })));
    }

    #[test]
    fn test_compound_arity_mismatch_never_encodes() {
        let values = [Value::Float(1.0); 2];
        let result = Command::compound(Service::CompoundSet, &COMPOUND_1, &values);
        assert!(matches!(
            result,
            Err(ValveError::InvalidArity {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_compound_rejects_single_service() {
        assert!(Command::compound(Service::Set, &COMPOUND_1, &[]).is_err());
    }

    #[test]
    fn test_oversize_compound() {
        // 11 members * 9 chars of value segment push Compound3 past the
        // 100-character wire limit.
        let values = vec![Value::Float(10.5); COMPOUND_3.len()];
        let result = Command::compound(Service::CompoundSetGet, &COMPOUND_3, &values);
        assert!(matches!(
            result,
            Err(ValveError::OversizeCommand { length: 115, .. })
        ));
    }

    #[test]
    fn test_compound_rejects_too_many_members() {
        static WIDE: [crate::registry::Parameter; 21] =
            [crate::registry::Parameter::new("Not Used", "00000000"); 21];
        let compound = crate::registry::Compound {
            name: "Wide",
            members: &WIDE,
        };
        let values = vec![Value::Int(0); 21];
        assert!(matches!(
            Command::compound(Service::CompoundSet, &compound, &values),
            Err(ValveError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_display_strips_terminator() {
        let param = COMPOUND_1.find("control mode").unwrap();
        let cmd = Command::single(Service::Get, param, None).unwrap();
        assert_eq!(cmd.to_string(), "p:0B0F02000000");
    }
}
