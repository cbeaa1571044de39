//! Service codes for the valve parameter protocol.
//!
//! Every command opens with a 2-hex-digit service code selecting the
//! operation: a plain SET/GET on one parameter, a volatile SET that skips
//! the NV memory write, or one of the compound variants that transfer a
//! whole parameter group in a single round trip.
//!
//! # Example
//!
//! ```
//! use vat_valve::Service;
//!
//! assert_eq!(Service::Set.code(), "01");
//! assert_eq!(Service::CompoundGet.code(), "29");
//! assert!(Service::CompoundSetGet.is_compound());
//! assert!(Service::Get.is_get());
//! ```

/// Protocol service codes.
///
/// The wire representation is the 2-hex-digit string returned by
/// [`code`](Service::code); these codes are fixed by the controller firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Standard SET command.
    Set,
    /// Standard GET command.
    Get,
    /// SET without saving to NV memory.
    SetVolatile,
    /// Compound SET command.
    CompoundSet,
    /// Compound GET command.
    CompoundGet,
    /// Compound SET/GET command.
    CompoundSetGet,
}

impl Service {
    /// Returns the 2-hex-digit wire code for this service.
    pub fn code(self) -> &'static str {
        match self {
            Service::Set => "01",
            Service::Get => "0B",
            Service::SetVolatile => "2B",
            Service::CompoundSet => "28",
            Service::CompoundGet => "29",
            Service::CompoundSetGet => "30",
        }
    }

    /// Returns whether this service addresses a compound rather than a
    /// single parameter.
    pub fn is_compound(self) -> bool {
        matches!(
            self,
            Service::CompoundSet | Service::CompoundGet | Service::CompoundSetGet
        )
    }

    /// Returns whether this service is a pure read (carries no values).
    pub fn is_get(self) -> bool {
        matches!(self, Service::Get | Service::CompoundGet)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
