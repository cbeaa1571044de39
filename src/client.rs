//! High-level client for the valve controller.
//!
//! This module provides the [`Client`] struct, the primary interface for
//! exchanging parameter commands with a valve controller.
//!
//! # Overview
//!
//! Each operation is one strict request/response round trip:
//!
//! 1. Registry lookup and command encoding (local failures return here,
//!    before any network I/O)
//! 2. One transport send, one transport receive
//! 3. Response classification and value decoding
//!
//! Device-reported status codes come back inside an `Ok(Response)` - a
//! rejection by the controller is a normal, recoverable outcome, distinct
//! from a transport failure. Call [`Response::check_errors`] to turn one
//! into a hard error.
//!
//! # Example
//!
//! ```no_run
//! use vat_valve::{Client, ClientConfig, Value};
//! use vat_valve::registry::{COMPOUND_1, COMPOUND_2};
//! use std::net::Ipv4Addr;
//!
//! fn main() -> vat_valve::Result<()> {
//!     let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10));
//!     let mut client = Client::connect(config)?;
//!
//!     // Switch to position control and drive the valve open
//!     client.set_parameter(&COMPOUND_1, "control mode", Value::Int(4))?;
//!
//!     // Read back the actual position
//!     let response = client.get_parameter(&COMPOUND_2, "actual position")?;
//!     println!("position = {:?}", response.values());
//!     Ok(())
//! }
//! ```
//!
//! # Concurrency
//!
//! A client owns exactly one connection and is not safe for concurrent use
//! on it: every operation takes `&mut self`, so a second command cannot be
//! issued before the prior response (or failure) is observed. The codec
//! layers underneath are pure and freely shareable.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use tracing::{debug, warn};

use crate::command::Command;
use crate::error::{Result, ValveError};
use crate::registry::Compound;
use crate::response::Response;
use crate::service::Service;
use crate::transport::{TcpTransport, Transport, DEFAULT_PORT, DEFAULT_TIMEOUT};
use crate::value::Value;

/// Configuration for creating a valve client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Controller socket address.
    pub addr: SocketAddr,
    /// Timeout for connect, send and receive.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for a controller at `ip` with the default
    /// port and timeout.
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::ClientConfig;
    /// use std::net::Ipv4Addr;
    ///
    /// let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10));
    /// ```
    pub fn new(ip: Ipv4Addr) -> Self {
        Self {
            addr: SocketAddr::from((ip, DEFAULT_PORT)),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom controller port (default is 503).
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Sets a custom timeout (default is 5 seconds).
    ///
    /// # Example
    ///
    /// ```
    /// use vat_valve::ClientConfig;
    /// use std::net::Ipv4Addr;
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10))
    ///     .with_timeout(Duration::from_secs(10));
    /// ```
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Valve controller client.
///
/// Each operation produces exactly one request and one response. No
/// automatic retries, caching, or reconnection - higher-level polling
/// loops belong to the caller.
pub struct Client<T: Transport = TcpTransport> {
    transport: T,
}

impl Client<TcpTransport> {
    /// Connects to the controller described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP connection cannot be established.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vat_valve::{Client, ClientConfig};
    /// use std::net::Ipv4Addr;
    ///
    /// let client = Client::connect(ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10))).unwrap();
    /// ```
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let transport = TcpTransport::connect(config.addr, config.timeout)?;
        Ok(Self { transport })
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over an existing transport.
    ///
    /// Useful for test doubles and custom transports.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Sends one command and parses the single response burst.
    fn exchange(&mut self, command: &Command) -> Result<Response> {
        debug!(command = %command, "sending command");
        let bytes = self.transport.send_receive(command.as_bytes())?;
        let response = Response::from_bytes(&bytes);

        if let Some(entry) = response.errors().first() {
            warn!(
                raw = response.raw(),
                code = entry.code,
                message = entry.message,
                "device reported error"
            );
        } else {
            debug!(raw = response.raw(), values = response.values().len(), "response");
        }
        Ok(response)
    }

    /// Sets a single parameter, found by name within `compound`.
    ///
    /// Name matching is case-insensitive substring containment; the first
    /// declared match wins.
    ///
    /// # Errors
    ///
    /// `NotFound` if no member matches, `OversizeCommand`/`InvalidArity`
    /// from encoding, or a transport failure. A rejection by the device
    /// comes back inside the `Ok(Response)`.
    pub fn set_parameter(
        &mut self,
        compound: &Compound,
        name: &str,
        value: Value,
    ) -> Result<Response> {
        self.set_with_service(Service::Set, compound, name, value)
    }

    /// Sets a single parameter without saving it to NV memory.
    ///
    /// Identical to [`set_parameter`](Client::set_parameter) except the
    /// value does not survive a controller power cycle. Preferred for
    /// frequently rewritten setpoints, which would otherwise wear the NV
    /// memory.
    pub fn set_parameter_volatile(
        &mut self,
        compound: &Compound,
        name: &str,
        value: Value,
    ) -> Result<Response> {
        self.set_with_service(Service::SetVolatile, compound, name, value)
    }

    fn set_with_service(
        &mut self,
        service: Service,
        compound: &Compound,
        name: &str,
        value: Value,
    ) -> Result<Response> {
        let parameter = compound
            .find(name)
            .ok_or_else(|| ValveError::not_found(name))?;
        let command = Command::single(service, parameter, Some(value))?;
        self.exchange(&command)
    }

    /// Reads a single parameter, found by name within `compound`.
    pub fn get_parameter(&mut self, compound: &Compound, name: &str) -> Result<Response> {
        let parameter = compound
            .find(name)
            .ok_or_else(|| ValveError::not_found(name))?;
        let command = Command::single(Service::Get, parameter, None)?;
        self.exchange(&command)
    }

    /// Writes a full compound in one command.
    ///
    /// `values` must hold exactly one entry per member, reserved
    /// placeholder slots included.
    pub fn set_compound(&mut self, compound: &Compound, values: &[Value]) -> Result<Response> {
        let command = Command::compound(Service::CompoundSet, compound, values)?;
        self.exchange(&command)
    }

    /// Reads a full compound in one command.
    ///
    /// The response carries one decoded value per member in declaration
    /// order.
    pub fn get_compound(&mut self, compound: &Compound) -> Result<Response> {
        let command = Command::compound(Service::CompoundGet, compound, &[])?;
        self.exchange(&command)
    }

    /// Writes and reads a combined SET/GET compound in one command.
    ///
    /// `values` must cover every member including the all-zero separator
    /// and the read slots; the controller ignores the values in read
    /// positions and replies with the read half.
    pub fn set_get_compound(&mut self, compound: &Compound, values: &[Value]) -> Result<Response> {
        let command = Command::compound(Service::CompoundSetGet, compound, values)?;
        self.exchange(&command)
    }
}
