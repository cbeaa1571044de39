//! # Valve Parameter Protocol Library
//!
//! A Rust library for configuring and reading VAT-style valve controllers
//! over their ASCII parameter protocol on TCP.
//!
//! This is a **protocol-only** library—no polling loops, schedulers, or
//! application-level features. Each call produces exactly 1 request and
//! 1 response. No automatic retries, caching, or reconnection.
//!
//! ## Features
//!
//! - **Protocol-only** — command encoding, response decoding, status
//!   classification
//! - **Deterministic** — each call produces exactly 1 request and 1 response
//! - **Fail fast** — lookup, arity and length errors are caught before any
//!   network I/O
//! - **No panics** — all errors returned as `Result<T, ValveError>`
//! - **Testable** — the transport is a trait; any double plugs in
//!
//! ## Quick Start
//!
//! ```no_run
//! use vat_valve::{Client, ClientConfig, Value};
//! use vat_valve::registry::{COMPOUND_1, COMPOUND_2};
//! use std::net::Ipv4Addr;
//!
//! fn main() -> vat_valve::Result<()> {
//!     // Connect to the controller on its Ethernet interface
//!     let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10));
//!     let mut client = Client::connect(config)?;
//!
//!     // Drive the valve to position control, fully open
//!     client.set_parameter(&COMPOUND_1, "control mode", Value::Int(4))?;
//!
//!     // Read back the actual position
//!     let response = client.get_parameter(&COMPOUND_2, "actual position")?;
//!     println!("position = {:?}", response.values());
//!
//!     // Fetch the whole readback compound in one round trip
//!     let response = client.get_compound(&COMPOUND_2)?;
//!     for value in response.values() {
//!         println!("{value}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Wire Format
//!
//! Commands are single ASCII lines with no binary framing:
//!
//! ```text
//! p:SSIIIIIIIIXXVVVVVVVV;VVVVVVVV...<LF>
//! ```
//!
//! `SS` is the 2-hex [`Service`] code, `IIIIIIII` the parameter or compound
//! identifier, `XX` the index (always `00` in this protocol generation) and
//! the `V` groups are 8-hex-digit value tokens. Floats travel as their
//! IEEE-754 bit pattern; see [`value`] for the codec.
//!
//! Responses are free-form ASCII containing value tokens and/or an embedded
//! 2-hex status code. [`Response`] classifies the status codes first and
//! only decodes values on success.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ValveError>`]. Device-reported status
//! codes are *not* errors at the call level: the controller rejecting a
//! value is a normal outcome, returned inside `Ok(Response)` so callers can
//! correct their input and move on. Transport failures and local encoding
//! errors are real `Err` values and are never conflated with device status.
//!
//! ```no_run
//! use vat_valve::{Client, ClientConfig, ValveError, Value};
//! use vat_valve::registry::COMPOUND_1;
//! use std::net::Ipv4Addr;
//!
//! let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10));
//! let mut client = Client::connect(config)?;
//!
//! match client.set_parameter(&COMPOUND_1, "target pressure", Value::Float(250.0)) {
//!     Ok(response) if response.is_success() => println!("accepted"),
//!     Ok(response) => {
//!         for entry in response.errors() {
//!             println!("rejected: {} ({})", entry.message, entry.code);
//!         }
//!     }
//!     Err(ValveError::Timeout) => println!("controller did not answer"),
//!     Err(e) => println!("error: {e}"),
//! }
//! # Ok::<(), ValveError>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for each exchange, `warn`
//! for device-reported errors). Install any subscriber to observe them;
//! without one the crate is silent.
//!
//! ## Design Philosophy
//!
//! 1. Each operation does exactly what it says
//! 2. No magic or implicit behavior
//! 3. The application has full control over retry and polling cadence
//! 4. Errors are always explicit and descriptive

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod client;
mod command;
mod error;
pub mod registry;
mod response;
mod service;
pub mod status;
mod transport;
pub mod value;

// Public re-exports
pub use client::{Client, ClientConfig};
pub use command::{Command, MAX_COMMAND_LEN, TERMINATOR};
pub use error::{Result, ValveError};
pub use registry::{Compound, Parameter};
pub use response::Response;
pub use service::Service;
pub use status::ErrorEntry;
pub use transport::{TcpTransport, Transport, DEFAULT_PORT, DEFAULT_TIMEOUT, MAX_RESPONSE_SIZE};
pub use value::Value;
