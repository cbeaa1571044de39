//! Example: Writing a setpoint compound and reading it back
//!
//! Run with: cargo run --example compound_roundtrip
//!
//! This example demonstrates:
//! - Switching control mode with a volatile SET
//! - Writing the full setpoint compound in one command
//! - Reading back actual values for comparison

use std::net::Ipv4Addr;
use vat_valve::registry::{COMPOUND_1, COMPOUND_2};
use vat_valve::{Client, ClientConfig, Value};

fn main() -> vat_valve::Result<()> {
    tracing_subscriber::fmt().init();

    let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10));
    let mut client = Client::connect(config)?;

    // =========================================================================
    // Volatile single SET
    // =========================================================================

    // Control mode 4 = position control. Volatile: the mode is rewritten
    // on every run, no need to wear the NV memory.
    let response = client.set_parameter_volatile(&COMPOUND_1, "control mode", Value::Int(4))?;
    response.check_errors()?;
    println!("control mode accepted");

    // =========================================================================
    // Full setpoint compound
    // =========================================================================

    // One value per member, placeholder slot included.
    let setpoints = [
        Value::Int(4),        // Control Mode
        Value::Float(50.0),   // Target Position (%)
        Value::Float(120.0),  // Target Pressure
        Value::Int(0),        // Not Used
    ];
    let response = client.set_compound(&COMPOUND_1, &setpoints)?;
    if !response.is_success() {
        for entry in response.errors() {
            eprintln!("setpoint rejected: {} (code {})", entry.message, entry.code);
        }
        return response.check_errors();
    }

    // =========================================================================
    // Readback
    // =========================================================================

    let response = client.get_compound(&COMPOUND_2)?;
    for (member, value) in COMPOUND_2.members.iter().zip(response.values()) {
        println!("{:22} = {}", member.name, value);
    }

    Ok(())
}
