//! Example: Reading valve state over Ethernet
//!
//! Run with: cargo run --example get_position
//!
//! This example demonstrates:
//! - Connecting to a controller
//! - Reading single parameters by partial name
//! - Reading the full readback compound in one round trip
//! - Handling a device-reported rejection

use std::net::Ipv4Addr;
use vat_valve::registry::COMPOUND_2;
use vat_valve::{Client, ClientConfig};

fn main() -> vat_valve::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // =========================================================================
    // Connect to the controller
    // =========================================================================

    let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10));
    let mut client = Client::connect(config)?;

    // =========================================================================
    // Single parameter reads
    // =========================================================================

    println!("=== Single Parameters ===\n");

    // Partial names are enough: "actual position" matches the
    // "Actual Position" member of the readback compound.
    let response = client.get_parameter(&COMPOUND_2, "actual position")?;
    println!("Actual Position: {}", response.single_value()?);

    let response = client.get_parameter(&COMPOUND_2, "actual pressure")?;
    println!("Actual Pressure: {}", response.single_value()?);

    let response = client.get_parameter(&COMPOUND_2, "warning")?;
    println!("Warning Bitmap:  {}", response.single_value()?);

    // =========================================================================
    // Full compound read
    // =========================================================================

    println!("\n=== Readback Compound ===\n");

    let response = client.get_compound(&COMPOUND_2)?;
    if response.is_success() {
        for (member, value) in COMPOUND_2.members.iter().zip(response.values()) {
            println!("{:22} = {}", member.name, value);
        }
    } else {
        // A rejection by the controller is data, not a client failure.
        for entry in response.errors() {
            println!("controller rejected: {} (code {})", entry.message, entry.code);
        }
    }

    println!("\nRead example completed!");
    Ok(())
}
