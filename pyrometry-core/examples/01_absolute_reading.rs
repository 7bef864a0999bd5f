//! Absolute Temperature Reading Example
//!
//! This example demonstrates the simplest use case of Pyrometry:
//! converting a 0°C-referenced Type S thermocouple voltage to temperature.
//!
//! ## What You'll Learn
//!
//! - Reading the engine's published validity bounds
//! - Converting millivolt signals to °C and °F
//! - Understanding conversion errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_absolute_reading
//! ```

use pyrometry_core::{ConversionError, TYPE_S};

fn main() {
    println!("Pyrometry Absolute Reading Example");
    println!("==================================\n");

    // Show the engine's validity bounds for pre-flight validation
    let bounds = TYPE_S.bounds();
    println!("Type S validity bounds:");
    println!("  Signal: {} to {} mV", bounds.mv_min, bounds.mv_max);
    println!("  Temperature: {}°C to {}°C", bounds.temp_min_c, bounds.temp_max_c);
    println!("  Temperature: {}°F to {}°F", bounds.temp_min_f, bounds.temp_max_f);
    println!();

    // Test various signal voltages
    println!("Converting signal voltages:\n");

    let test_cases = [
        (0.000, "Reference junction temperature (0°C)"),
        (0.646, "Boiling water region"),
        (9.587, "Kiln at working temperature"),
        (18.693, "Upper end of the Type S range"),
        (-0.300, "Below range (open junction?)"),
        (25.000, "Above range (wrong thermocouple type?)"),
        (f64::NAN, "Invalid value (ADC fault)"),
    ];

    for (mv, description) in &test_cases {
        print!("{:.<50} ", description);

        match TYPE_S.temperature_c(*mv) {
            Ok(temp_c) => {
                let temp_f = TYPE_S.temperature_f(*mv).unwrap();
                println!("✓ {:8.2}°C ({:.2}°F)", temp_c, temp_f);
            }
            Err(e) => {
                println!("✗ REJECTED ({} mV)", mv);
                println!("    Reason: {}", format_error(&e));
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- In-range signals convert in both °C and °F");
    println!("- Out-of-range signals are rejected with the violated bounds");
    println!("- Invalid values (NaN, Inf) are caught before evaluation");
}

fn format_error(error: &ConversionError) -> String {
    match error {
        ConversionError::OutOfRange { value, min, max } => {
            format!("Out of range: {} not in [{}, {}]", value, min, max)
        }
        ConversionError::InvalidValue => "Invalid value (NaN or Infinity)".to_string(),
    }
}
