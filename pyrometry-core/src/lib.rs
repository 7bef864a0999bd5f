//! ITS-90 conversion engine for Pyrometry
//!
//! Converts between thermoelectric voltage and temperature for Type S
//! (Platinum / Platinum-Rhodium) thermocouples, with cold-junction
//! compensation. Designed for edge measurement devices.
//!
//! Key constraints:
//! - No heap allocation, no_std capable
//! - Pure functions over constant ITS-90 tables
//! - Attributable range errors, no sentinel magic numbers
//!
//! ```no_run
//! use pyrometry_core::TYPE_S;
//!
//! // Raw ADC signal in millivolts, board temperature from a local sensor
//! match TYPE_S.compensated_c(9.44, 25.0) {
//!     Ok(tip_c) => {}, // Absolute tip temperature in °C
//!     Err(e) => {},    // Signal or ambient outside the Type S range
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod conversion;
pub mod errors;
pub mod units;

// Public API
pub use conversion::{ConversionBounds, TypeS, TYPE_S};
pub use errors::{ConversionError, ConversionResult};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
