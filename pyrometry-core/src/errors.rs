//! Error Types for Thermocouple Conversion Failures
//!
//! ## Design Philosophy
//!
//! The error system follows the constraints of embedded measurement loops:
//!
//! 1. **Small Size**: One enum, two variants, all data inline. Errors are
//!    returned from hot sampling paths and may sit in telemetry queues.
//!
//! 2. **No Heap Allocation**: No `String`, no boxing. Deterministic memory
//!    usage on targets without an allocator.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so they can be returned
//!    and stored without move complications.
//!
//! 4. **Attributable Failures**: `OutOfRange` carries the violated bounds,
//!    so a caller can tell a rejected signal voltage from a rejected
//!    ambient temperature without re-deriving context.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use pyrometry_core::{ConversionError, TYPE_S};
//!
//! fn handle_sample(mv: f64, ambient_c: f64) {
//!     match TYPE_S.compensated_c(mv, ambient_c) {
//!         Ok(temp_c) => {
//!             // Reading is valid - proceed with normal processing
//!             // publish(temp_c);
//!         }
//!         Err(ConversionError::OutOfRange { .. }) => {
//!             // Signal or ambient outside the Type S physical range
//!             // discard_sample();
//!         }
//!         Err(ConversionError::InvalidValue) => {
//!             // NaN or infinity - ADC fault or wiring issue
//!             // mark_channel_faulty();
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversionError {
    /// Input outside the supported Type S physical range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The input that failed validation
        value: f64,
        /// Minimum supported value for the violated axis
        min: f64,
        /// Maximum supported value for the violated axis
        max: f64,
    },

    /// Input makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
