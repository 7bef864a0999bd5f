//! Constants for Pyrometry Core
//!
//! Centralized, documented constant data used by the conversion engine.
//! All numeric values are defined here with their purpose and source.
//!
//! ## Organization
//!
//! - **Type S**: ITS-90 polynomial coefficient tables, segment ranges and
//!   validity bounds for the Platinum / Platinum-Rhodium (Type S) sensor pair
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding constants, reference the standard or datasheet they come from
//! 3. Use descriptive names that include units

/// ITS-90 coefficient tables and validity ranges for Type S thermocouples.
pub mod type_s;

// Re-export the validity bounds for convenience
pub use type_s::{MV_MAX, MV_MIN, TEMP_MAX_C, TEMP_MIN_C};
