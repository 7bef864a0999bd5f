//! ITS-90 Coefficient Tables for Type S Thermocouples
//!
//! The International Temperature Scale of 1990 defines the Type S
//! (Platinum / Platinum-13%-Rhodium) voltage-temperature relationship as a
//! set of piecewise polynomials. This module carries the published
//! coefficients verbatim, in both directions:
//!
//! - **Inverse**: given a thermoelectric voltage in millivolts, compute the
//!   junction temperature in degrees Celsius. Four voltage segments, ten
//!   coefficient terms each.
//! - **Direct**: given a junction temperature in degrees Celsius, compute
//!   the thermoelectric voltage in millivolts. Three temperature segments;
//!   the first is a degree-8 polynomial, the other two are degree-4.
//!
//! Coefficient magnitudes span roughly 1e-23 to 1e+4, which is why every
//! evaluation accumulates in `f64` regardless of the caller's precision.
//!
//! Source: NIST Monograph 175, ITS-90 thermocouple reference tables, Type S.

// ===== VALIDITY BOUNDS =====

/// Minimum supported thermoelectric voltage (mV).
///
/// Corresponds to the cold end of the Type S range (-50°C).
/// Readings below this indicate an open junction or reversed leads.
///
/// Source: NIST Monograph 175, Type S inverse table
pub const MV_MIN: f64 = -0.235;

/// Maximum supported thermoelectric voltage (mV).
///
/// Corresponds to the hot end of the Type S range (1768.1°C, the freezing
/// point of platinum).
///
/// Source: NIST Monograph 175, Type S inverse table
pub const MV_MAX: f64 = 18.693;

/// Minimum supported junction temperature (°C).
///
/// Type S output flattens below -50°C and the ITS-90 fit is not published
/// past this point.
///
/// Source: NIST Monograph 175, Type S direct table
pub const TEMP_MIN_C: f64 = -50.0;

/// Maximum supported junction temperature (°C).
///
/// Freezing point of platinum, the defined upper end of the Type S scale.
///
/// Source: NIST Monograph 175, Type S direct table
pub const TEMP_MAX_C: f64 = 1768.1;

// ===== INVERSE LOOKUP (mV -> °C) =====

/// Number of voltage segments in the inverse fit.
pub const INVERSE_SEGMENT_COUNT: usize = 4;

/// Number of coefficient terms per inverse segment.
pub const INVERSE_TERM_COUNT: usize = 10;

/// Inclusive (low, high) millivolt bounds per inverse segment.
///
/// Segments 1 and 2 overlap on 10.332..11.950 mV; the published fits were
/// produced over overlapping windows. Segment selection takes the last
/// matching segment, so the overlap resolves to segment 2.
pub const INVERSE_SEGMENTS: [(f64, f64); INVERSE_SEGMENT_COUNT] = [
    (-0.235, 1.874),  // -50°C to 250°C
    (1.874, 11.950),  // 250°C to 1200°C
    (10.332, 17.536), // 1064°C to 1664.5°C
    (17.536, 18.693), // 1664.5°C to 1768.1°C
];

/// Inverse polynomial coefficients, degree-major.
///
/// `INVERSE_COEFFS[i][j]` is the degree-`i` coefficient for segment `j`,
/// matching the row/column layout of the published NIST table.
pub const INVERSE_COEFFS: [[f64; INVERSE_SEGMENT_COUNT]; INVERSE_TERM_COUNT] = [
    [0.00000000E+00, 1.291507177E+01, -8.087801117E+01, 5.333875126E+04],
    [1.84949460E+02, 1.466298863E+02, 1.621573104E+02, -1.235892298E+04],
    [-8.00504062E+01, -1.534713402E+01, -8.536869453E+00, 1.092657613E+03],
    [1.02237430E+02, 3.145945973E+00, 4.719686976E-01, -4.265693686E+01],
    [-1.52248592E+02, -4.163257839E-01, -1.441693666E-02, 6.247205420E-01],
    [1.88821343E+02, 3.187963771E-02, 2.081618890E-04, 0.000000000E+00],
    [-1.59085941E+02, -1.291637500E-03, 0.000000000E+00, 0.000000000E+00],
    [8.23027880E+01, 2.183475087E-05, 0.000000000E+00, 0.000000000E+00],
    [-2.34181944E+01, -1.447379511E-07, 0.000000000E+00, 0.000000000E+00],
    [2.79786260E+00, 8.211272125E-09, 0.000000000E+00, 0.000000000E+00],
];

// ===== DIRECT LOOKUP (°C -> mV) =====

/// Number of temperature segments in the direct fit.
pub const DIRECT_SEGMENT_COUNT: usize = 3;

/// Maximum number of coefficient terms per direct segment.
pub const DIRECT_TERM_COUNT: usize = 9;

/// Inclusive (low, high) Celsius bounds per direct segment.
pub const DIRECT_SEGMENTS: [(f64, f64); DIRECT_SEGMENT_COUNT] = [
    (-50.0, 1064.18),   // up to the freezing point of gold
    (1064.18, 1664.5),
    (1664.5, 1768.1),
];

/// Published polynomial term count per direct segment.
///
/// The first segment is a degree-8 fit; the upper two segments are degree-4.
/// The zero entries above degree 4 in [`DIRECT_COEFFS`] columns 1 and 2 are
/// padding, not part of the standard, and must not be summed.
pub const DIRECT_SEGMENT_TERMS: [usize; DIRECT_SEGMENT_COUNT] = [9, 5, 5];

/// Direct polynomial coefficients, degree-major.
///
/// `DIRECT_COEFFS[i][j]` is the degree-`i` coefficient for segment `j`.
pub const DIRECT_COEFFS: [[f64; DIRECT_SEGMENT_COUNT]; DIRECT_TERM_COUNT] = [
    [0.000000000000E+00, 0.132900444085E+01, 0.146628232636E+03],
    [0.540313308631E-02, 0.334509311344E-02, -0.258430516752E+00],
    [0.125934289740E-04, 0.654805192818E-05, 0.163693574641E-03],
    [-0.232477968689E-07, -0.164856259209E-08, -0.330439046987E-07],
    [0.322028823036E-10, 0.129989605174E-13, -0.943223690612E-14],
    [-0.331465196389E-13, 0.000000000000E+00, 0.000000000000E+00],
    [0.255744251786E-16, 0.000000000000E+00, 0.000000000000E+00],
    [-0.125068871393E-19, 0.000000000000E+00, 0.000000000000E+00],
    [0.271443176145E-23, 0.000000000000E+00, 0.000000000000E+00],
];
