//! ITS-90 Segmented Polynomial Conversion for Type S Thermocouples
//!
//! ## Physics Background
//!
//! A thermocouple does not measure temperature. It produces a voltage
//! proportional to the temperature *difference* between its measuring tip
//! and its reference (cold) junction. ITS-90 publishes the tip-referenced
//! relationship assuming the reference junction sits at 0°C, as piecewise
//! polynomials in both directions:
//!
//! ```text
//! T(E) = sum( c_i * E^i )   inverse lookup, E in mV, T in °C
//! E(T) = sum( d_i * T^i )   direct lookup
//! ```
//!
//! Real reference junctions sit at board temperature, not 0°C. Compensation
//! recovers the absolute tip voltage by adding the reference junction's
//! equivalent voltage before the inverse lookup:
//!
//! ```text
//! T_tip = T( E_measured + E(T_ambient) )
//! ```
//!
//! ## Segment Selection
//!
//! Both directions are piecewise fits. The inverse table scans all four
//! voltage segments and keeps the *last* one whose inclusive bounds contain
//! the input; two of the published segments overlap and the later fit wins
//! in the overlap. The direct table checks its three temperature bands low
//! to high and keeps the *first* match. Both orders are part of the
//! published table semantics and are pinned by tests.
//!
//! ## Numeric Behavior
//!
//! Coefficients span ~27 orders of magnitude, so evaluation accumulates in
//! `f64` with a running power term (x, x², ...) rather than recomputing
//! powers per term. Every operation is a pure function over constant
//! tables; the only instance state is the pair of Fahrenheit bounds derived
//! at construction.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

use crate::{
    constants::type_s::{
        DIRECT_COEFFS, DIRECT_SEGMENTS, DIRECT_SEGMENT_COUNT, DIRECT_SEGMENT_TERMS,
        INVERSE_COEFFS, INVERSE_SEGMENTS, MV_MAX, MV_MIN, TEMP_MAX_C, TEMP_MIN_C,
    },
    errors::{ConversionError, ConversionResult},
    units::{celsius_to_fahrenheit, fahrenheit_to_celsius},
};

/// Published validity bounds for a converter, queryable for pre-flight checks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionBounds {
    /// Minimum supported signal voltage (mV)
    pub mv_min: f64,
    /// Maximum supported signal voltage (mV)
    pub mv_max: f64,
    /// Minimum supported temperature (°C)
    pub temp_min_c: f64,
    /// Maximum supported temperature (°C)
    pub temp_max_c: f64,
    /// Minimum supported temperature (°F), derived from the Celsius bound
    pub temp_min_f: f64,
    /// Maximum supported temperature (°F), derived from the Celsius bound
    pub temp_max_f: f64,
}

/// Type S (Platinum / Platinum-Rhodium) conversion engine
///
/// Stateless apart from the Fahrenheit bounds derived once at construction.
/// Safe to share freely across threads and interrupt contexts.
#[derive(Debug, Clone)]
pub struct TypeS {
    /// Minimum supported temperature in °F, derived from [`TEMP_MIN_C`]
    temp_min_f: f64,

    /// Maximum supported temperature in °F, derived from [`TEMP_MAX_C`]
    temp_max_f: f64,
}

/// Ready-to-use Type S converter instance
pub const TYPE_S: TypeS = TypeS::new();

impl Default for TypeS {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeS {
    /// Create a converter, deriving the Fahrenheit bounds from the Celsius ones
    pub const fn new() -> Self {
        Self {
            temp_min_f: celsius_to_fahrenheit(TEMP_MIN_C),
            temp_max_f: celsius_to_fahrenheit(TEMP_MAX_C),
        }
    }

    /// Absolute junction temperature in °C for a 0°C-referenced signal
    ///
    /// `mv` must already include cold-junction compensation (or the
    /// reference junction must genuinely sit at 0°C); use
    /// [`compensated_c`](Self::compensated_c) otherwise. The output is the
    /// raw polynomial value and is not re-validated.
    pub fn temperature_c(&self, mv: f64) -> ConversionResult<f64> {
        if !mv.is_finite() {
            return Err(ConversionError::InvalidValue);
        }
        if !self.mv_in_range(mv) {
            log_warn!(
                "Inverse lookup rejected: {} mV outside [{}, {}]",
                mv, MV_MIN, MV_MAX
            );
            return Err(ConversionError::OutOfRange {
                value: mv,
                min: MV_MIN,
                max: MV_MAX,
            });
        }

        // Last matching segment wins; segments 1 and 2 overlap and the
        // later fit is the published one for the overlap window.
        let mut seg = 0;
        for (j, &(lo, hi)) in INVERSE_SEGMENTS.iter().enumerate() {
            if mv >= lo && mv <= hi {
                seg = j;
            }
        }

        Ok(evaluate(&INVERSE_COEFFS, seg, INVERSE_COEFFS.len(), mv))
    }

    /// Absolute junction temperature in °F for a 0°C-referenced signal
    ///
    /// Errors from the underlying Celsius lookup pass through unconverted.
    pub fn temperature_f(&self, mv: f64) -> ConversionResult<f64> {
        self.temperature_c(mv).map(celsius_to_fahrenheit)
    }

    /// Equivalent thermoelectric voltage of a junction at `ambient_c`
    ///
    /// This is the direct lookup, used for cold-junction compensation: it
    /// answers "what would a Type S tip at the reference junction's
    /// temperature produce against a 0°C reference".
    pub fn cold_junction_mv(&self, ambient_c: f64) -> ConversionResult<f64> {
        if !ambient_c.is_finite() {
            return Err(ConversionError::InvalidValue);
        }
        if !self.celsius_in_range(ambient_c) {
            log_warn!(
                "Direct lookup rejected: {} °C outside [{}, {}]",
                ambient_c, TEMP_MIN_C, TEMP_MAX_C
            );
            return Err(ConversionError::OutOfRange {
                value: ambient_c,
                min: TEMP_MIN_C,
                max: TEMP_MAX_C,
            });
        }

        // First matching band wins. The bands share boundary values, so a
        // shared boundary evaluates with the lower band's fit.
        let mut seg = DIRECT_SEGMENT_COUNT - 1;
        for (j, &(lo, hi)) in DIRECT_SEGMENTS.iter().enumerate() {
            if ambient_c >= lo && ambient_c <= hi {
                seg = j;
                break;
            }
        }

        Ok(evaluate(
            &DIRECT_COEFFS,
            seg,
            DIRECT_SEGMENT_TERMS[seg],
            ambient_c,
        ))
    }

    /// Equivalent thermoelectric voltage for an ambient given in °F
    ///
    /// Validates against the derived Fahrenheit bounds before converting,
    /// so an out-of-range ambient is reported with the Fahrenheit bounds it
    /// violated rather than the converted Celsius ones.
    pub fn cold_junction_mv_from_f(&self, ambient_f: f64) -> ConversionResult<f64> {
        if !ambient_f.is_finite() {
            return Err(ConversionError::InvalidValue);
        }
        if !self.fahrenheit_in_range(ambient_f) {
            return Err(ConversionError::OutOfRange {
                value: ambient_f,
                min: self.temp_min_f,
                max: self.temp_max_f,
            });
        }
        self.cold_junction_mv(fahrenheit_to_celsius(ambient_f))
    }

    /// Cold-junction compensated tip temperature in °C
    ///
    /// Adds the reference junction's equivalent voltage to the measured
    /// signal, then runs the inverse lookup on the sum. An out-of-range
    /// ambient fails here with the temperature bounds attached instead of
    /// leaking an error value into the voltage sum.
    pub fn compensated_c(&self, mv: f64, ambient_c: f64) -> ConversionResult<f64> {
        let mv_ambient = self.cold_junction_mv(ambient_c)?;
        self.temperature_c(mv + mv_ambient)
    }

    /// Cold-junction compensated tip temperature in °F
    pub fn compensated_f(&self, mv: f64, ambient_f: f64) -> ConversionResult<f64> {
        self.compensated_c(mv, fahrenheit_to_celsius(ambient_f))
            .map(celsius_to_fahrenheit)
    }

    /// Check a signal voltage against the supported mV range, inclusive
    pub fn mv_in_range(&self, mv: f64) -> bool {
        mv >= MV_MIN && mv <= MV_MAX
    }

    /// Check a temperature against the supported °C range, inclusive
    pub fn celsius_in_range(&self, temp_c: f64) -> bool {
        temp_c >= TEMP_MIN_C && temp_c <= TEMP_MAX_C
    }

    /// Check a temperature against the derived °F range, inclusive
    pub fn fahrenheit_in_range(&self, temp_f: f64) -> bool {
        temp_f >= self.temp_min_f && temp_f <= self.temp_max_f
    }

    /// Minimum supported temperature in °F
    pub const fn temp_min_f(&self) -> f64 {
        self.temp_min_f
    }

    /// Maximum supported temperature in °F
    pub const fn temp_max_f(&self) -> f64 {
        self.temp_max_f
    }

    /// Published validity bounds for pre-flight validation
    pub const fn bounds(&self) -> ConversionBounds {
        ConversionBounds {
            mv_min: MV_MIN,
            mv_max: MV_MAX,
            temp_min_c: TEMP_MIN_C,
            temp_max_c: TEMP_MAX_C,
            temp_min_f: self.temp_min_f,
            temp_max_f: self.temp_max_f,
        }
    }
}

/// Evaluate `terms` coefficients of one table column by ascending powers
///
/// Maintains a running power accumulator instead of recomputing `x^i` per
/// term, which keeps rounding behavior stable across the wide coefficient
/// magnitudes of the ITS-90 tables.
fn evaluate<const SEGS: usize>(
    coeffs: &[[f64; SEGS]],
    seg: usize,
    terms: usize,
    x: f64,
) -> f64 {
    let mut sum = 0.0;
    let mut power = 1.0;
    for row in &coeffs[..terms] {
        sum += power * row[seg];
        power *= x;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_reference_is_zero() {
        assert_eq!(TYPE_S.temperature_c(0.0).unwrap(), 0.0);
        assert_eq!(TYPE_S.cold_junction_mv(0.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_signal() {
        let below = TYPE_S.temperature_c(-0.3);
        assert_eq!(
            below,
            Err(ConversionError::OutOfRange {
                value: -0.3,
                min: MV_MIN,
                max: MV_MAX,
            })
        );
        assert!(TYPE_S.temperature_c(18.7).is_err());
    }

    #[test]
    fn rejects_out_of_range_ambient() {
        let result = TYPE_S.cold_junction_mv(1768.2);
        assert_eq!(
            result,
            Err(ConversionError::OutOfRange {
                value: 1768.2,
                min: TEMP_MIN_C,
                max: TEMP_MAX_C,
            })
        );
        assert!(TYPE_S.cold_junction_mv(-50.1).is_err());
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert_eq!(
            TYPE_S.temperature_c(f64::NAN),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(
            TYPE_S.cold_junction_mv(f64::INFINITY),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(
            TYPE_S.cold_junction_mv_from_f(f64::NEG_INFINITY),
            Err(ConversionError::InvalidValue)
        );
    }

    #[test]
    fn inverse_segment_boundaries_convert() {
        for &(lo, hi) in INVERSE_SEGMENTS.iter() {
            assert!(TYPE_S.temperature_c(lo).unwrap().is_finite());
            assert!(TYPE_S.temperature_c(hi).unwrap().is_finite());
        }
    }

    #[test]
    fn inverse_overlap_uses_later_segment() {
        // 1.874 mV sits on the segment 0 / segment 1 boundary. Segment 1's
        // fit gives 250.05449; segment 0's would give 250.05637.
        let t = TYPE_S.temperature_c(1.874).unwrap();
        assert!((t - 250.05448997972732).abs() < 1e-9);

        // 17.536 mV sits on the segment 2 / segment 3 boundary.
        let t = TYPE_S.temperature_c(17.536).unwrap();
        assert!((t - 1664.504789519182).abs() < 1e-9);
    }

    #[test]
    fn direct_boundary_uses_lower_band() {
        // 1064.18°C is shared between bands 0 and 1; band 0's nine-term
        // fit applies.
        let mv = TYPE_S.cold_junction_mv(1064.18).unwrap();
        assert!((mv - 10.33420438891481).abs() < 1e-12);

        // 1664.5°C is shared between bands 1 and 2; band 1 applies.
        let mv = TYPE_S.cold_junction_mv(1664.5).unwrap();
        assert!((mv - 17.5359572017049).abs() < 1e-12);
    }

    #[test]
    fn cold_junction_at_room_temperature() {
        let mv = TYPE_S.cold_junction_mv(25.0).unwrap();
        assert!((mv - 0.1425982351626768).abs() < 1e-12);
    }

    #[test]
    fn compensation_recovers_tip_temperature() {
        // Tip at 1000°C, board at 25°C: the ADC sees E(1000) - E(25).
        let measured = 9.587097656860006 - 0.1425982351626768;
        let tip = TYPE_S.compensated_c(measured, 25.0).unwrap();
        assert!((tip - 1000.0).abs() < 0.05);
    }

    #[test]
    fn compensation_fails_fast_on_bad_ambient() {
        // The ambient rejection carries the temperature bounds, so the
        // failure is attributable to the ambient input and never reaches
        // the voltage sum.
        let result = TYPE_S.compensated_c(5.0, -100.0);
        assert_eq!(
            result,
            Err(ConversionError::OutOfRange {
                value: -100.0,
                min: TEMP_MIN_C,
                max: TEMP_MAX_C,
            })
        );
    }

    #[test]
    fn fahrenheit_wrapper_matches_celsius_lookup() {
        let c = TYPE_S.temperature_c(9.587).unwrap();
        let f = TYPE_S.temperature_f(9.587).unwrap();
        assert_eq!(f, celsius_to_fahrenheit(c));
    }

    #[test]
    fn fahrenheit_wrapper_passes_errors_through() {
        // The error carries the mV bounds untouched, never a converted value.
        assert_eq!(
            TYPE_S.temperature_f(20.0),
            Err(ConversionError::OutOfRange {
                value: 20.0,
                min: MV_MIN,
                max: MV_MAX,
            })
        );
    }

    #[test]
    fn compensated_fahrenheit_round_trip() {
        let measured = 9.587097656860006 - 0.1425982351626768;
        let tip_f = TYPE_S.compensated_f(measured, 77.0).unwrap();
        assert!((tip_f - celsius_to_fahrenheit(1000.0)).abs() < 0.1);
    }

    #[test]
    fn fahrenheit_ambient_checked_against_derived_bounds() {
        let result = TYPE_S.cold_junction_mv_from_f(3300.0);
        assert_eq!(
            result,
            Err(ConversionError::OutOfRange {
                value: 3300.0,
                min: TYPE_S.temp_min_f(),
                max: TYPE_S.temp_max_f(),
            })
        );

        // 77°F is 25°C; the in-range path delegates to the Celsius lookup.
        let mv = TYPE_S.cold_junction_mv_from_f(77.0).unwrap();
        assert!((mv - 0.1425982351626768).abs() < 1e-12);
    }

    #[test]
    fn derived_bounds_match_linear_transform() {
        let converter = TypeS::new();
        assert_eq!(converter.temp_min_f(), celsius_to_fahrenheit(TEMP_MIN_C));
        assert_eq!(converter.temp_max_f(), celsius_to_fahrenheit(TEMP_MAX_C));
        assert_eq!(converter.temp_min_f(), -58.0);
        assert!((converter.temp_max_f() - 3214.58).abs() < 1e-9);
    }

    #[test]
    fn range_predicates_are_inclusive() {
        assert!(TYPE_S.mv_in_range(MV_MIN));
        assert!(TYPE_S.mv_in_range(MV_MAX));
        assert!(!TYPE_S.mv_in_range(MV_MAX + 1e-6));

        assert!(TYPE_S.celsius_in_range(TEMP_MIN_C));
        assert!(TYPE_S.celsius_in_range(TEMP_MAX_C));
        assert!(!TYPE_S.celsius_in_range(TEMP_MIN_C - 1e-6));

        assert!(TYPE_S.fahrenheit_in_range(-58.0));
        assert!(!TYPE_S.fahrenheit_in_range(-58.1));
    }

    #[test]
    fn bounds_report_is_consistent() {
        let bounds = TYPE_S.bounds();
        assert_eq!(bounds.mv_min, MV_MIN);
        assert_eq!(bounds.mv_max, MV_MAX);
        assert_eq!(bounds.temp_min_f, celsius_to_fahrenheit(bounds.temp_min_c));
        assert_eq!(bounds.temp_max_f, celsius_to_fahrenheit(bounds.temp_max_c));
    }
}
