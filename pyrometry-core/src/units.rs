//! Temperature unit conversion helpers
//!
//! Only the fixed linear Celsius/Fahrenheit transform the conversion engine
//! needs. These are pure `const fn`s so derived bounds can be computed at
//! compile time.

/// Convert degrees Celsius to degrees Fahrenheit.
pub const fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius.
pub const fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
    }

    #[test]
    fn transforms_invert() {
        for c in [-50.0, -17.5, 0.0, 25.0, 1064.18, 1768.1] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!((back - c).abs() < 1e-9);
        }
    }
}
