//! Functions to construct [`f64`]s and [`Complex64`] numbers from various types.

use num_complex::Complex64;

/// Creates a [`Complex64`] with the given real and imaginary parts.
pub fn complex(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Parses a [`f64`] from the text of a number literal, returning [`None`] if the text is not a
/// valid number.
pub fn float_from_str(s: &str) -> Option<f64> {
    s.parse().ok()
}

/// Returns true if the number is finite and has no fractional part.
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literals() {
        assert_eq!(float_from_str("2"), Some(2.0));
        assert_eq!(float_from_str("-0.5"), Some(-0.5));
        assert_eq!(float_from_str(".5"), Some(0.5));
        assert_eq!(float_from_str("1."), Some(1.0));
        assert_eq!(float_from_str("1.2.3"), None);
        assert_eq!(float_from_str("."), None);
    }

    #[test]
    fn integers() {
        assert!(is_integer(3.0));
        assert!(is_integer(-3.0));
        assert!(!is_integer(1.5));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NAN));
    }
}
