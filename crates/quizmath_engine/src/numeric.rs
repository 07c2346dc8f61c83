//! Floating-point comparison with tolerance.

/// Tolerance for numeric comparison. Tight enough that 1/3 vs 0.333
/// (truncation error ~3e-4) is a mismatch.
pub const EPS: f64 = 1e-9;

/// Compare two evaluation results.
///
/// Both NaN is a mismatch (an undefined value proves nothing);
/// non-finite values must match exactly; finite values use a relative
/// tolerance above magnitude 1 and an absolute tolerance below it.
pub fn numbers_equal(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if !a.is_finite() || !b.is_finite() {
        return a == b;
    }
    let scale = a.abs().max(b.abs());
    if scale > 1.0 {
        (a - b).abs() / scale < EPS
    } else {
        (a - b).abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_near() {
        assert!(numbers_equal(0.5, 0.5));
        assert!(numbers_equal(0.1 + 0.2, 0.3));
        assert!(numbers_equal(1.0e12, 1.0e12 * (1.0 + 1.0e-12)));
    }

    #[test]
    fn test_truncation_is_a_mismatch() {
        assert!(!numbers_equal(1.0 / 3.0, 0.333));
    }

    #[test]
    fn test_nan_never_equal() {
        assert!(!numbers_equal(f64::NAN, f64::NAN));
        assert!(!numbers_equal(f64::NAN, 1.0));
    }

    #[test]
    fn test_non_finite_exact() {
        assert!(numbers_equal(f64::INFINITY, f64::INFINITY));
        assert!(!numbers_equal(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!numbers_equal(f64::INFINITY, 1.0e308));
    }

    #[test]
    fn test_small_scale_absolute() {
        assert!(numbers_equal(1.0e-12, 2.0e-12));
        assert!(!numbers_equal(0.001, 0.002));
    }
}
