use crate::{TkError, TkResult};

/// Volumes, rates and multipliers.
pub type Real = f64;

/// Level band around empty and full, in volume units.
pub const LEVEL_EPSILON: Real = 0.1;

/// Default tank capacity, in volume units.
pub const DEFAULT_CAPACITY: Real = 100.0;

/// Default liquid moved along one edge per tick.
pub const DEFAULT_BASE_RATE: Real = 0.8;

/// Default tick period in milliseconds.
pub const DEFAULT_TICK_PERIOD_MS: u64 = 20;

/// Flow multiplier bounds.
pub const MULTIPLIER_MIN: Real = 0.1;
pub const MULTIPLIER_MAX: Real = 2.0;
pub const MULTIPLIER_DEFAULT: Real = 1.0;

/// Accept `v` only if it is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> TkResult<Real> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(TkError::NotPositive { what, value: v })
    }
}

/// Coerce an amount into a usable non-negative quantity.
///
/// NaN, infinities and negatives collapse to zero.
pub fn non_negative(v: Real) -> Real {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Clamp a flow multiplier into `[MULTIPLIER_MIN, MULTIPLIER_MAX]`.
///
/// Non-finite input falls back to the default multiplier.
pub fn clamp_multiplier(v: Real) -> Real {
    if v.is_finite() {
        v.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX)
    } else {
        MULTIPLIER_DEFAULT
    }
}

/// Map an integer slider position (10..=200) to a multiplier.
pub fn multiplier_from_percent(percent: i32) -> Real {
    clamp_multiplier(percent as Real / 100.0)
}

/// Inverse of [`multiplier_from_percent`], rounded to the nearest step.
pub fn percent_from_multiplier(multiplier: Real) -> i32 {
    (clamp_multiplier(multiplier) * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_positive_rejects_zero_and_nan() {
        assert_eq!(ensure_positive(0.8, "rate"), Ok(0.8));
        let err = ensure_positive(0.0, "rate").unwrap_err();
        assert!(err.to_string().contains("rate must be positive"));
        assert!(ensure_positive(Real::NAN, "rate").is_err());
        assert!(ensure_positive(-1.0, "rate").is_err());
    }

    #[test]
    fn non_negative_collapses_garbage() {
        assert_eq!(non_negative(-1.0), 0.0);
        assert_eq!(non_negative(Real::NAN), 0.0);
        assert_eq!(non_negative(Real::INFINITY), 0.0);
        assert_eq!(non_negative(0.8), 0.8);
    }

    #[test]
    fn multiplier_slider_mapping() {
        assert_eq!(multiplier_from_percent(100), 1.0);
        assert_eq!(multiplier_from_percent(10), 0.1);
        assert_eq!(multiplier_from_percent(200), 2.0);
        assert_eq!(multiplier_from_percent(5), MULTIPLIER_MIN);
        assert_eq!(multiplier_from_percent(500), MULTIPLIER_MAX);
        assert_eq!(percent_from_multiplier(1.35), 135);
    }

    #[test]
    fn clamp_multiplier_handles_nan() {
        assert_eq!(clamp_multiplier(Real::NAN), MULTIPLIER_DEFAULT);
        assert_eq!(clamp_multiplier(3.0), MULTIPLIER_MAX);
    }
}
