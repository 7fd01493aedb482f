//! Common parameter checks for device models.

use crate::error::{ComponentError, ComponentResult};
use cm_core::numeric::ensure_positive;

/// Check a geometry parameter: finite and strictly positive.
///
/// Geometry is validated once, at construction.
pub fn check_geometry(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_positive(value, what).map_err(|_| ComponentError::InvalidGeometry { what, value })
}

/// Check a stimulus sample: must be finite. Any finite value (including
/// negative) is a valid stimulus.
pub fn check_stimulus(value: f64, what: &'static str) -> ComponentResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComponentError::InvalidStimulus { what, value })
    }
}

/// Check a model parameter: must be finite.
pub fn check_param(value: f64, what: &'static str) -> ComponentResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComponentError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_rejects_nonpositive() {
        assert!(check_geometry(1.0, "test").is_ok());
        assert!(check_geometry(0.0, "test").is_err());
        assert!(check_geometry(-0.01, "test").is_err());
        assert!(check_geometry(f64::NAN, "test").is_err());
    }

    #[test]
    fn stimulus_accepts_negative() {
        assert_eq!(check_stimulus(-300.0, "test").unwrap(), -300.0);
        assert!(check_stimulus(f64::INFINITY, "test").is_err());
        assert!(check_stimulus(f64::NAN, "test").is_err());
    }

    #[test]
    fn param_requires_finite() {
        assert!(check_param(0.99, "test").is_ok());
        assert!(check_param(f64::NEG_INFINITY, "test").is_err());
    }
}
