//! Degree-space trigonometry with domain checks.
//!
//! The solver algebra works in degrees end to end. These helpers keep the
//! radian conversions in one place and turn out-of-domain arguments into
//! typed errors instead of letting a NaN propagate into a result.

use crate::error::TrajectoryError;

#[inline]
pub(crate) fn sin_deg(angle: f64) -> f64 {
    angle.to_radians().sin()
}

#[inline]
pub(crate) fn cos_deg(angle: f64) -> f64 {
    angle.to_radians().cos()
}

#[inline]
pub(crate) fn atan_deg(ratio: f64) -> f64 {
    ratio.atan().to_degrees()
}

/// Arccosine in degrees. `quantity` names the offending ratio in the error.
pub(crate) fn acos_deg(quantity: &'static str, ratio: f64) -> Result<f64, TrajectoryError> {
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(TrajectoryError::GeometryInfeasible {
            quantity,
            value: ratio,
        });
    }
    Ok(ratio.acos().to_degrees())
}

/// Arcsine in degrees. `quantity` names the offending ratio in the error.
pub(crate) fn asin_deg(quantity: &'static str, ratio: f64) -> Result<f64, TrajectoryError> {
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(TrajectoryError::GeometryInfeasible {
            quantity,
            value: ratio,
        });
    }
    Ok(ratio.asin().to_degrees())
}

/// Square root with negative radicands reported as infeasible geometry.
pub(crate) fn sqrt_checked(quantity: &'static str, value: f64) -> Result<f64, TrajectoryError> {
    if value >= 0.0 {
        Ok(value.sqrt())
    } else {
        Err(TrajectoryError::GeometryInfeasible { quantity, value })
    }
}
