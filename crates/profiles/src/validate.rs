//! Shared input validation for the profile solvers.

use crate::error::TrajectoryError;

pub(crate) fn require_positive(
    parameter: &'static str,
    value: f64,
) -> Result<(), TrajectoryError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(TrajectoryError::InvalidInput {
        parameter,
        value,
        requirement: "must be a positive finite number",
    })
}

pub(crate) fn require_non_negative(
    parameter: &'static str,
    value: f64,
) -> Result<(), TrajectoryError> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(TrajectoryError::InvalidInput {
        parameter,
        value,
        requirement: "must be a non-negative finite number",
    })
}

/// The target depth must sit strictly below the kick-off point.
pub(crate) fn require_below_kickoff(tvd: f64, kop: f64) -> Result<(), TrajectoryError> {
    if tvd.is_finite() && tvd > kop {
        return Ok(());
    }
    Err(TrajectoryError::InvalidInput {
        parameter: "tvd",
        value: tvd,
        requirement: "must be finite and exceed the kick-off depth",
    })
}

/// Inclinations must land in [0, 180) degrees; anything else means the
/// parameter combination cannot be drilled.
///
/// Round-off can push an exactly vertical solution a few ulps below zero;
/// such values snap to vertical instead of being rejected.
pub(crate) fn inclination_in_range(theta: f64) -> Result<f64, TrajectoryError> {
    if (-1e-9..0.0).contains(&theta) {
        return Ok(0.0);
    }
    if (0.0..180.0).contains(&theta) {
        return Ok(theta);
    }
    Err(TrajectoryError::GeometryInfeasible {
        quantity: "inclination",
        value: theta,
    })
}
