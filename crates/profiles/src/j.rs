//! Build-and-hold (J-type) profile solver.
//!
//! A J-well holds vertical to the kick-off point, builds angle at a constant
//! rate, then holds the reached inclination on a straight tangent that ends
//! at the target. All angles are in degrees.

use wellpath_units::UnitSystem;

use crate::error::TrajectoryError;
use crate::trig::{acos_deg, atan_deg, cos_deg, sin_deg, sqrt_checked};
use crate::validate::{
    inclination_in_range, require_below_kickoff, require_non_negative, require_positive,
};

/// Input parameters for a build-and-hold well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JProfile {
    /// Target true vertical depth.
    pub tvd: f64,
    /// Kick-off point depth.
    pub kop: f64,
    /// Build-up rate in degrees per rate basis (100 ft or 30 m).
    pub build_rate: f64,
    /// Target horizontal displacement at total depth.
    pub displacement: f64,
}

/// Transition-point geometry derived for a build-and-hold well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JTrajectory {
    /// Radius of curvature of the build section.
    pub radius: f64,
    /// Inclination held after the build, in degrees.
    pub inclination_deg: f64,
    /// True vertical depth at the end of build.
    pub tvd_eob: f64,
    /// Measured depth at the end of build.
    pub md_eob: f64,
    /// Horizontal displacement at the end of build.
    pub displacement_eob: f64,
    /// Straight hold distance from the end of build to the target.
    pub tangent_length: f64,
    /// Total measured depth at the target.
    pub md_total: f64,
}

/// Solve the build-and-hold geometry in the requested unit system.
pub fn solve(profile: &JProfile, units: UnitSystem) -> Result<JTrajectory, TrajectoryError> {
    require_non_negative("kop", profile.kop)?;
    require_below_kickoff(profile.tvd, profile.kop)?;
    require_positive("build_rate", profile.build_rate)?;
    require_non_negative("displacement", profile.displacement)?;

    let radius = units.radius_factor() / profile.build_rate;

    // Horizontal offset between the target and the centre of the build arc.
    // A displacement equal to the radius puts the centre directly above the
    // target and the offset collapses to zero.
    let centre_offset = if profile.displacement > radius {
        profile.displacement - radius
    } else if profile.displacement < radius {
        radius - profile.displacement
    } else {
        0.0
    };
    let vertical_span = profile.tvd - profile.kop;

    // Tilt of the centre-to-target line from vertical, and the angle between
    // that line and the radius drawn to the tangency point.
    let target_tilt = atan_deg(centre_offset / vertical_span);
    let centre_to_target = sqrt_checked(
        "centre_offset^2 + vertical_span^2",
        centre_offset * centre_offset + vertical_span * vertical_span,
    )?;
    let tangent_angle = acos_deg("radius / centre_to_target", radius / centre_to_target)?;

    // Tilt of the tangency radius from vertical. The target tilt rotates it
    // toward the target when the target lies beyond the arc and away from it
    // when the target lies inside.
    let radius_tilt = if radius < profile.displacement {
        tangent_angle - target_tilt
    } else if radius > profile.displacement {
        tangent_angle + target_tilt
    } else {
        tangent_angle
    };
    let inclination = inclination_in_range(90.0 - radius_tilt)?;

    let tvd_eob = profile.kop + radius * sin_deg(inclination);
    let md_eob = profile.kop + (inclination / profile.build_rate) * units.depth_per_degree();
    let displacement_eob = radius - radius * cos_deg(inclination);
    let tangent_length = sqrt_checked(
        "centre_to_target^2 - radius^2",
        centre_to_target * centre_to_target - radius * radius,
    )?;
    let md_total = md_eob + tangent_length;

    Ok(JTrajectory {
        radius,
        inclination_deg: inclination,
        tvd_eob,
        md_eob,
        displacement_eob,
        tangent_length,
        md_total,
    })
}
