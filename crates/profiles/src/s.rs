//! Build, hold, and drop (S-type) profile solver.
//!
//! An S-well builds to an inclination, holds a straight tangent, then drops
//! back to vertical so the path lands vertically at the target. The tangent
//! is the internal tangent between the build arc and the drop arc, so the
//! construction works with the sum of the two radii.

use wellpath_units::UnitSystem;

use crate::error::TrajectoryError;
use crate::trig::{asin_deg, atan_deg, cos_deg, sin_deg, sqrt_checked};
use crate::validate::{
    inclination_in_range, require_below_kickoff, require_non_negative, require_positive,
};

/// Input parameters for a build-hold-drop well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SProfile {
    /// Target true vertical depth.
    pub tvd: f64,
    /// Kick-off point depth.
    pub kop: f64,
    /// Build-up rate in degrees per rate basis (100 ft or 30 m).
    pub build_rate: f64,
    /// Drop-off rate returning the path to vertical, same basis.
    pub drop_rate: f64,
    /// Target horizontal displacement at total depth.
    pub displacement: f64,
}

/// Transition-point geometry derived for a build-hold-drop well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct STrajectory {
    /// Radius of curvature of the build section.
    pub build_radius: f64,
    /// Radius of curvature of the drop section.
    pub drop_radius: f64,
    /// Inclination held on the tangent, in degrees.
    pub inclination_deg: f64,
    /// True vertical depth at the end of build.
    pub tvd_eob: f64,
    /// Measured depth at the end of build.
    pub md_eob: f64,
    /// Horizontal displacement at the end of build.
    pub displacement_eob: f64,
    /// Straight hold distance between the build and drop arcs.
    pub tangent_length: f64,
    /// Measured depth at the start of drop.
    pub md_sod: f64,
    /// True vertical depth at the start of drop.
    pub tvd_sod: f64,
    /// Horizontal displacement at the start of drop.
    pub displacement_sod: f64,
    /// Total measured depth at the target.
    pub md_total: f64,
}

/// Solve the build-hold-drop geometry in the requested unit system.
pub fn solve(profile: &SProfile, units: UnitSystem) -> Result<STrajectory, TrajectoryError> {
    require_non_negative("kop", profile.kop)?;
    require_below_kickoff(profile.tvd, profile.kop)?;
    require_positive("build_rate", profile.build_rate)?;
    require_positive("drop_rate", profile.drop_rate)?;
    require_non_negative("displacement", profile.displacement)?;

    let build_radius = units.radius_factor() / profile.build_rate;
    let drop_radius = units.radius_factor() / profile.drop_rate;
    let combined_radius = build_radius + drop_radius;

    // Horizontal gap between the build-arc centre and the drop-arc centre.
    let centre_gap = if profile.displacement > combined_radius {
        profile.displacement - combined_radius
    } else {
        combined_radius - profile.displacement
    };
    let vertical_span = profile.tvd - profile.kop;

    // Tilt of the centre-to-centre line from vertical, and the angle that
    // line makes with the internal tangent touching both arcs.
    let centre_tilt = atan_deg(centre_gap / vertical_span);
    let centre_to_centre = sqrt_checked(
        "centre_gap^2 + vertical_span^2",
        centre_gap * centre_gap + vertical_span * vertical_span,
    )?;
    let tangent_angle = asin_deg(
        "combined_radius / centre_to_centre",
        combined_radius / centre_to_centre,
    )?;
    let inclination = inclination_in_range(tangent_angle - centre_tilt)?;

    let tvd_eob = profile.kop + build_radius * sin_deg(inclination);
    let md_eob = profile.kop + (inclination / profile.build_rate) * units.depth_per_degree();
    let displacement_eob = build_radius - build_radius * cos_deg(inclination);
    let tangent_length = sqrt_checked(
        "centre_to_centre^2 - combined_radius^2",
        centre_to_centre * centre_to_centre - combined_radius * combined_radius,
    )?;
    let md_sod = md_eob + tangent_length;
    let tvd_sod = tvd_eob + tangent_length * cos_deg(inclination).abs();
    let displacement_sod = displacement_eob + (tangent_length * sin_deg(inclination)).abs();
    let md_total = md_sod + (inclination / profile.drop_rate) * units.depth_per_degree();

    Ok(STrajectory {
        build_radius,
        drop_radius,
        inclination_deg: inclination,
        tvd_eob,
        md_eob,
        displacement_eob,
        tangent_length,
        md_sod,
        tvd_sod,
        displacement_sod,
        md_total,
    })
}
