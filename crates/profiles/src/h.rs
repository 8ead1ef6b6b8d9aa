//! Double-build horizontal (H-type) profile solver.
//!
//! An H-well builds off vertical, holds a straight tangent, then builds again
//! on a landing arc that carries the inclination to horizontal at the target
//! depth. The tangent is the external tangent between the two arcs, so the
//! construction works with the difference of the radii.

use wellpath_units::UnitSystem;

use crate::error::TrajectoryError;
use crate::trig::{acos_deg, atan_deg, cos_deg, sin_deg, sqrt_checked};
use crate::validate::{
    inclination_in_range, require_below_kickoff, require_non_negative, require_positive,
};

/// Input parameters for a double-build horizontal well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HProfile {
    /// Target true vertical depth of the horizontal section.
    pub tvd: f64,
    /// Kick-off point depth.
    pub kop: f64,
    /// Build-up rate of the first arc in degrees per rate basis.
    pub build_rate: f64,
    /// Build-up rate of the landing arc, same basis.
    pub landing_rate: f64,
    /// Target horizontal displacement at the landing point.
    pub displacement: f64,
}

/// Transition-point geometry derived for a double-build horizontal well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HTrajectory {
    /// Radius of curvature of the first build section.
    pub build_radius: f64,
    /// Radius of curvature of the landing section.
    pub landing_radius: f64,
    /// Inclination held on the tangent, in degrees.
    pub inclination_deg: f64,
    /// True vertical depth at the end of the first build.
    pub tvd_eob: f64,
    /// Measured depth at the end of the first build.
    pub md_eob: f64,
    /// Horizontal displacement at the end of the first build.
    pub displacement_eob: f64,
    /// Straight hold distance between the two build arcs.
    pub tangent_length: f64,
    /// Measured depth at the start of the landing arc.
    pub md_sob2: f64,
    /// Total measured depth at the landing point.
    pub md_total: f64,
}

/// Solve the double-build horizontal geometry in the requested unit system.
pub fn solve(profile: &HProfile, units: UnitSystem) -> Result<HTrajectory, TrajectoryError> {
    require_non_negative("kop", profile.kop)?;
    require_below_kickoff(profile.tvd, profile.kop)?;
    require_positive("build_rate", profile.build_rate)?;
    require_positive("landing_rate", profile.landing_rate)?;
    require_non_negative("displacement", profile.displacement)?;

    let build_radius = units.radius_factor() / profile.build_rate;
    let landing_radius = units.radius_factor() / profile.landing_rate;

    // The landing-arc centre sits one landing radius above the target depth;
    // the spans below locate it relative to the first-build centre.
    let vertical_span = profile.tvd - profile.kop - landing_radius;
    let lateral_span = profile.displacement + build_radius;

    // Angle of the centre-to-centre line above horizontal, and the angle
    // that line makes with the radius drawn to the external tangency point.
    let centre_dip = atan_deg(vertical_span / lateral_span);
    let centre_to_centre = sqrt_checked(
        "vertical_span^2 + lateral_span^2",
        vertical_span * vertical_span + lateral_span * lateral_span,
    )?;
    let radius_difference = build_radius - landing_radius;
    let tangent_angle = acos_deg(
        "radius_difference / centre_to_centre",
        radius_difference / centre_to_centre,
    )?;

    let inclination = inclination_in_range(180.0 - centre_dip - tangent_angle)?;
    // Past 90 degrees the tangent would climb back toward surface before the
    // landing arc, which no drillable double-build satisfies.
    if inclination > 90.0 {
        return Err(TrajectoryError::GeometryInfeasible {
            quantity: "inclination",
            value: inclination,
        });
    }

    let tvd_eob = profile.kop + build_radius * sin_deg(inclination);
    let md_eob = profile.kop + (inclination / profile.build_rate) * units.depth_per_degree();
    let displacement_eob = build_radius - build_radius * cos_deg(inclination);
    let tangent_length = sqrt_checked(
        "centre_to_centre^2 - radius_difference^2",
        centre_to_centre * centre_to_centre - radius_difference * radius_difference,
    )?;
    let md_sob2 = md_eob + tangent_length;
    let md_total =
        md_sob2 + ((90.0 - inclination) / profile.landing_rate) * units.depth_per_degree();

    Ok(HTrajectory {
        build_radius,
        landing_radius,
        inclination_deg: inclination,
        tvd_eob,
        md_eob,
        displacement_eob,
        tangent_length,
        md_sob2,
        md_total,
    })
}
