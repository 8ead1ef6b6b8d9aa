//! Core units and shared constants for the wellpath calculator workspace.

/// Foundational constants for the radius-of-curvature method.
pub mod constants {
    /// Radius factor for field units, where build and drop rates are quoted
    /// in degrees per 100 ft (100 * 180 / pi, rounded to oilfield convention).
    pub const RADIUS_FACTOR_FIELD: f64 = 5_729.58;
    /// Radius factor for metric units, where rates are quoted in degrees
    /// per 30 m (30 * 180 / pi, rounded to oilfield convention).
    pub const RADIUS_FACTOR_METRIC: f64 = 1_718.87;
    /// Measured depth drilled per degree of inclination change at a unit
    /// field rate.
    pub const DEPTH_PER_DEGREE_FIELD: f64 = 100.0;
    /// Measured depth drilled per degree of inclination change at a unit
    /// metric rate.
    pub const DEPTH_PER_DEGREE_METRIC: f64 = 30.0;
}

/// Measurement system selected for a calculation request.
///
/// The system fixes the radius-of-curvature factor and the measured-depth
/// basis of the build, drop, and landing rates. It is passed explicitly into
/// every solver call so one result never mixes constants from two systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Lengths in feet, rates in degrees per 100 ft.
    Field,
    /// Lengths in metres, rates in degrees per 30 m.
    Metric,
}

impl UnitSystem {
    /// Factor dividing an angular rate into a radius of curvature.
    #[inline]
    pub fn radius_factor(self) -> f64 {
        match self {
            UnitSystem::Field => constants::RADIUS_FACTOR_FIELD,
            UnitSystem::Metric => constants::RADIUS_FACTOR_METRIC,
        }
    }

    /// Measured depth drilled per degree of inclination change.
    #[inline]
    pub fn depth_per_degree(self) -> f64 {
        match self {
            UnitSystem::Field => constants::DEPTH_PER_DEGREE_FIELD,
            UnitSystem::Metric => constants::DEPTH_PER_DEGREE_METRIC,
        }
    }

    /// Display label for lengths and depths.
    #[inline]
    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Field => "ft",
            UnitSystem::Metric => "m",
        }
    }

    /// Display label for angles. Both systems report degrees.
    #[inline]
    pub fn angle_label(self) -> &'static str {
        "degrees"
    }

    /// Lowercase tag used in reports and exported artifacts.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            UnitSystem::Field => "field",
            UnitSystem::Metric => "metric",
        }
    }
}
