//! Closed-form solvers for idealized directional well profiles.
//!
//! Each profile module exposes an input record and a `solve` function that
//! derives the transition-point geometry for one well shape: `j` builds and
//! holds, `s` builds, holds, and drops back to vertical, and `h` builds twice
//! to land a horizontal section. Solvers are pure and take the unit system
//! explicitly.

pub mod h;
pub mod j;
pub mod s;

mod error;
mod trig;
mod validate;

pub use error::TrajectoryError;
pub use h::{HProfile, HTrajectory};
pub use j::{JProfile, JTrajectory};
pub use s::{SProfile, STrajectory};

/// Idealized well-path shape tagged with its profile-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WellProfile {
    /// Build and hold to the target.
    J(JProfile),
    /// Build, hold, and drop back to vertical.
    S(SProfile),
    /// Build, hold, and build again to horizontal.
    H(HProfile),
}

impl WellProfile {
    /// Short lowercase tag used in reports and exported artifacts.
    pub fn tag(&self) -> &'static str {
        match self {
            WellProfile::J(_) => "j",
            WellProfile::S(_) => "s",
            WellProfile::H(_) => "h",
        }
    }
}

/// Solved transition-point geometry for any supported profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trajectory {
    J(JTrajectory),
    S(STrajectory),
    H(HTrajectory),
}

impl Trajectory {
    /// Maximum inclination reached by the build section, in degrees.
    pub fn inclination_deg(&self) -> f64 {
        match self {
            Trajectory::J(t) => t.inclination_deg,
            Trajectory::S(t) => t.inclination_deg,
            Trajectory::H(t) => t.inclination_deg,
        }
    }

    /// Total measured depth along the well path.
    pub fn md_total(&self) -> f64 {
        match self {
            Trajectory::J(t) => t.md_total,
            Trajectory::S(t) => t.md_total,
            Trajectory::H(t) => t.md_total,
        }
    }
}
