//! Planning orchestration: dispatch a profile to its solver and bundle the
//! result with the request identity.

use thiserror::Error;

use wellpath_profiles::{Trajectory, TrajectoryError, WellProfile, h, j, s};
use wellpath_units::UnitSystem;

/// Inputs required to plan one well.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Display name of the well, echoed into reports and exports.
    pub well: String,
    pub units: UnitSystem,
    pub profile: WellProfile,
}

/// Solved plan for a single well.
#[derive(Debug, Clone)]
pub struct WellPlan {
    pub well: String,
    pub units: UnitSystem,
    pub profile: WellProfile,
    pub trajectory: Trajectory,
}

/// Top-level planning error.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("trajectory solving failed: {0}")]
    Trajectory(#[from] TrajectoryError),
}

/// Solve the supplied profile in the requested unit system.
pub fn solve_profile(
    profile: &WellProfile,
    units: UnitSystem,
) -> Result<Trajectory, TrajectoryError> {
    match profile {
        WellProfile::J(p) => j::solve(p, units).map(Trajectory::J),
        WellProfile::S(p) => s::solve(p, units).map(Trajectory::S),
        WellProfile::H(p) => h::solve(p, units).map(Trajectory::H),
    }
}

/// Plan a single well end to end.
pub fn plan_well(request: &PlanRequest) -> Result<WellPlan, PlanError> {
    let trajectory = solve_profile(&request.profile, request.units)?;

    Ok(WellPlan {
        well: request.well.clone(),
        units: request.units,
        profile: request.profile,
        trajectory,
    })
}
