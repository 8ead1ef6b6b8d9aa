use thiserror::Error;

/// Errors surfaced by the profile solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// A supplied parameter fails its physical requirement.
    #[error("invalid input: {parameter} = {value} ({requirement})")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },
    /// The requested geometry admits no real solution.
    #[error("infeasible geometry: {quantity} = {value} has no real solution")]
    GeometryInfeasible { quantity: &'static str, value: f64 },
}
