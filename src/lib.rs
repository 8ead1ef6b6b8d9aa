//! Trajectory planning logic for directional wells lives here.
//!
//! The library crate hosts the planning orchestration, report formatting,
//! and catalog selection, and re-exports the workspace member crates so
//! multiple front-ends (single-well CLI, batch runner) share one surface.

pub mod planner;
pub mod report;
pub mod scenario;

pub use wellpath_config as config;
pub use wellpath_export as export;
pub use wellpath_profiles as profiles;
pub use wellpath_units as units;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
