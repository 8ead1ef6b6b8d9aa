//! Report formatting for solved trajectories.
//!
//! Solvers return plain numbers; this module turns them into the ordered,
//! unit-labelled lines the front-ends print, keeping presentation out of the
//! solver crates.

use std::fmt;

use wellpath_profiles::{HTrajectory, JTrajectory, STrajectory, Trajectory};
use wellpath_units::UnitSystem;

/// One labelled value in a trajectory report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} -> {:.2}", self.label, self.value)
        } else {
            write!(f, "{} -> {:.2} {}", self.label, self.value, self.unit)
        }
    }
}

/// Ordered, labelled report for one solved well.
#[derive(Debug, Clone)]
pub struct TrajectoryReport {
    pub well: String,
    pub lines: Vec<ReportLine>,
}

impl TrajectoryReport {
    /// Assemble the report lines for a solved trajectory.
    pub fn new(well: &str, trajectory: &Trajectory, units: UnitSystem) -> Self {
        let lines = match trajectory {
            Trajectory::J(t) => j_lines(t, units),
            Trajectory::S(t) => s_lines(t, units),
            Trajectory::H(t) => h_lines(t, units),
        };
        Self {
            well: well.to_string(),
            lines,
        }
    }
}

impl fmt::Display for TrajectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Well Trajectory: {} ===", self.well)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn j_lines(t: &JTrajectory, units: UnitSystem) -> Vec<ReportLine> {
    let length = units.length_label();
    let angle = units.angle_label();
    vec![
        line("Radius of curvature", t.radius, length),
        line("Inclination", t.inclination_deg, angle),
        line("TVD at end of build", t.tvd_eob, length),
        line("MD at end of build", t.md_eob, length),
        line("Displacement at end of build", t.displacement_eob, length),
        line("Tangent length", t.tangent_length, length),
        line("Total MD", t.md_total, length),
    ]
}

fn s_lines(t: &STrajectory, units: UnitSystem) -> Vec<ReportLine> {
    let length = units.length_label();
    let angle = units.angle_label();
    vec![
        line("Build radius", t.build_radius, length),
        line("Drop radius", t.drop_radius, length),
        line("Inclination", t.inclination_deg, angle),
        line("TVD at end of build", t.tvd_eob, length),
        line("MD at end of build", t.md_eob, length),
        line("Displacement at end of build", t.displacement_eob, length),
        line("Tangent length", t.tangent_length, length),
        line("MD at start of drop", t.md_sod, length),
        line("TVD at start of drop", t.tvd_sod, length),
        line("Displacement at start of drop", t.displacement_sod, length),
        line("Total MD", t.md_total, length),
    ]
}

fn h_lines(t: &HTrajectory, units: UnitSystem) -> Vec<ReportLine> {
    let length = units.length_label();
    let angle = units.angle_label();
    vec![
        line("Build radius", t.build_radius, length),
        line("Landing radius", t.landing_radius, length),
        line("Inclination", t.inclination_deg, angle),
        line("TVD at end of build", t.tvd_eob, length),
        line("MD at end of build", t.md_eob, length),
        line("Displacement at end of build", t.displacement_eob, length),
        line("Tangent length", t.tangent_length, length),
        line("MD at start of landing", t.md_sob2, length),
        line("Total MD", t.md_total, length),
    ]
}

fn line(label: &'static str, value: f64, unit: &'static str) -> ReportLine {
    ReportLine { label, value, unit }
}
