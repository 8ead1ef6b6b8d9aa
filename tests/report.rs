use wellpath_calculator::profiles::{JProfile, SProfile, Trajectory, j, s};
use wellpath_calculator::report::{ReportLine, TrajectoryReport};
use wellpath_calculator::units::UnitSystem;

#[test]
fn report_lines_format_label_value_unit() {
    let line = ReportLine {
        label: "Radius of curvature",
        value: 1909.8599,
        unit: "ft",
    };
    assert_eq!(line.to_string(), "Radius of curvature -> 1909.86 ft");
}

#[test]
fn j_report_orders_transition_quantities() {
    let profile = JProfile {
        tvd: 8000.0,
        kop: 1000.0,
        build_rate: 3.0,
        displacement: 2000.0,
    };
    let path = j::solve(&profile, UnitSystem::Field).expect("j solve");
    let report = TrajectoryReport::new("J-18", &Trajectory::J(path), UnitSystem::Field);

    let labels: Vec<&str> = report.lines.iter().map(|line| line.label).collect();
    assert_eq!(
        labels,
        [
            "Radius of curvature",
            "Inclination",
            "TVD at end of build",
            "MD at end of build",
            "Displacement at end of build",
            "Tangent length",
            "Total MD",
        ]
    );

    let rendered = report.to_string();
    assert!(rendered.starts_with("=== Well Trajectory: J-18 ==="), "rendered = {rendered}");
    assert!(rendered.contains("Inclination -> 16.57 degrees"), "rendered = {rendered}");
    assert!(rendered.contains("Radius of curvature -> 1909.86 ft"), "rendered = {rendered}");
}

#[test]
fn s_report_carries_metric_labels_and_drop_points() {
    let profile = SProfile {
        tvd: 2500.0,
        kop: 300.0,
        build_rate: 2.0,
        drop_rate: 1.5,
        displacement: 600.0,
    };
    let path = s::solve(&profile, UnitSystem::Metric).expect("s solve");
    let report = TrajectoryReport::new("S-22", &Trajectory::S(path), UnitSystem::Metric);

    assert_eq!(report.lines.len(), 11);
    assert!(report.lines.iter().any(|line| line.label == "MD at start of drop"));
    assert!(
        report.lines.iter().all(|line| line.unit == "m" || line.unit == "degrees"),
        "units should be metric"
    );
}
