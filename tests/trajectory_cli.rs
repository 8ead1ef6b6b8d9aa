use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn trajectory_j_prints_report() {
    Command::cargo_bin("trajectory")
        .expect("trajectory bin")
        .args([
            "--units",
            "field",
            "--well",
            "TEST-1",
            "j",
            "--tvd",
            "8000",
            "--kop",
            "1000",
            "--build-rate",
            "3",
            "--displacement",
            "2000",
        ])
        .assert()
        .success()
        .stdout(contains("=== Well Trajectory: TEST-1 ==="))
        .stdout(contains("Radius of curvature -> 1909.86 ft"))
        .stdout(contains("Inclination -> 16.57 degrees"))
        .stdout(contains("Total MD ->"));
}

#[test]
fn trajectory_s_reports_metric_units() {
    Command::cargo_bin("trajectory")
        .expect("trajectory bin")
        .args([
            "--units",
            "metric",
            "s",
            "--tvd",
            "2500",
            "--kop",
            "300",
            "--build-rate",
            "2",
            "--drop-rate",
            "1.5",
            "--displacement",
            "600",
        ])
        .assert()
        .success()
        .stdout(contains("Drop radius -> 1145.91 m"))
        .stdout(contains("MD at start of drop ->"));
}

#[test]
fn trajectory_export_writes_json_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("summary.json");

    Command::cargo_bin("trajectory")
        .expect("trajectory bin")
        .args([
            "--well",
            "H-TEST",
            "--export",
            json_path.to_str().unwrap(),
            "h",
            "--tvd",
            "8000",
            "--kop",
            "2000",
            "--build-rate",
            "6",
            "--landing-rate",
            "10",
            "--displacement",
            "1000",
        ])
        .assert()
        .success()
        .stdout(contains("Saved trajectory summary to"));

    let parsed: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(&json_path).expect("open")).expect("parse");
    assert_eq!(parsed["well"], "H-TEST");
    assert_eq!(parsed["profile"], "h");
    assert_eq!(parsed["units"], "field");
    let values = parsed["values"].as_array().expect("values array");
    assert!(values.iter().any(|v| v["name"] == "MD at start of landing"));
}

#[test]
fn trajectory_rejects_zero_build_rate() {
    Command::cargo_bin("trajectory")
        .expect("trajectory bin")
        .args([
            "j",
            "--tvd",
            "8000",
            "--kop",
            "1000",
            "--build-rate",
            "0",
            "--displacement",
            "2000",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid input"));
}
