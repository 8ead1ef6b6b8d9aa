use std::fs::{self, File};
use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn catalog_solves_shipped_wells_into_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("trajectories.csv");

    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args([
            "--wells",
            "configs/wells.yaml",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("J-18: j profile"))
        .stdout(contains("Solved 3 wells (0 skipped)"));

    let text = fs::read_to_string(&csv_path).expect("csv read");
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("well,profile,units,inclination_deg"));
    assert_eq!(lines.count(), 3, "one row per shipped well");
    assert!(text.contains("S-22,s,metric,"), "csv = {text}");
}

#[test]
fn catalog_skips_infeasible_wells_and_keeps_going() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wells_path = dir.path().join("wells.yaml");
    let csv_path = dir.path().join("trajectories.csv");

    let mut file = File::create(&wells_path).expect("yaml create");
    writeln!(
        file,
        concat!(
            "- name: S-BAD\n",
            "  units: metric\n",
            "  profile:\n",
            "    type: s\n",
            "    tvd: 2500.0\n",
            "    kop: 2300.0\n",
            "    build_rate: 2.0\n",
            "    drop_rate: 1.5\n",
            "    displacement: 600.0\n",
            "- name: J-GOOD\n",
            "  units: field\n",
            "  profile:\n",
            "    type: j\n",
            "    tvd: 8000.0\n",
            "    kop: 1000.0\n",
            "    build_rate: 3.0\n",
            "    displacement: 2000.0\n",
        )
    )
    .unwrap();
    drop(file);

    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args([
            "--wells",
            wells_path.to_str().unwrap(),
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Solved 1 wells (1 skipped)"))
        .stderr(contains("Skipping 'S-BAD'"));

    let text = fs::read_to_string(&csv_path).expect("csv read");
    assert!(text.contains("J-GOOD,j,field,"), "csv = {text}");
    assert!(!text.contains("S-BAD"), "csv = {text}");
}

#[test]
fn catalog_well_filter_selects_single_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("trajectories.csv");

    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args([
            "--wells",
            "configs/wells",
            "--well",
            "h-7",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Solved 1 wells (0 skipped)"));

    let text = fs::read_to_string(&csv_path).expect("csv read");
    assert!(text.contains("H-7,h,field,"), "csv = {text}");
    assert!(!text.contains("J-18"), "csv = {text}");
}

#[test]
fn catalog_unknown_well_fails_with_context() {
    Command::cargo_bin("catalog")
        .expect("catalog bin")
        .args(["--wells", "configs/wells.yaml", "--well", "J-99", "--output", "-"])
        .assert()
        .failure()
        .stderr(contains("not found in catalog"));
}
