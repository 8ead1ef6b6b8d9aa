use std::fs::File;
use std::io::Write;

use wellpath_calculator::config::{ProfileConfig, load_wells};
use wellpath_calculator::planner::{PlanRequest, plan_well};
use wellpath_calculator::scenario::{ScenarioError, find_well};

#[test]
fn shipped_catalog_covers_all_profiles() {
    let wells = load_wells("configs/wells.yaml").expect("wells yaml");
    assert_eq!(wells.len(), 3);
    assert!(wells.iter().any(|w| w.name == "J-18"));
    assert!(wells.iter().any(|w| w.name == "S-22"));
    assert!(wells.iter().any(|w| w.name == "H-7"));

    for well in &wells {
        let request = PlanRequest::try_from(well).expect("convert");
        let plan = plan_well(&request).expect("plan");
        assert!(
            plan.trajectory.md_total() > 0.0,
            "{} md_total = {}",
            well.name,
            plan.trajectory.md_total()
        );
    }
}

#[test]
fn toml_directory_loads_sorted_records() {
    let wells = load_wells("configs/wells").expect("wells dir");
    let names: Vec<&str> = wells.iter().map(|w| w.name.as_str()).collect();
    // Directory records come back in file-name order.
    assert_eq!(names, ["H-7", "J-18", "S-22"]);
}

#[test]
fn single_toml_file_loads_one_record() {
    let wells = load_wells("configs/wells/j18.toml").expect("single toml");
    assert_eq!(wells.len(), 1);
    assert_eq!(wells[0].name, "J-18");
}

#[test]
fn find_well_is_case_insensitive() {
    let wells = load_wells("configs/wells.yaml").expect("wells yaml");
    let found = find_well(&wells, "j-18").expect("lookup");
    assert_eq!(found.name, "J-18");

    let missing = find_well(&wells, "J-99").unwrap_err();
    assert!(matches!(missing, ScenarioError::NotFound(_)), "err = {missing:?}");

    let empty = find_well(&[], "J-18").unwrap_err();
    assert!(matches!(empty, ScenarioError::EmptyCatalog), "err = {empty:?}");
}

#[test]
fn unknown_profile_type_is_parsed_but_not_convertible() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wells.yaml");
    let mut file = File::create(&path).expect("yaml create");
    writeln!(
        file,
        "- name: X-1\n  units: field\n  profile:\n    type: u\n    tvd: 5000.0"
    )
    .unwrap();
    drop(file);

    let wells = load_wells(&path).expect("wells yaml");
    assert_eq!(wells.len(), 1);
    assert_eq!(wells[0].profile, ProfileConfig::Unsupported);

    let err = PlanRequest::try_from(&wells[0]).unwrap_err();
    assert!(
        matches!(err, ScenarioError::UnsupportedProfile(ref name) if name == "X-1"),
        "err = {err:?}"
    );
}
