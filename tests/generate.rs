mod common;

use std::fs;

use common::{read_snapshot, second_dirs};
use portal_scenario::sim::PhaseKind;
use portal_scenario::{Aggregation, Faction, GenError, GeneratorConfig, generate};

fn config_for(output: &std::path::Path) -> GeneratorConfig {
    GeneratorConfig {
        output_dir: output.to_path_buf(),
        ..GeneratorConfig::default()
    }
}

#[test]
fn default_run_writes_build_timeline() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = generate(&config_for(dir.path())).unwrap();

    assert_eq!(timeline.final_second, 76);
    assert_eq!(
        second_dirs(dir.path()),
        vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 33, 36, 39, 42, 45, 48, 51, 64, 67, 76]
    );

    let finish = dir.path().join("76").join("finish");
    assert!(finish.is_file());
    assert_eq!(fs::metadata(&finish).unwrap().len(), 0);
    // The terminal second holds only the marker.
    assert!(!dir.path().join("76").join("module").exists());
}

#[test]
fn snapshot_contents_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    generate(&config_for(dir.path())).unwrap();

    let full = read_snapshot(dir.path(), 21).status;
    assert_eq!(full.title, "Camp Navarro");
    assert_eq!(full.level, 5);
    assert_eq!(full.health, 100);
    assert_eq!(full.controlling_faction, Faction::Enlightened);
    assert_eq!(full.resonators.len(), 8);
    assert!(full.mods.is_empty());

    let flipped = read_snapshot(dir.path(), 33).status;
    assert_eq!(flipped.controlling_faction, Faction::Resistance);
    assert_eq!(flipped.resonators[0].owner, "Rick");
}

#[test]
fn snapshot_keeps_field_order() {
    let dir = tempfile::tempdir().unwrap();
    generate(&config_for(dir.path())).unwrap();

    let text = fs::read_to_string(dir.path().join("0/module/status/json")).unwrap();
    let keys = [
        "\"status\"",
        "\"title\"",
        "\"owner\"",
        "\"level\"",
        "\"health\"",
        "\"controllingFaction\"",
        "\"mods\"",
        "\"resonators\"",
        "\"position\"",
    ];
    let offsets: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{text}");
    assert!(text.starts_with("{\n    \"status\": {\n        \"title\""));
    assert!(!text.ends_with('\n'));
}

#[test]
fn all_phases_with_naive_aggregation() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        phases: PhaseKind::ALL.to_vec(),
        aggregation: Aggregation::AllPresent,
        ..config_for(dir.path())
    };
    let timeline = generate(&config).unwrap();

    assert_eq!(timeline.final_second, 148);
    assert!(dir.path().join("148/finish").is_file());
    // Capture deploy at 2: undeployed resonators still count.
    let deployed = read_snapshot(dir.path(), 2).status;
    assert_eq!(deployed.resonators.len(), 8);
    assert_eq!(deployed.level, 5);
    assert_eq!(deployed.health, 0);
}

#[test]
fn creates_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fixtures").join("scenario");
    generate(&config_for(&out)).unwrap();
    assert!(out.join("0/module/status/json").is_file());
}

#[test]
fn refuses_populated_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), b"keep me").unwrap();

    let err = generate(&config_for(dir.path())).unwrap_err();
    assert!(matches!(err, GenError::OutputNotEmpty { .. }));
    assert_eq!(err.exit_code(), -4);

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read(dir.path().join("notes.txt")).unwrap(), b"keep me");
}

#[test]
fn second_run_into_same_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    generate(&config_for(dir.path())).unwrap();
    let err = generate(&config_for(dir.path())).unwrap_err();
    assert_eq!(err.exit_code(), -4);
}
