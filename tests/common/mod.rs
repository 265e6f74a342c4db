use std::path::Path;

use portal_scenario::model::StatusEnvelope;
use portal_scenario::sim::{PhaseKind, PhaseOutcome, run_phase};
use portal_scenario::testutil::RecordingSink;
use portal_scenario::{Aggregation, Scenario};

/// Run one built-in phase against the stock template from offset 0.
pub fn run_stock(kind: PhaseKind, aggregation: Aggregation) -> (PhaseOutcome, RecordingSink) {
    let scenario = Scenario::camp_navarro();
    let mut sink = RecordingSink::default();
    let outcome = run_phase(&kind.phase(), scenario.template(), 0, aggregation, &mut sink).unwrap();
    (outcome, sink)
}

pub fn read_snapshot(root: &Path, second: u32) -> StatusEnvelope {
    let path = root
        .join(second.to_string())
        .join("module")
        .join("status")
        .join("json");
    let text = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Names of the per-second directories under `root`, sorted numerically.
pub fn second_dirs(root: &Path) -> Vec<u32> {
    let mut seconds: Vec<u32> = std::fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().parse().unwrap())
        .collect();
    seconds.sort_unstable();
    seconds
}
