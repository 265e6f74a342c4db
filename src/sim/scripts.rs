//! The built-in phases a scenario is composed from.

use std::fmt;
use std::str::FromStr;

use super::phase::{Action, Direction, LevelShift, LevelTable, Phase, Setup, Step};

/// Levels for the first deployment of the build phase: base 4, one higher
/// from each of slots 2, 4, 6 and 7 onward. Yields `[4, 4, 5, 5, 6, 6, 7, 8]`.
pub const BUILD_LEVELS: LevelTable = LevelTable {
    base: 4,
    shift: LevelShift::RaiseBefore,
    marks: &[2, 4, 6, 7],
};

/// Levels the opposing side deploys after the flip: base 8, one lower after
/// each of slots 0, 1, 3 and 5. Yields `[8, 7, 6, 6, 5, 5, 4, 4]`.
pub const FLIP_LEVELS: LevelTable = LevelTable {
    base: 8,
    shift: LevelShift::LowerAfter,
    marks: &[0, 1, 3, 5],
};

/// Health gained or lost per charge / decay step.
pub const HEALTH_STEP: i32 = 10;

const CAPTURE_END: u32 = 26;
const DECAY_END: u32 = 46;
const BUILD_END: u32 = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Neutral portal captured and charged to full health.
    Capture,
    /// Captured and charged, then left to decay.
    Decay,
    /// Built out resonator by resonator, flipped to the other side, rebuilt,
    /// then neutralized.
    Build,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 3] = [PhaseKind::Capture, PhaseKind::Decay, PhaseKind::Build];

    pub fn phase(self) -> Phase {
        match self {
            PhaseKind::Capture => capture(),
            PhaseKind::Decay => decay(),
            PhaseKind::Build => build(),
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhaseKind::Capture => "capture",
            PhaseKind::Decay => "decay",
            PhaseKind::Build => "build",
        };
        f.write_str(s)
    }
}

impl FromStr for PhaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "capture" => Ok(PhaseKind::Capture),
            "decay" => Ok(PhaseKind::Decay),
            "build" => Ok(PhaseKind::Build),
            other => Err(format!("unknown phase: {other}")),
        }
    }
}

/// 0 empty, 2 deploy, 4 unchanged, 6..=24 charge.
fn charge_steps() -> Vec<Step> {
    let mut steps = vec![
        Step::new(0, Action::Emit),
        Step::new(2, Action::Deploy),
        Step::new(4, Action::Emit),
    ];
    steps.extend(
        (6..=24)
            .step_by(2)
            .map(|s| Step::new(s, Action::AdjustHealth(HEALTH_STEP))),
    );
    steps
}

pub fn capture() -> Phase {
    Phase::new(
        "capture",
        Setup::Empty,
        Direction::Descending,
        charge_steps(),
        CAPTURE_END,
    )
}

pub fn decay() -> Phase {
    let mut steps = charge_steps();
    steps.extend(
        (28..=42)
            .step_by(2)
            .map(|s| Step::new(s, Action::AdjustHealth(-HEALTH_STEP))),
    );
    Phase::new("decay", Setup::Empty, Direction::Descending, steps, DECAY_END)
}

pub fn build() -> Phase {
    let activate = |s| Step::new(s, Action::Activate);

    let mut steps: Vec<Step> = (0..=21).step_by(3).map(activate).collect();
    steps.push(Step::new(24, Action::Flip(FLIP_LEVELS)));
    steps.extend((33..=51).step_by(3).map(activate));
    steps.push(activate(64));
    steps.push(Step::new(67, Action::Neutralize));

    Phase::new(
        "build",
        Setup::Leveled(BUILD_LEVELS),
        Direction::Descending,
        steps,
        BUILD_END,
    )
}
