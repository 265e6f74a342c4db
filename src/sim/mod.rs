mod phase;
mod runner;
pub mod scripts;

pub use phase::{Action, Cursor, Direction, LevelShift, LevelTable, Phase, Setup, Step};
pub use runner::{PhaseOutcome, apply_action, run_phase};
pub use scripts::{BUILD_LEVELS, FLIP_LEVELS, PhaseKind};
