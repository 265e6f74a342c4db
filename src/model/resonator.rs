use serde::{Deserialize, Serialize};

/// Compass slot a resonator occupies around its portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl Position {
    /// All eight slots in deployment order.
    pub const ALL: [Position; 8] = [
        Position::E,
        Position::NE,
        Position::N,
        Position::NW,
        Position::W,
        Position::SW,
        Position::S,
        Position::SE,
    ];
}

/// Sub-component of a portal. Level and health are not clamped here;
/// callers keep them within 0–8 and 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resonator {
    pub position: Position,
    pub level: i32,
    pub health: i32,
    pub owner: String,
}

impl Resonator {
    /// An undeployed resonator: the given level, zero health, no owner.
    pub fn new(position: Position, level: i32) -> Self {
        Self {
            position,
            level,
            health: 0,
            owner: String::new(),
        }
    }
}
