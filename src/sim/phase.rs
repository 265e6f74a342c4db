use crate::model::{PortalStatus, Resonator};

/// Which way a level table moves from its base, and whether the move lands
/// on the marked slot itself or on the slots after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelShift {
    /// Raise by one on reaching a marked slot, before it is assigned.
    RaiseBefore,
    /// Lower by one after a marked slot has been assigned.
    LowerAfter,
}

/// Per-slot resonator levels expressed as a base level and the slot indices
/// where the level steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTable {
    pub base: i32,
    pub shift: LevelShift,
    pub marks: &'static [usize],
}

impl LevelTable {
    pub fn levels(&self, slots: usize) -> Vec<i32> {
        let mut level = self.base;
        (0..slots)
            .map(|i| {
                let marked = self.marks.contains(&i);
                match self.shift {
                    LevelShift::RaiseBefore => {
                        if marked {
                            level += 1;
                        }
                        level
                    }
                    LevelShift::LowerAfter => {
                        let assigned = level;
                        if marked {
                            level -= 1;
                        }
                        assigned
                    }
                }
            })
            .collect()
    }

    /// The template's slots, undeployed, at this table's levels.
    pub fn apply(&self, template: &PortalStatus) -> Vec<Resonator> {
        template
            .resonators
            .iter()
            .zip(self.levels(template.resonators.len()))
            .map(|(r, level)| Resonator::new(r.position, level))
            .collect()
    }
}

/// Resonators a phase's working copy starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// None; they are deployed by a later step.
    Empty,
    /// The template's slots at the table's levels, all at zero health.
    Leveled(LevelTable),
}

/// Order in which `Action::Activate` walks the resonator list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Last slot first.
    Descending,
    /// First slot first.
    Ascending,
}

/// Mutation applied at one scheduled second, followed by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No change.
    Emit,
    /// Append the template's resonators at their levels with zero health.
    Deploy,
    /// Add the delta to every resonator's health.
    AdjustHealth(i32),
    /// Bring the resonator under the cursor to full health and advance.
    Activate,
    /// Hand the portal to the template's opponent and rebuild every slot
    /// from the table. The cursor restarts at the first slot, ascending.
    Flip(LevelTable),
    /// Reset every slot to level 0 and zero health.
    Neutralize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub second: u32,
    pub action: Action,
}

impl Step {
    pub fn new(second: u32, action: Action) -> Self {
        Self { second, action }
    }
}

/// A scripted stretch of the portal's life: its starting resonators, the
/// ordered `(second, action)` steps, and the terminal second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: &'static str,
    pub setup: Setup,
    pub direction: Direction,
    pub steps: Vec<Step>,
    pub end: u32,
}

impl Phase {
    /// # Panics
    /// Panics if steps are not strictly ascending or do not all precede `end`.
    pub fn new(
        name: &'static str,
        setup: Setup,
        direction: Direction,
        steps: Vec<Step>,
        end: u32,
    ) -> Self {
        assert!(
            steps.windows(2).all(|w| w[0].second < w[1].second),
            "{name}: steps must be strictly ascending"
        );
        assert!(
            steps.last().is_none_or(|s| s.second < end),
            "{name}: steps must precede terminal second {end}"
        );
        Self {
            name,
            setup,
            direction,
            steps,
            end,
        }
    }

    /// Seconds, relative to the phase start, at which a snapshot is emitted.
    pub fn schedule(&self) -> Vec<u32> {
        self.steps.iter().map(|s| s.second).collect()
    }
}

/// Next slot `Action::Activate` will bring up. Lives for one phase run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    next: Option<usize>,
    direction: Direction,
}

impl Cursor {
    pub fn start(direction: Direction, slots: usize) -> Self {
        let next = match direction {
            Direction::Descending => slots.checked_sub(1),
            Direction::Ascending => Some(0),
        };
        Self { next, direction }
    }

    pub fn peek(&self) -> Option<usize> {
        self.next
    }

    pub fn advance(&mut self) -> Option<usize> {
        let current = self.next;
        self.next = match (current, self.direction) {
            (Some(i), Direction::Descending) => i.checked_sub(1),
            (Some(i), Direction::Ascending) => Some(i + 1),
            (None, _) => None,
        };
        current
    }
}
