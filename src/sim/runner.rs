use super::phase::{Action, Cursor, Direction, Phase, Setup};
use crate::error::Result;
use crate::flush::SnapshotSink;
use crate::model::{Aggregation, PortalStatus, Resonator};

/// Result of running one phase to its terminal second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOutcome {
    /// Normalized status at the terminal second.
    pub status: PortalStatus,
    /// Absolute terminal second; the next phase's offset.
    pub last_second: u32,
    /// Number of snapshots written.
    pub emitted: usize,
}

/// Working copy of the template for a single phase run.
fn working_copy(template: &PortalStatus, setup: Setup) -> PortalStatus {
    let mut portal = template.clone();
    portal.resonators = match setup {
        Setup::Empty => Vec::new(),
        Setup::Leveled(table) => table.apply(template),
    };
    portal
}

/// Apply one scheduled action to the working copy.
pub fn apply_action(
    portal: &mut PortalStatus,
    cursor: &mut Cursor,
    template: &PortalStatus,
    action: Action,
) {
    match action {
        Action::Emit => {}
        Action::Deploy => {
            portal.resonators.extend(
                template
                    .resonators
                    .iter()
                    .map(|r| Resonator::new(r.position, r.level)),
            );
        }
        Action::AdjustHealth(delta) => {
            for r in &mut portal.resonators {
                r.health += delta;
            }
        }
        Action::Activate => match cursor.advance() {
            Some(i) if i < portal.resonators.len() => portal.resonators[i].health = 100,
            slot => {
                tracing::warn!(
                    ?slot,
                    resonators = portal.resonators.len(),
                    "activation past last resonator"
                );
            }
        },
        Action::Flip(table) => {
            portal.controlling_faction = template.controlling_faction.opponent();
            portal.resonators = table.apply(template);
            *cursor = Cursor::start(Direction::Ascending, portal.resonators.len());
        }
        Action::Neutralize => {
            portal.resonators = template
                .resonators
                .iter()
                .map(|r| Resonator::new(r.position, 0))
                .collect();
        }
    }
}

/// Run a phase against a copy of `template`, writing each scheduled
/// snapshot at `offset + second`.
///
/// The second counter advances one at a time from 0; seconds without a step
/// change nothing and write nothing. The first sink error aborts the phase.
/// The template is never modified.
pub fn run_phase(
    phase: &Phase,
    template: &PortalStatus,
    offset: u32,
    aggregation: Aggregation,
    sink: &mut dyn SnapshotSink,
) -> Result<PhaseOutcome> {
    let mut portal = working_copy(template, phase.setup);
    let mut cursor = Cursor::start(phase.direction, portal.resonators.len());
    let mut steps = phase.steps.iter().peekable();
    let mut emitted = 0;

    tracing::info!(phase = phase.name, offset, "phase started");

    for second in 0..phase.end {
        let Some(step) = steps.next_if(|s| s.second == second) else {
            tracing::trace!(phase = phase.name, second, "idle");
            continue;
        };
        apply_action(&mut portal, &mut cursor, template, step.action);
        sink.write_snapshot(offset + second, &portal.normalize(aggregation))?;
        emitted += 1;
    }

    let last_second = offset + phase.end;
    tracing::info!(phase = phase.name, last_second, emitted, "phase finished");

    Ok(PhaseOutcome {
        status: portal.normalize(aggregation),
        last_second,
        emitted,
    })
}
