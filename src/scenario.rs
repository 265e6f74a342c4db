use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::flush::{DirSink, SnapshotSink, prepare_output_dir};
use crate::model::*;
use crate::sim::{Phase, PhaseKind, PhaseOutcome, run_phase};

/// Title of the portal the stock scenario is built around.
pub const DEFAULT_TITLE: &str = "Camp Navarro";
/// Resonator levels of the stock template, one per slot in `Position::ALL` order.
pub const DEFAULT_LEVELS: [i32; 8] = [8, 7, 6, 6, 5, 5, 4, 4];

/// Every phase outcome of a completed run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub phases: Vec<PhaseOutcome>,
    /// Second the done marker was written under.
    pub final_second: u32,
}

impl Timeline {
    pub fn snapshots_written(&self) -> usize {
        self.phases.iter().map(|p| p.emitted).sum()
    }
}

/// A portal template plus the phases to play against it back to back.
///
/// Each phase starts where the previous one ended, so the written seconds
/// form one increasing timeline. The template is shared read-only by every
/// phase.
///
/// ```
/// use portal_scenario::model::{Faction, Position};
/// use portal_scenario::scenario::Scenario;
/// use portal_scenario::sim::PhaseKind;
///
/// let scenario = Scenario::new("Fountain")
///     .faction(Faction::Resistance)
///     .resonator(Position::E, 8)
///     .resonator(Position::W, 6)
///     .phase(PhaseKind::Capture)
///     .phase(PhaseKind::Decay);
/// assert_eq!(scenario.template().resonators.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    template: PortalStatus,
    phases: Vec<Phase>,
    aggregation: Aggregation,
}

impl Scenario {
    /// A neutral template with no resonators and no phases.
    pub fn new(title: &str) -> Self {
        Self {
            template: PortalStatus::neutral(title),
            phases: Vec::new(),
            aggregation: Aggregation::default(),
        }
    }

    /// The stock template: held by the Enlightened with all eight slots at
    /// [`DEFAULT_LEVELS`]. No phases.
    pub fn camp_navarro() -> Self {
        Position::ALL
            .into_iter()
            .zip(DEFAULT_LEVELS)
            .fold(
                Self::new(DEFAULT_TITLE).faction(Faction::Enlightened),
                |s, (position, level)| s.resonator(position, level),
            )
    }

    /// Stock template with the phases and aggregation from `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        config
            .phases
            .iter()
            .fold(Self::camp_navarro(), |s, &kind| s.phase(kind))
            .aggregation(config.aggregation)
    }

    pub fn faction(mut self, v: Faction) -> Self { self.template.controlling_faction = v; self }
    pub fn owner(mut self, v: &str) -> Self { self.template.owner = v.to_string(); self }
    pub fn aggregation(mut self, v: Aggregation) -> Self { self.aggregation = v; self }

    pub fn resonator(mut self, position: Position, level: i32) -> Self {
        self.template.resonators.push(Resonator::new(position, level));
        self
    }

    pub fn phase(self, kind: PhaseKind) -> Self {
        self.custom_phase(kind.phase())
    }

    pub fn custom_phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    pub fn template(&self) -> &PortalStatus {
        &self.template
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Play every phase in order, then write the done marker under the last
    /// phase's terminal second. Stops at the first error; the marker is only
    /// written when every phase succeeded.
    pub fn run(&self, sink: &mut dyn SnapshotSink) -> Result<Timeline> {
        let mut offset = 0;
        let mut phases = Vec::with_capacity(self.phases.len());
        for phase in &self.phases {
            let outcome = run_phase(phase, &self.template, offset, self.aggregation, sink)?;
            offset = outcome.last_second;
            phases.push(outcome);
        }
        sink.write_done(offset)?;
        Ok(Timeline {
            phases,
            final_second: offset,
        })
    }
}

/// Generate the configured scenario into `config.output_dir`.
///
/// The directory is created when missing and must be empty; it is checked
/// before anything is written.
pub fn generate(config: &GeneratorConfig) -> Result<Timeline> {
    prepare_output_dir(&config.output_dir)?;

    let scenario = Scenario::from_config(config);
    tracing::info!(
        output = %config.output_dir.display(),
        phases = scenario.phases().len(),
        aggregation = %config.aggregation,
        "generating scenario"
    );

    let mut sink = DirSink::new(&config.output_dir);
    let timeline = scenario.run(&mut sink)?;
    tracing::info!(
        final_second = timeline.final_second,
        snapshots = timeline.snapshots_written(),
        "scenario generated"
    );
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingSink;

    #[test]
    fn stock_template_layout() {
        let s = Scenario::camp_navarro();
        let t = s.template();
        assert_eq!(t.title, "Camp Navarro");
        assert_eq!(t.controlling_faction, Faction::Enlightened);
        let levels: Vec<i32> = t.resonators.iter().map(|r| r.level).collect();
        assert_eq!(levels, DEFAULT_LEVELS);
        let positions: Vec<Position> = t.resonators.iter().map(|r| r.position).collect();
        assert_eq!(positions, Position::ALL);
        assert!(s.phases().is_empty());
    }

    #[test]
    fn empty_scenario_only_marks_done() {
        let mut sink = RecordingSink::default();
        let timeline = Scenario::camp_navarro().run(&mut sink).unwrap();
        assert_eq!(timeline.final_second, 0);
        assert!(sink.snapshots.is_empty());
        assert_eq!(sink.done, Some(0));
    }

    #[test]
    fn offsets_thread_through_phases() {
        let mut sink = RecordingSink::default();
        let timeline = Scenario::camp_navarro()
            .phase(PhaseKind::Capture)
            .phase(PhaseKind::Build)
            .run(&mut sink)
            .unwrap();

        let ends: Vec<u32> = timeline.phases.iter().map(|p| p.last_second).collect();
        assert_eq!(ends, vec![26, 102]);
        assert_eq!(timeline.final_second, 102);
        assert_eq!(sink.done, Some(102));
        // Build's first activation lands on capture's terminal second.
        assert_eq!(sink.seconds()[13], 26);
    }

    #[test]
    fn failure_skips_done_marker() {
        let mut sink = RecordingSink::failing_at(5);
        let result = Scenario::camp_navarro().phase(PhaseKind::Decay).run(&mut sink);
        assert!(result.is_err());
        assert_eq!(sink.done, None);
    }
}
