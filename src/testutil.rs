use std::io;
use std::path::PathBuf;

use crate::error::{GenError, Result};
use crate::flush::SnapshotSink;
use crate::model::PortalStatus;

// ---------------------------------------------------------------------------
// In-memory sink
// ---------------------------------------------------------------------------

/// Sink that keeps every snapshot in memory, optionally failing after a
/// fixed number of writes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub snapshots: Vec<(u32, PortalStatus)>,
    pub done: Option<u32>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    /// Accept `writes` snapshots, then fail every later write.
    pub fn failing_at(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    /// Absolute seconds of every recorded snapshot, in write order.
    pub fn seconds(&self) -> Vec<u32> {
        self.snapshots.iter().map(|(s, _)| *s).collect()
    }

    /// Snapshot recorded at `second`, if any.
    pub fn at(&self, second: u32) -> Option<&PortalStatus> {
        self.snapshots
            .iter()
            .find(|(s, _)| *s == second)
            .map(|(_, status)| status)
    }
}

impl SnapshotSink for RecordingSink {
    fn write_snapshot(&mut self, second: u32, status: &PortalStatus) -> Result<()> {
        if self.fail_after.is_some_and(|n| self.snapshots.len() >= n) {
            return Err(GenError::WriteSnapshot {
                path: PathBuf::from(second.to_string()),
                source: io::Error::other("injected failure"),
            });
        }
        self.snapshots.push((second, status.clone()));
        Ok(())
    }

    fn write_done(&mut self, final_second: u32) -> Result<()> {
        self.done = Some(final_second);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Health of every slot, in slot order.
pub fn healths(status: &PortalStatus) -> Vec<i32> {
    status.resonators.iter().map(|r| r.health).collect()
}

/// Level of every slot, in slot order.
pub fn levels(status: &PortalStatus) -> Vec<i32> {
    status.resonators.iter().map(|r| r.level).collect()
}
