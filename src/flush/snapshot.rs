use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{GenError, Result};
use crate::model::PortalStatus;

/// Directories between a second's directory and the snapshot file.
pub const SNAPSHOT_DIRS: [&str; 2] = ["module", "status"];
/// Leaf file name holding a snapshot.
pub const SNAPSHOT_FILE: &str = "json";
/// Empty marker written under the final second once the timeline is complete.
pub const DONE_FILE: &str = "finish";

/// Destination for the snapshots a phase emits.
///
/// Callers hand over statuses that are already normalized; a sink only
/// persists them.
pub trait SnapshotSink {
    fn write_snapshot(&mut self, second: u32, status: &PortalStatus) -> Result<()>;
    fn write_done(&mut self, final_second: u32) -> Result<()>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    status: &'a PortalStatus,
}

/// Encode a status inside its `{"status": ...}` envelope, indented with four
/// spaces and without a trailing newline.
pub fn encode_snapshot(second: u32, status: &PortalStatus) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    EnvelopeRef { status }
        .serialize(&mut ser)
        .map_err(|source| GenError::Encode { second, source })?;
    Ok(buf)
}

/// Writes one directory per second under a root:
/// `<root>/<second>/module/status/json`, plus `<root>/<final>/finish`.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self, second: u32) -> PathBuf {
        let mut path = self.root.join(second.to_string());
        path.extend(SNAPSHOT_DIRS);
        path.join(SNAPSHOT_FILE)
    }

    pub fn done_path(&self, final_second: u32) -> PathBuf {
        self.root.join(final_second.to_string()).join(DONE_FILE)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let wrap = |source| GenError::WriteSnapshot {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    writer.write_all(bytes).map_err(wrap)?;
    writer.flush().map_err(wrap)
}

impl SnapshotSink for DirSink {
    fn write_snapshot(&mut self, second: u32, status: &PortalStatus) -> Result<()> {
        let bytes = encode_snapshot(second, status)?;
        let path = self.snapshot_path(second);
        write_file(&path, &bytes)?;
        tracing::debug!(second, path = %path.display(), "snapshot written");
        Ok(())
    }

    fn write_done(&mut self, final_second: u32) -> Result<()> {
        let path = self.done_path(final_second);
        write_file(&path, &[])?;
        tracing::info!(final_second, path = %path.display(), "timeline complete");
        Ok(())
    }
}
