mod output_dir;
mod snapshot;

pub use output_dir::prepare_output_dir;
pub use snapshot::{
    DONE_FILE, DirSink, SNAPSHOT_DIRS, SNAPSHOT_FILE, SnapshotSink, encode_snapshot,
};
