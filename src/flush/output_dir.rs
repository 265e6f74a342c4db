use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GenError, Result};

/// Make sure `path` is a directory this run can own: create it when missing,
/// and refuse to continue when it already holds anything.
///
/// Nothing under `path` is modified when an existing entry is found.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|source| GenError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "created scenario directory");
        }
        Err(source) => {
            return Err(GenError::StatOutput {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let list_err = |source| GenError::ListOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(path).map_err(list_err)?;
    if let Some(entry) = entries.next() {
        entry.map_err(list_err)?;
        return Err(GenError::OutputNotEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
