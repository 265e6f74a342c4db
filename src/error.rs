use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a generator run can fail. All of them are terminal.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("could not create {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("could not inspect {}: {source}", .path.display())]
    StatOutput { path: PathBuf, source: io::Error },

    #[error("could not list {}: {source}", .path.display())]
    ListOutput { path: PathBuf, source: io::Error },

    #[error("scenario directory {} has files already in it", .path.display())]
    OutputNotEmpty { path: PathBuf },

    #[error("test data generation failed writing {}: {source}", .path.display())]
    WriteSnapshot { path: PathBuf, source: io::Error },

    #[error("test data generation failed encoding second {second}: {source}")]
    Encode {
        second: u32,
        source: serde_json::Error,
    },
}

impl GenError {
    /// Process exit status for this failure site. Distinct per site.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::CreateOutput { .. } => -1,
            GenError::StatOutput { .. } => -2,
            GenError::ListOutput { .. } => -3,
            GenError::OutputNotEmpty { .. } => -4,
            GenError::WriteSnapshot { .. } | GenError::Encode { .. } => -5,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
