use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Every way an update run can stop. None of these are recovered from.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("{tool} not found, can't update {purpose}")]
    ToolMissing { tool: String, purpose: &'static str },

    #[error("Failed to get Blender git branch")]
    BranchDetection(#[source] Box<UpdateError>),

    #[error("`{command}` failed ({status})")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Failed to execute `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read library directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, UpdateError>;
