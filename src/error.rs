use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single external command
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started at all (missing binary, permissions)
    #[error("Failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("{program} failed with exit code {code:?}")]
    Failed {
        program: String,
        code: Option<i32>,
        /// Combined stdout and stderr, empty when output was not captured
        output: String,
    },
}

impl ProcessError {
    /// Captured output of a failed run, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            ProcessError::Failed { output, .. } => Some(output),
            ProcessError::Spawn { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Command(#[from] ProcessError),

    #[error(
        "Unable to detect {name} as systemd, Upstart {} or SysV {}",
        upstart.display(),
        sysv.display()
    )]
    Unclassified {
        name: String,
        upstart: PathBuf,
        sysv: PathBuf,
    },

    #[error("Failed to update override {}", path.display())]
    Override {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
