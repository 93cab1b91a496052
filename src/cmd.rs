use std::process::Command;

use crate::error::ProcessError;

/// Executes external commands on behalf of the service controller
pub trait Runner: Send + Sync {
    /// Run a command with inherited stdio, succeeding only on exit status 0
    fn status(&self, program: &str, args: &[&str]) -> Result<(), ProcessError>;

    /// Run a command and capture stdout followed by stderr as text
    ///
    /// A nonzero exit yields `ProcessError::Failed` carrying the captured text.
    fn output(&self, program: &str, args: &[&str]) -> Result<String, ProcessError>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Runner for SystemRunner {
    fn status(&self, program: &str, args: &[&str]) -> Result<(), ProcessError> {
        tracing::debug!("> {} {}", program, args.join(" "));

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ProcessError::Failed {
                program: program.to_string(),
                code: status.code(),
                output: String::new(),
            });
        }

        Ok(())
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<String, ProcessError> {
        tracing::debug!("> {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        // Keep the last stdout line apart from the first stderr line
        if !text.is_empty() && !text.ends_with('\n') && !stderr.is_empty() {
            text.push('\n');
        }
        text.push_str(&stderr);

        if !output.status.success() {
            return Err(ProcessError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                output: text,
            });
        }

        Ok(text)
    }
}
