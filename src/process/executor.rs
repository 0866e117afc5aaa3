use std::fmt;
use std::process::{Command, Stdio};

use tracing::debug;

use super::ProcessError;

/// How an external command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    /// `None` when the process was ended by a signal.
    pub code: Option<i32>,
}

impl ExitReport {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn with_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ExitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Hands command lines to the platform shell and waits for them.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `command_line` with inherited stdio, blocking until it exits.
    pub fn run(&self, command_line: &str) -> Result<ExitReport, ProcessError> {
        debug!(command_line, "spawning external command");

        let mut child = platform_command(command_line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        let status = child.wait().map_err(|source| ProcessError::Wait {
            command: command_line.to_string(),
            source,
        })?;

        debug!(?status, "external command finished");
        Ok(ExitReport {
            code: status.code(),
        })
    }
}

#[cfg(windows)]
fn platform_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

#[cfg(not(windows))]
fn platform_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}
