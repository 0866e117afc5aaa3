use thiserror::Error;

pub mod executor;

pub use executor::{ExitReport, ProcessExecutor};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("could not start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed waiting for '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command exited with status {0}")]
    Failed(ExitReport),
}
