//! Operating system facilities the shell relies on.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::process::{ExitReport, ProcessError, ProcessExecutor};

/// Working directory and process execution as seen by the shell.
pub trait Host {
    fn current_dir(&self) -> io::Result<PathBuf>;

    fn change_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Runs a whole command line and blocks until it finishes.
    fn execute(&mut self, command_line: &str) -> Result<ExitReport, ProcessError>;
}

/// The real process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    executor: ProcessExecutor,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            executor: ProcessExecutor::new(),
        }
    }
}

impl Host for SystemHost {
    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn change_dir(&mut self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }

    fn execute(&mut self, command_line: &str) -> Result<ExitReport, ProcessError> {
        self.executor.run(command_line)
    }
}

/// Family name shown in the help banner.
pub fn os_family() -> &'static str {
    if cfg!(windows) {
        "Windows"
    } else {
        "Unix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_change_dir_is_live() {
        let original = env::current_dir().expect("cwd");
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().canonicalize().expect("canonical temp");

        let mut host = SystemHost::new();
        host.change_dir(&target).expect("cd into temp dir");
        assert_eq!(host.current_dir().expect("cwd"), target);

        env::set_current_dir(original).expect("restore cwd");
    }

    #[test]
    #[serial]
    fn test_change_dir_missing() {
        let mut host = SystemHost::new();
        assert!(host.change_dir(Path::new("/path/that/does/not/exist")).is_err());
    }

    #[test]
    fn test_os_family() {
        assert!(["Windows", "Unix"].contains(&os_family()));
    }
}
