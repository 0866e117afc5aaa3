//! In-memory host shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::ShellContext;
use crate::host::Host;
use crate::process::{ExitReport, ProcessError};
use crate::style::Styler;
use crate::tokenizer::tokenize;

#[derive(Debug, Default)]
struct FakeState {
    cwd: PathBuf,
    dirs: HashSet<PathBuf>,
    executed: Vec<String>,
    exit_code: i32,
    spawn_fails: bool,
}

/// Clones share state, so a test can keep a handle after boxing one.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<FakeState>>,
}

impl FakeHost {
    pub fn new(cwd: &str) -> Self {
        let host = Self::default();
        {
            let mut state = host.state.borrow_mut();
            state.cwd = PathBuf::from(cwd);
            state.dirs.insert(PathBuf::from(cwd));
        }
        host
    }

    pub fn with_dir(self, dir: &str) -> Self {
        self.state.borrow_mut().dirs.insert(PathBuf::from(dir));
        self
    }

    pub fn with_exit_code(self, code: i32) -> Self {
        self.state.borrow_mut().exit_code = code;
        self
    }

    pub fn failing_spawn(self) -> Self {
        self.state.borrow_mut().spawn_fails = true;
        self
    }

    pub fn cwd(&self) -> PathBuf {
        self.state.borrow().cwd.clone()
    }

    pub fn executed(&self) -> Vec<String> {
        self.state.borrow().executed.clone()
    }
}

impl Host for FakeHost {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd())
    }

    fn change_dir(&mut self, path: &Path) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.dirs.contains(path) {
            state.cwd = path.to_path_buf();
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        }
    }

    fn execute(&mut self, command_line: &str) -> Result<ExitReport, ProcessError> {
        let mut state = self.state.borrow_mut();
        if state.spawn_fails {
            return Err(ProcessError::Spawn {
                command: command_line.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "sh missing"),
            });
        }
        state.executed.push(command_line.to_string());
        Ok(ExitReport::with_code(state.exit_code))
    }
}

pub fn context(host: FakeHost) -> ShellContext {
    ShellContext::new(Box::new(host), Styler::plain())
}

pub fn tokens(line: &str) -> Vec<String> {
    tokenize(line)
}
