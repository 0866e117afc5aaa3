use std::collections::BTreeMap;

use thiserror::Error;

mod cd;
mod clear;
mod exit;
mod help;
mod history;

pub use cd::CdCommand;
pub use clear::{ClearCommand, CLEAR_SCREEN};
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::{clear_history, HistoryCommand};

use super::ShellContext;

/// Failures a built-in reports to the user. None of them stop the shell.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("No directory provided")]
    MissingArgument,
    #[error("Directory not found")]
    DirectoryNotFound,
    #[error("No history available")]
    EmptyHistory,
}

/// What a built-in produced on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub continue_running: bool,
    pub output: Option<String>,
    /// Whether the invocation belongs in the history ledger.
    pub record: bool,
}

impl ExecOutput {
    pub fn silent() -> Self {
        Self {
            continue_running: true,
            output: None,
            record: true,
        }
    }

    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            ..Self::silent()
        }
    }

    pub fn stop() -> Self {
        Self {
            continue_running: false,
            ..Self::silent()
        }
    }

    pub fn unrecorded(mut self) -> Self {
        self.record = false;
        self
    }
}

pub trait Builtin {
    fn name(&self) -> &'static str;

    /// Lines for the help banner as `(usage, description)` pairs.
    fn help_lines(&self) -> Vec<(&'static str, &'static str)>;

    fn execute(&self, tokens: &[String], ctx: &mut ShellContext) -> Result<ExecOutput, CommandError>;
}

/// Built-ins looked up by exact, case-sensitive name.
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, Box<dyn Builtin>>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// `cd`, `clear`, `exit`, `help` and `history`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CdCommand));
        registry.register(Box::new(ClearCommand));
        registry.register(Box::new(ExitCommand));
        registry.register(Box::new(HistoryCommand));

        let help = HelpCommand::new(registry.help_lines());
        registry.register(Box::new(help));
        registry
    }

    pub fn register(&mut self, command: Box<dyn Builtin>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.commands.get(name).map(|cmd| cmd.as_ref())
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn help_lines(&self) -> Vec<(&'static str, &'static str)> {
        self.commands
            .values()
            .flat_map(|cmd| cmd.help_lines())
            .collect()
    }
}
