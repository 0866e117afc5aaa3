use std::path::Path;

use tracing::debug;

use super::{Builtin, CommandError, ExecOutput};
use crate::core::ShellContext;

/// Changes the host's working directory. No `~` expansion and no default
/// target: a bare `cd` is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn help_lines(&self) -> Vec<(&'static str, &'static str)> {
        vec![("cd", "Change the directory")]
    }

    fn execute(&self, tokens: &[String], ctx: &mut ShellContext) -> Result<ExecOutput, CommandError> {
        let target = tokens.get(1).ok_or(CommandError::MissingArgument)?;

        ctx.host.change_dir(Path::new(target)).map_err(|e| {
            debug!(dir = %target, error = %e, "cd rejected by host");
            CommandError::DirectoryNotFound
        })?;

        Ok(ExecOutput::silent())
    }
}
