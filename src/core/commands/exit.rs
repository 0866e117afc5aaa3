use super::{Builtin, CommandError, ExecOutput};
use crate::core::ShellContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn help_lines(&self) -> Vec<(&'static str, &'static str)> {
        vec![("exit", "Exit the shell")]
    }

    fn execute(&self, _tokens: &[String], ctx: &mut ShellContext) -> Result<ExecOutput, CommandError> {
        ctx.request_stop();
        Ok(ExecOutput::stop())
    }
}
