use super::{Builtin, CommandError, ExecOutput};
use crate::core::ShellContext;

/// Erase the display and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

#[derive(Debug, Clone, Copy, Default)]
pub struct ClearCommand;

impl Builtin for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn help_lines(&self) -> Vec<(&'static str, &'static str)> {
        vec![("clear", "Clear the screen")]
    }

    fn execute(&self, _tokens: &[String], _ctx: &mut ShellContext) -> Result<ExecOutput, CommandError> {
        Ok(ExecOutput::text(CLEAR_SCREEN))
    }
}
