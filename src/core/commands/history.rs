use std::fmt::Write;

use super::{Builtin, CommandError, ExecOutput};
use crate::core::ShellContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    fn list(&self, ctx: &ShellContext) -> ExecOutput {
        let styler = ctx.styler;
        let mut listing = String::new();

        // writeln! into a String cannot fail
        let _ = writeln!(listing, "{}", styler.paint("History", "green"));
        for (seq, tokens) in ctx.history.list_descending() {
            let _ = writeln!(
                listing,
                "{}: {} ",
                styler.paint(&seq.to_string(), "blue"),
                tokens.join(" ")
            );
        }

        ExecOutput::text(listing)
    }
}

impl Builtin for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn help_lines(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("history", "Display the history of commands"),
            ("history -c(lear)", "Clear the history of commands"),
        ]
    }

    fn execute(&self, tokens: &[String], ctx: &mut ShellContext) -> Result<ExecOutput, CommandError> {
        if ctx.history.is_empty() {
            return Err(CommandError::EmptyHistory);
        }

        match tokens.get(1).map(String::as_str) {
            Some("-c" | "-clear") => Ok(clear_history(ctx)),
            _ => Ok(self.list(ctx)),
        }
    }
}

/// Empties the ledger and restarts numbering at 0.
///
/// The clear itself is not recorded, so the ledger stays empty afterwards.
pub fn clear_history(ctx: &mut ShellContext) -> ExecOutput {
    ctx.history.clear();
    ExecOutput::silent().unrecorded()
}
