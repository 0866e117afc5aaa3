use std::fmt::Write;

use super::{Builtin, CommandError, ExecOutput, CLEAR_SCREEN};
use crate::core::ShellContext;
use crate::host::os_family;

pub const SHELL_NAME: &str = "LemShell";

pub struct HelpCommand {
    lines: Vec<(&'static str, &'static str)>,
}

impl HelpCommand {
    /// `lines` are the other built-ins' entries; help adds its own.
    pub fn new(mut lines: Vec<(&'static str, &'static str)>) -> Self {
        lines.push(("help", "Display this help menu"));
        lines.sort_by_key(|(usage, _)| *usage);
        Self { lines }
    }
}

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn help_lines(&self) -> Vec<(&'static str, &'static str)> {
        vec![("help", "Display this help menu")]
    }

    fn execute(&self, _tokens: &[String], ctx: &mut ShellContext) -> Result<ExecOutput, CommandError> {
        let styler = ctx.styler;
        let mut banner = String::from(CLEAR_SCREEN);

        // writeln! into a String cannot fail
        let _ = writeln!(
            banner,
            "{} - An OS-independent shell made by a Lemon",
            styler.paint(SHELL_NAME, "yellow")
        );
        let _ = writeln!(banner, "The current operating system is: {}", os_family());
        let _ = writeln!(banner, "The following built-in commands are available:");
        for (usage, description) in &self.lines {
            let _ = writeln!(banner, "{} - {}", styler.paint(usage, "blue"), description);
        }

        Ok(ExecOutput::text(banner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::BuiltinRegistry;
    use crate::testing::{context, tokens, FakeHost};

    #[test]
    fn test_banner_lists_every_builtin() {
        let registry = BuiltinRegistry::new();
        let help = registry.get("help").expect("help registered");
        let mut ctx = context(FakeHost::new("/"));

        let out = help
            .execute(&tokens("help"), &mut ctx)
            .expect("help succeeds");
        let text = out.output.expect("banner text");

        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains(SHELL_NAME));
        assert!(text.contains(os_family()));
        for name in registry.names() {
            assert!(text.contains(&format!("\n{} - ", name)), "missing {name}");
        }
        assert!(text.contains("history -c(lear) - Clear the history of commands"));
        assert!(out.continue_running);
    }

    #[test]
    fn test_banner_order() {
        let help = HelpCommand::new(vec![("exit", "x"), ("cd", "c")]);
        let usages: Vec<_> = help.lines.iter().map(|(u, _)| *u).collect();
        assert_eq!(usages, vec!["cd", "exit", "help"]);
    }
}
