use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::ShellConfig;
use crate::core::commands::BuiltinRegistry;
use crate::core::{Dispatcher, ShellContext, Status};
use crate::error::ShellError;
use crate::host::Host;
use crate::input::LineSource;
use crate::style::Styler;
use crate::tokenizer::tokenize;

pub const PROMPT_PREFIX: &str = "LemShell: ";

pub struct Shell {
    input: Box<dyn LineSource>,
    dispatcher: Dispatcher,
    ctx: ShellContext,
    prompt_style: String,
}

impl Shell {
    pub fn new(
        config: &ShellConfig,
        styler: Styler,
        host: Box<dyn Host>,
        input: Box<dyn LineSource>,
    ) -> Self {
        let dispatcher = Dispatcher::new(BuiltinRegistry::new())
            .report_external_failures(config.report_external_failures);

        Shell {
            input,
            dispatcher,
            ctx: ShellContext::new(host, styler),
            prompt_style: config.prompt_style.clone(),
        }
    }

    pub fn context(&self) -> &ShellContext {
        &self.ctx
    }

    /// `LemShell: <cwd>> `, with the directory read from the host each time.
    pub fn prompt(&self) -> String {
        let cwd = match self.ctx.host.current_dir() {
            Ok(dir) => dir.to_string_lossy().into_owned(),
            Err(e) => {
                warn!(error = %e, "cannot read working directory");
                "?".to_string()
            }
        };
        self.ctx
            .styler
            .paint(&format!("{PROMPT_PREFIX}{cwd}> "), &self.prompt_style)
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Runs until `exit` or end of input.
    pub fn run_with(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), ShellError> {
        info!("shell started");

        while self.ctx.is_running() {
            let prompt = self.prompt();
            let Some(line) = self.input.read_line(&prompt)? else {
                debug!("end of input");
                self.ctx.request_stop();
                break;
            };

            let tokens = tokenize(&line);
            if self.dispatcher.dispatch(tokens, &mut self.ctx, out, err)? == Status::Stop {
                break;
            }
        }

        info!("shell stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::BufReadSource;
    use crate::testing::FakeHost;
    use std::io::Cursor;

    fn shell(host: FakeHost, script: &str) -> Shell {
        let input = BufReadSource::new(Cursor::new(script.to_string()), io::sink());
        Shell::new(
            &ShellConfig::default(),
            Styler::plain(),
            Box::new(host),
            Box::new(input),
        )
    }

    fn run(shell: &mut Shell) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell.run_with(&mut out, &mut err).expect("run succeeds");
        (
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }

    #[test]
    fn test_prompt_reflects_live_directory() {
        let host = FakeHost::new("/home/lemon").with_dir("/tmp");
        let mut sh = shell(host, "cd /tmp\n");
        assert_eq!(sh.prompt(), "LemShell: /home/lemon> ");

        run(&mut sh);
        assert_eq!(sh.prompt(), "LemShell: /tmp> ");
    }

    #[test]
    fn test_prompt_is_styled() {
        let input = BufReadSource::new(Cursor::new(String::new()), io::sink());
        let sh = Shell::new(
            &ShellConfig::default(),
            Styler::colored(),
            Box::new(FakeHost::new("/")),
            Box::new(input),
        );
        assert_eq!(sh.prompt(), "\x1b[33mLemShell: /> \x1b[0m");
    }

    #[test]
    fn test_history_before_exit() {
        let mut sh = shell(FakeHost::new("/"), "foo\nbar\nhistory\nexit\nnever\n");
        let (out, _) = run(&mut sh);

        assert_eq!(out, "History\n1: bar \n0: foo \n");
        assert!(!sh.context().is_running());
        // foo, bar, history and exit; "never" is not read
        assert_eq!(sh.context().history.len(), 4);
    }

    #[test]
    fn test_end_of_input_stops() {
        let host = FakeHost::new("/");
        let mut sh = shell(host.clone(), "ls\n");
        run(&mut sh);

        assert!(!sh.context().is_running());
        assert_eq!(host.executed(), vec!["ls".to_string()]);
    }

    #[test]
    fn test_blank_lines_do_not_touch_history() {
        let mut sh = shell(FakeHost::new("/"), "\n   \nls\n\n");
        run(&mut sh);
        assert_eq!(sh.context().history.len(), 1);
    }
}
