use std::io::Write;

use tracing::{debug, warn};

use super::commands::BuiltinRegistry;
use super::ShellContext;
use crate::error::ShellError;
use crate::process::ProcessError;
use crate::tokenizer::is_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Stop,
}

/// Routes a token sequence to a built-in or to the host.
pub struct Dispatcher {
    registry: BuiltinRegistry,
    report_external_failures: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(BuiltinRegistry::new())
    }
}

impl Dispatcher {
    pub fn new(registry: BuiltinRegistry) -> Self {
        Self {
            registry,
            report_external_failures: false,
        }
    }

    pub fn report_external_failures(mut self, enabled: bool) -> Self {
        self.report_external_failures = enabled;
        self
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    /// Runs one command and records it in the history when it succeeded.
    ///
    /// Blank sequences are a no-op. Command failures are written to `err` and
    /// never stop the shell; only write failures are returned.
    pub fn dispatch(
        &self,
        tokens: Vec<String>,
        ctx: &mut ShellContext,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Status, ShellError> {
        if is_blank(&tokens) {
            return Ok(Status::Continue);
        }

        let recorded = match self.registry.get(&tokens[0]) {
            Some(builtin) => {
                debug!(command = %tokens[0], "dispatching built-in");
                match builtin.execute(&tokens, ctx) {
                    Ok(result) => {
                        if let Some(text) = &result.output {
                            write!(out, "{}", text)?;
                            out.flush()?;
                        }
                        if !result.continue_running {
                            ctx.request_stop();
                        }
                        result.record
                    }
                    Err(e) => {
                        writeln!(err, "{}", ctx.styler.error(&e.to_string()))?;
                        false
                    }
                }
            }
            None => self.run_external(&tokens, ctx, out, err)?,
        };

        if recorded {
            let seq = ctx.history.append(tokens);
            debug!(seq, "recorded in history");
        }

        Ok(if ctx.is_running() {
            Status::Continue
        } else {
            Status::Stop
        })
    }

    /// Returns whether the command was started.
    fn run_external(
        &self,
        tokens: &[String],
        ctx: &mut ShellContext,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<bool, ShellError> {
        // Arguments are not re-quoted; the host shell splits them again.
        let command_line = tokens.join(" ");
        debug!(%command_line, "dispatching external command");

        // The child shares our terminal.
        out.flush()?;

        match ctx.host.execute(&command_line) {
            Ok(report) => {
                if !report.is_success() {
                    debug!(%report, "external command failed");
                    if self.report_external_failures {
                        let failure = ProcessError::Failed(report);
                        writeln!(err, "{}", ctx.styler.error(&failure.to_string()))?;
                    }
                }
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "external command could not run");
                writeln!(err, "{}", ctx.styler.error(&e.to_string()))?;
                Ok(false)
            }
        }
    }
}
