use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use super::LineSource;
use crate::error::ShellError;

/// Interactive terminal input.
///
/// Lines are never added to the editor's history, so there is no recall by
/// keystroke; the shell keeps its own ledger instead.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => return Ok(Some(line)),
                Err(ReadlineError::Interrupted) => {
                    debug!("prompt interrupted");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }
}
