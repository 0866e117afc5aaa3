mod editor;
mod reader;

pub use editor::EditorSource;
pub use reader::BufReadSource;

use crate::error::ShellError;

/// Where the shell gets its lines from.
pub trait LineSource {
    /// Shows `prompt` and returns the next line without its terminator,
    /// or `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}
