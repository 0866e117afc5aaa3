use std::io::{BufRead, Write};

use super::LineSource;
use crate::error::ShellError;

/// Line input from any reader, used when stdin is not a terminal.
pub struct BufReadSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> BufReadSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    pub fn into_prompt_out(self) -> W {
        self.prompt_out
    }
}

impl<R: BufRead, W: Write> LineSource for BufReadSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
