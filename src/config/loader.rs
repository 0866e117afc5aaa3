use std::{fs, path::Path};

use tracing::debug;

use super::{ConfigError, ShellConfig};

/// Reads `key = value` rc files into a [`ShellConfig`].
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_if_exists(&self, path: &Path, config: &mut ShellConfig) -> Result<(), ConfigError> {
        if path.exists() {
            self.load_file(path, config)
        } else {
            debug!(path = %path.display(), "no rc file");
            Ok(())
        }
    }

    pub fn load_file(&self, path: &Path, config: &mut ShellConfig) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading rc file");
        self.load_str(&content, config)
    }

    pub fn load_str(&self, content: &str, config: &mut ShellConfig) -> Result<(), ConfigError> {
        for (idx, line) in content.lines().enumerate() {
            self.process_line(idx + 1, line, config)?;
        }
        Ok(())
    }

    fn process_line(&self, number: usize, line: &str, config: &mut ShellConfig) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(ConfigError::Syntax { line: number })?;

        let mut value = value.trim();
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        config.set(number, key.trim(), value)
    }
}
