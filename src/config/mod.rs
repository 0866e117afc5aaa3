use std::path::PathBuf;

use thiserror::Error;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

use crate::flags::Flags;
use crate::style::is_known_style;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("line {line}: expected 'key = value'")]
    Syntax { line: usize },
    #[error("line {line}: unknown key '{key}'")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: invalid value '{value}' for '{key}'")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

/// Runtime settings for a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Style name the prompt is painted with.
    pub prompt_style: String,
    pub color: bool,
    /// Print an error when an external command exits unsuccessfully.
    pub report_external_failures: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_style: "yellow".to_string(),
            color: true,
            report_external_failures: false,
        }
    }
}

impl ShellConfig {
    /// Defaults, then the rc file, then command-line flags.
    pub fn load(flags: &Flags) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match flags.get_value("config") {
            Some(path) => ConfigLoader::new().load_file(&PathBuf::from(path), &mut config)?,
            None => {
                if let Some(paths) = ConfigPaths::new() {
                    ConfigLoader::new().load_if_exists(&paths.rc_path, &mut config)?;
                }
            }
        }

        config.apply_flags(flags);
        Ok(config)
    }

    pub fn apply_flags(&mut self, flags: &Flags) {
        if flags.is_set("no-color") {
            self.color = false;
        }
        if flags.is_set("report-failures") {
            self.report_external_failures = true;
        }
    }

    pub(crate) fn set(&mut self, line: usize, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "prompt_style" => {
                if !is_known_style(value) {
                    return Err(invalid());
                }
                self.prompt_style = value.to_string();
            }
            "color" => self.color = parse_bool(value).ok_or_else(invalid)?,
            "report_external_failures" => {
                self.report_external_failures = parse_bool(value).ok_or_else(invalid)?
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt_style, "yellow");
        assert!(config.color);
        assert!(!config.report_external_failures);
    }

    #[test]
    fn test_flags_override() -> Result<(), crate::error::ShellError> {
        let mut flags = Flags::new();
        flags.parse(&["--no-color".to_string(), "-r".to_string()])?;

        let mut config = ShellConfig::default();
        config.apply_flags(&flags);
        assert!(!config.color);
        assert!(config.report_external_failures);
        Ok(())
    }

    #[test]
    fn test_set_rejects_unknown_style() {
        let mut config = ShellConfig::default();
        assert!(matches!(
            config.set(1, "prompt_style", "purple"),
            Err(ConfigError::InvalidValue { line: 1, .. })
        ));
        assert!(config.set(2, "prompt_style", "green").is_ok());
        assert_eq!(config.prompt_style, "green");
    }

    #[test]
    fn test_explicit_missing_config_is_error() -> Result<(), crate::error::ShellError> {
        let mut flags = Flags::new();
        flags.parse(&["-c".to_string(), "/no/such/lemshellrc".to_string()])?;
        assert!(matches!(
            ShellConfig::load(&flags),
            Err(ConfigError::NotFound(_))
        ));
        Ok(())
    }
}
