//! ANSI text styling for prompts, banners and error reports.

use inksac::prelude::*;

const RESET: &str = "\x1b[0m";

/// Escape sequence for a named style, `None` for names we don't know.
fn sequence(name: &str) -> Option<&'static str> {
    match name {
        "normal" => Some("\x1b[0m"),
        "blue" => Some("\x1b[34m"),
        "green" => Some("\x1b[32m"),
        "red" => Some("\x1b[31m"),
        "yellow" => Some("\x1b[33m"),
        _ => None,
    }
}

/// Wraps `text` in the color named by `name` followed by a reset.
///
/// Names are case-sensitive. Unknown names leave the text untouched.
pub fn style(text: &str, name: &str) -> String {
    match sequence(name) {
        Some(seq) => format!("{seq}{text}{RESET}"),
        None => text.to_string(),
    }
}

pub fn is_known_style(name: &str) -> bool {
    sequence(name).is_some()
}

/// Applies [`style`] only when colored output is wanted.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    /// Colors are used when requested and the terminal can show them.
    pub fn detect(requested: bool) -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            enabled: requested && !matches!(support, ColorSupport::NoColor),
        }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, name: &str) -> String {
        if self.enabled {
            style(text, name)
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, message: &str) -> String {
        self.paint(&format!("Error: {message}"), "red")
    }
}
