use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert("help", Flag::switch("-h", "--help", "Print this help message"));
        flags.insert("version", Flag::switch("-v", "--version", "Show version information"));
        flags.insert(
            "config",
            Flag {
                takes_value: true,
                ..Flag::switch("-c", "--config", "Read settings from this rc file")
            },
        );
        flags.insert("debug", Flag::switch("-d", "--debug", "Enable debug logging"));
        flags.insert(
            "report-failures",
            Flag::switch("-r", "--report-failures", "Report external commands that exit unsuccessfully"),
        );
        flags.insert("no-color", Flag::switch("-n", "--no-color", "Disable colored output"));

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::Flag(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = iter
                    .next()
                    .ok_or_else(|| ShellError::Flag(format!("Flag {} requires a value", arg)))?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: lemshell [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<20} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_and_long() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["-d", "--no-color"]))?;
        assert!(flags.is_set("debug"));
        assert!(flags.is_set("no-color"));
        assert!(!flags.is_set("help"));
        Ok(())
    }

    #[test]
    fn test_config_takes_value() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["--config", "/tmp/rc", "-r"]))?;
        assert_eq!(flags.get_value("config").map(String::as_str), Some("/tmp/rc"));
        assert!(flags.is_set("report-failures"));
        Ok(())
    }

    #[test]
    fn test_config_missing_value() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-c"])),
            Err(ShellError::Flag(_))
        ));
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["--frobnicate"])),
            Err(ShellError::Flag(_))
        ));
    }
}
