use std::env;
use std::io::{self, IsTerminal};

use lemshell::config::ShellConfig;
use lemshell::error::ShellError;
use lemshell::flags::Flags;
use lemshell::host::SystemHost;
use lemshell::input::{BufReadSource, EditorSource, LineSource};
use lemshell::shell::Shell;
use lemshell::style::Styler;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("LemShell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(flags.is_set("debug"));

    let config = ShellConfig::load(&flags)?;
    info!(?config, "configuration loaded");

    let styler = Styler::detect(config.color);
    let input: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(BufReadSource::new(io::stdin().lock(), io::stdout()))
    };

    let mut shell = Shell::new(&config, styler, Box::new(SystemHost::new()), input);
    shell.run()
}

fn init_tracing(debug: bool) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        if let Ok(directive) = "lemshell=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
