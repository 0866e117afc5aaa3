use crate::history::HistoryLedger;
use crate::host::Host;
use crate::style::Styler;

/// Mutable state shared by the loop, the dispatcher and the built-ins.
///
/// The working directory is not stored here; it is always read from the host.
pub struct ShellContext {
    pub history: HistoryLedger,
    pub host: Box<dyn Host>,
    pub styler: Styler,
    running: bool,
}

impl ShellContext {
    pub fn new(host: Box<dyn Host>, styler: Styler) -> Self {
        Self {
            history: HistoryLedger::new(),
            host,
            styler,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn request_stop(&mut self) {
        self.running = false;
    }
}
