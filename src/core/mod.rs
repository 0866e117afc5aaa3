pub mod commands;
pub mod dispatcher;
pub mod state;

pub use dispatcher::{Dispatcher, Status};
pub use state::ShellContext;
