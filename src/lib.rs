pub mod config;
pub mod core;
pub mod error;
pub mod flags;
pub mod history;
pub mod host;
pub mod input;
pub mod process;
pub mod shell;
pub mod style;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testing;
