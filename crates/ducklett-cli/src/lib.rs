mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod tui;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ThemeChoice};
pub use commands::run;
