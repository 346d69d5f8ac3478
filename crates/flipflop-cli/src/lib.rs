mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod output;
pub mod time;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, NodeCommand};
pub use commands::run;
