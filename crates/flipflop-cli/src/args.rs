use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use flipflop_format::DEFAULT_TEMPLATE;

#[derive(Parser)]
#[command(name = "flipflop")]
#[command(about = "Render custom date/time templates and run FlipFlop nodes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (defaults to $FLIPFLOP_PATH, then the system data directory)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against the current (or given) time
    Render {
        #[arg(default_value = DEFAULT_TEMPLATE)]
        template: String,

        #[arg(long, help = "Render at this time instead of now (RFC 3339 or 'YYYY-MM-DD HH:MM:SS')")]
        at: Option<String>,

        #[arg(long, help = "Use the %date:...% / %time:...% grammar")]
        legacy: bool,
    },

    /// Show the strftime pattern a template translates to
    Pattern {
        #[arg(default_value = DEFAULT_TEMPLATE)]
        template: String,

        #[arg(long, help = "Use the %date:...% / %time:...% grammar")]
        legacy: bool,
    },

    /// List the recognized tokens
    Tokens,

    /// List, describe and run FlipFlop nodes
    Node {
        #[command(subcommand)]
        command: NodeCommand,
    },

    /// Read or change the group positioner settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum NodeCommand {
    /// List registered nodes
    List,

    /// Show a node's inputs and outputs
    Describe { id: String },

    /// Execute a node and print its outputs
    Run {
        id: String,

        #[arg(long = "input", short = 'i', value_name = "NAME=VALUE")]
        inputs: Vec<String>,

        #[arg(long, help = "Use this time as the node clock (RFC 3339 or 'YYYY-MM-DD HH:MM:SS')")]
        at: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the group positioner settings
    Show,

    /// Print the settings file location
    Path,

    /// Update the group positioner settings
    Set {
        #[arg(long)]
        group_name: Option<String>,

        #[arg(long)]
        shortcut_key: Option<String>,

        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        #[arg(long)]
        disable: bool,

        #[arg(long, conflicts_with = "no_debug")]
        debug: bool,

        #[arg(long)]
        no_debug: bool,
    },

    /// Delete the settings file so defaults apply again
    Reset,
}
