use super::args::{Cli, Commands, ConfigCommand, NodeCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;
use flipflop_format::Dialect;
use flipflop_nodes::{ConfigPatch, ConfigStore, resolve_data_dir};

/// Positioner store under the resolved data directory.
fn open_store(data_dir: Option<&str>) -> Result<ConfigStore> {
    let data_dir = resolve_data_dir(data_dir)?;
    log::debug!("data directory: {}", data_dir.display());
    Ok(ConfigStore::in_dir(&data_dir))
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    match cli.command {
        Commands::Render {
            template,
            at,
            legacy,
        } => handlers::render::handle(&template, dialect(legacy), at.as_deref(), cli.format),

        Commands::Pattern { template, legacy } => {
            handlers::pattern::handle(&template, dialect(legacy), cli.format)
        }

        Commands::Tokens => handlers::tokens::handle(cli.format),

        Commands::Node { command } => {
            let store = open_store(cli.data_dir.as_deref())?;
            match command {
                NodeCommand::List => handlers::node::list(store, cli.format),
                NodeCommand::Describe { id } => handlers::node::describe(store, &id, cli.format),
                NodeCommand::Run { id, inputs, at } => {
                    handlers::node::run(store, &id, &inputs, at.as_deref(), cli.format)
                }
            }
        }

        Commands::Config { command } => {
            let store = open_store(cli.data_dir.as_deref())?;
            match command {
                ConfigCommand::Show => handlers::config::show(&store, cli.format),
                ConfigCommand::Path => handlers::config::path(&store, cli.format),
                ConfigCommand::Set {
                    group_name,
                    shortcut_key,
                    enable,
                    disable,
                    debug,
                    no_debug,
                } => {
                    let patch = ConfigPatch {
                        group_name,
                        shortcut_key,
                        enabled: flag_pair(enable, disable),
                        debug_mode: flag_pair(debug, no_debug),
                    };
                    handlers::config::set(&store, &patch, cli.format)
                }
                ConfigCommand::Reset => handlers::config::reset(&store, cli.format),
            }
        }
    }
}

fn dialect(legacy: bool) -> Dialect {
    if legacy {
        Dialect::Prefixed
    } else {
        Dialect::Blocks
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
