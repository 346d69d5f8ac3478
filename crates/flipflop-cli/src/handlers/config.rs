use anyhow::{Result, bail};
use flipflop_nodes::{ConfigPatch, ConfigStore, PositionerConfig};
use serde::Serialize;

use crate::output::{emit, heading};
use crate::types::OutputFormat;

fn print_config(config: &PositionerConfig) {
    println!("{}", heading("Group positioner"));
    println!("  group_name:   {}", config.group_name);
    println!("  shortcut_key: {}", config.shortcut_key);
    println!("  enabled:      {}", config.enabled);
    println!("  debug_mode:   {}", config.debug_mode);
}

pub fn show(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let config = store.load()?;
    emit(format, &config, print_config)
}

#[derive(Debug, Serialize)]
struct PathView {
    path: String,
    exists: bool,
}

pub fn path(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let view = PathView {
        path: store.path().display().to_string(),
        exists: store.exists(),
    };
    emit(format, &view, |view| println!("{}", view.path))
}

pub fn set(store: &ConfigStore, patch: &ConfigPatch, format: OutputFormat) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to update: pass at least one of --group-name, --shortcut-key, --enable/--disable, --debug/--no-debug");
    }

    let config = store.update(patch)?;
    log::info!("saved {}", store.path().display());

    emit(format, &config, |config| println!("{}", config.status_line()))
}

pub fn reset(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let config = store.reset()?;
    emit(format, &config, |config| {
        println!("Reset to defaults: {}", config.status_line())
    })
}
