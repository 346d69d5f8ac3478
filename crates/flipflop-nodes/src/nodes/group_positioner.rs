use crate::Result;
use crate::node::{InputSpec, Node, NodeInputs, NodeOutputs, NodeSchema, OutputSpec};
use crate::positioner::{ConfigStore, PositionerConfig};

pub const GROUP_POSITIONER_ID: &str = "FlipFlop_Group_Positioner";

/// Saves the group positioner settings read by the browser extension.
pub struct GroupPositionerNode {
    store: ConfigStore,
}

impl GroupPositionerNode {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}

impl Node for GroupPositionerNode {
    fn schema(&self) -> NodeSchema {
        let defaults = PositionerConfig::default();
        NodeSchema {
            id: GROUP_POSITIONER_ID,
            display_name: "FF Group Positioner",
            category: "FlipFlop/UI",
            inputs: vec![
                InputSpec::string("group_name")
                    .default_value(defaults.group_name)
                    .placeholder("Enter the group name to position"),
                InputSpec::string("shortcut_key")
                    .default_value(defaults.shortcut_key)
                    .placeholder("Keyboard shortcut (e.g., F8, Ctrl+G)"),
                InputSpec::boolean("enabled").default_value(defaults.enabled),
                InputSpec::boolean("debug_mode").default_value(defaults.debug_mode),
            ],
            outputs: vec![OutputSpec::string("status")],
            output_node: true,
            always_execute: true,
        }
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutputs> {
        let inputs = inputs.resolve(&self.schema())?;
        let config = PositionerConfig {
            group_name: inputs.string("group_name")?.to_string(),
            shortcut_key: inputs.string("shortcut_key")?.to_string(),
            enabled: inputs.boolean("enabled")?,
            debug_mode: inputs.boolean("debug_mode")?,
        };

        self.store.save(&config)?;

        if config.debug_mode {
            log::info!("configuration saved to {}", self.store.path().display());
            log::info!("group name: {}", config.group_name);
            log::info!("shortcut key: {}", config.shortcut_key);
            log::info!("enabled: {}", config.enabled);
            log::info!("debug mode: {}", config.debug_mode);
        }

        Ok(NodeOutputs::new().with("status", config.status_line()))
    }
}
