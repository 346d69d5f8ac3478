//! Node definitions built on `flipflop-format`.
//!
//! Every node declares its interface through [`Node::schema`] and runs
//! through [`Node::execute`]. The [`NodeRegistry`] holds the built-in set:
//! - `FlipFlop_Text`: renders `%yyyy-MM-dd HH:mm:ss%` templates
//! - `FF Date to String`: renders `%date:yyMMdd% %time:HHmmss%` templates
//! - `FlipFlop_Group_Positioner`: saves the group positioner settings

pub mod error;
pub mod node;
pub mod nodes;
pub mod paths;
pub mod positioner;
pub mod registry;

pub use error::{Error, Result};
pub use node::{
    InputSpec, Node, NodeInputs, NodeOutputs, NodeSchema, OutputSpec, ResolvedInputs, ValueKind,
};
pub use nodes::{DateToStringNode, GroupPositionerNode, LegacyDateNode};
pub use paths::{DATA_DIR_ENV, expand_tilde, resolve_data_dir};
pub use positioner::{CONFIG_FILE_NAME, ConfigPatch, ConfigStore, PositionerConfig};
pub use registry::NodeRegistry;
