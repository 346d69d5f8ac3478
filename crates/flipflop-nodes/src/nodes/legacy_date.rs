use flipflop_format::{Clock, Dialect, LEGACY_DEFAULT_TEMPLATE, SystemClock, Template};
use std::sync::Arc;

use crate::Result;
use crate::node::{InputSpec, Node, NodeInputs, NodeOutputs, NodeSchema, OutputSpec};

pub const LEGACY_DATE_ID: &str = "FF Date to String";

/// Renders `%date:yyMMdd% %time:HHmmss%` templates.
pub struct LegacyDateNode {
    clock: Arc<dyn Clock>,
}

impl LegacyDateNode {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for LegacyDateNode {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Node for LegacyDateNode {
    fn schema(&self) -> NodeSchema {
        NodeSchema {
            id: LEGACY_DATE_ID,
            display_name: "FF Date to String",
            category: "Utility",
            inputs: vec![
                InputSpec::string("format_string")
                    .default_value(LEGACY_DEFAULT_TEMPLATE)
                    .placeholder("e.g. %date:yyyyMMdd% %time:HHmmss%"),
            ],
            outputs: vec![OutputSpec::string("time_string")],
            output_node: false,
            always_execute: false,
        }
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutputs> {
        let inputs = inputs.resolve(&self.schema())?;
        let template = Template::parse_with(inputs.string("format_string")?, Dialect::Prefixed);
        Ok(NodeOutputs::new().with("time_string", template.render(&self.clock.now())))
    }
}
