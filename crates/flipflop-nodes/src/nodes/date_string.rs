use flipflop_format::{Clock, DEFAULT_TEMPLATE, Dialect, SystemClock, Template};
use std::sync::Arc;

use crate::Result;
use crate::node::{InputSpec, Node, NodeInputs, NodeOutputs, NodeSchema, OutputSpec};

pub const DATE_TO_STRING_ID: &str = "FlipFlop_Text";

/// Renders `%yyyy-MM-dd HH:mm:ss%` style templates against the clock.
pub struct DateToStringNode {
    clock: Arc<dyn Clock>,
}

impl DateToStringNode {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for DateToStringNode {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Node for DateToStringNode {
    fn schema(&self) -> NodeSchema {
        NodeSchema {
            id: DATE_TO_STRING_ID,
            display_name: "FF Text",
            category: "Utility",
            inputs: vec![
                InputSpec::string("format_string")
                    .default_value(DEFAULT_TEMPLATE)
                    .placeholder("Enter format, e.g. %yyyy-MM-dd HH:mm:ss%"),
            ],
            outputs: vec![OutputSpec::string("time_string")],
            output_node: false,
            always_execute: false,
        }
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutputs> {
        let inputs = inputs.resolve(&self.schema())?;
        let template = Template::parse_with(inputs.string("format_string")?, Dialect::Blocks);
        let rendered = template.render(&self.clock.now());
        Ok(NodeOutputs::new().with("time_string", rendered))
    }
}
