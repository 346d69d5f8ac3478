use anyhow::{Context, Result, bail};
use flipflop_format::{Clock, FixedClock, SystemClock};
use flipflop_nodes::{ConfigStore, NodeInputs, NodeRegistry, NodeSchema};
use serde::Serialize;
use std::sync::Arc;

use crate::output::{emit, heading};
use crate::time::parse_instant;
use crate::types::OutputFormat;

fn registry(store: ConfigStore, clock: Arc<dyn Clock>) -> NodeRegistry {
    NodeRegistry::builtin(clock, store)
}

pub fn list(store: ConfigStore, format: OutputFormat) -> Result<()> {
    let schemas = registry(store, Arc::new(SystemClock)).schemas();

    emit(format, &schemas, |schemas| {
        println!(
            "{}",
            heading(&format!("{:<28} {:<22} {}", "ID", "NAME", "CATEGORY"))
        );
        for schema in schemas {
            println!(
                "{:<28} {:<22} {}",
                schema.id, schema.display_name, schema.category
            );
        }
    })
}

pub fn describe(store: ConfigStore, id: &str, format: OutputFormat) -> Result<()> {
    let schema = registry(store, Arc::new(SystemClock)).get(id)?.schema();
    emit(format, &schema, print_schema)
}

fn print_schema(schema: &NodeSchema) {
    println!("{} ({})", heading(schema.display_name), schema.id);
    println!("Category: {}", schema.category);
    if schema.output_node {
        println!("Output node: yes");
    }

    println!();
    println!("{}", heading("Inputs:"));
    for input in &schema.inputs {
        let default = input
            .default
            .as_ref()
            .map(|value| format!(" (default: {})", value))
            .unwrap_or_default();
        println!("  {:<16} {:<8}{}", input.name, input.kind, default);
    }

    println!();
    println!("{}", heading("Outputs:"));
    for output in &schema.outputs {
        println!("  {:<16} {}", output.name, output.kind);
    }
}

#[derive(Debug, Serialize)]
struct RunView {
    node: String,
    outputs: flipflop_nodes::NodeOutputs,
}

pub fn run(
    store: ConfigStore,
    id: &str,
    assignments: &[String],
    at: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let clock: Arc<dyn Clock> = match at {
        Some(text) => Arc::new(FixedClock(parse_instant(text)?)),
        None => Arc::new(SystemClock),
    };
    let nodes = registry(store, clock);
    let node = nodes.get(id)?;
    let schema = node.schema();
    let inputs = parse_assignments(&schema, assignments)?;

    log::debug!("running {} with {} input(s)", schema.id, assignments.len());
    let outputs = node
        .execute(&inputs)
        .with_context(|| format!("Node '{}' failed", schema.id))?;

    let view = RunView {
        node: schema.id.to_string(),
        outputs,
    };
    emit(format, &view, |view| {
        for (name, value) in view.outputs.iter() {
            match value.as_str() {
                Some(text) if view.outputs.iter().count() == 1 => println!("{}", text),
                Some(text) => println!("{}: {}", name, text),
                None => println!("{}: {}", name, value),
            }
        }
    })
}

/// Turn `name=value` pairs into inputs typed by the node's schema.
fn parse_assignments(schema: &NodeSchema, assignments: &[String]) -> Result<NodeInputs> {
    let mut inputs = NodeInputs::new();
    for assignment in assignments {
        let Some((name, text)) = assignment.split_once('=') else {
            bail!("Invalid input '{}': expected NAME=VALUE", assignment);
        };
        let Some(spec) = schema.input(name) else {
            bail!("Node '{}' has no input named '{}'", schema.id, name);
        };
        inputs.insert(name, spec.kind.parse_text(name, text)?);
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipflop_nodes::Node;
    use serde_json::Value;

    fn schema() -> NodeSchema {
        flipflop_nodes::GroupPositionerNode::new(ConfigStore::new("unused.json")).schema()
    }

    #[test]
    fn test_parse_assignments_types_values() {
        let inputs = parse_assignments(
            &schema(),
            &["group_name=Faces=Left".to_string(), "enabled=no".to_string()],
        )
        .unwrap();
        assert_eq!(inputs.get("group_name"), Some(&Value::from("Faces=Left")));
        assert_eq!(inputs.get("enabled"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_parse_assignments_rejects_unknown_input() {
        assert!(parse_assignments(&schema(), &["color=red".to_string()]).is_err());
    }

    #[test]
    fn test_parse_assignments_rejects_missing_equals() {
        assert!(parse_assignments(&schema(), &["enabled".to_string()]).is_err());
    }
}
