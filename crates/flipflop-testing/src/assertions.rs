//! Custom assertions for flipflop JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Return `content.<field>` as a string.
pub fn content_str<'a>(json: &'a Value, field: &str) -> Result<&'a str> {
    json["content"][field]
        .as_str()
        .with_context(|| format!("Expected string 'content.{}' in JSON", field))
}

/// Assert the JSON output lists exactly these node ids, in order.
pub fn assert_node_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let nodes = json["content"]
        .as_array()
        .context("Expected 'content' array in JSON")?;

    let ids: Vec<&str> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            node["id"]
                .as_str()
                .with_context(|| format!("Node {} missing id", i))
        })
        .collect::<Result<_>>()?;

    if ids != expected {
        anyhow::bail!("Expected nodes {:?}, got {:?}", expected, ids);
    }

    Ok(())
}
