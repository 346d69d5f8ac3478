use flipflop_format::Clock;
use std::sync::Arc;

use crate::node::{Node, NodeSchema};
use crate::nodes::{DateToStringNode, GroupPositionerNode, LegacyDateNode};
use crate::positioner::ConfigStore;
use crate::{Error, Result};

/// Nodes by id, in registration order.
#[derive(Default)]
pub struct NodeRegistry {
    nodes: Vec<Box<dyn Node>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every node shipped with this crate.
    pub fn builtin(clock: Arc<dyn Clock>, store: ConfigStore) -> Self {
        let nodes: Vec<Box<dyn Node>> = vec![
            Box::new(DateToStringNode::new(clock.clone())),
            Box::new(LegacyDateNode::new(clock)),
            Box::new(GroupPositionerNode::new(store)),
        ];
        Self { nodes }
    }

    pub fn register(&mut self, node: Box<dyn Node>) -> Result<()> {
        let id = node.schema().id;
        if self.contains(id) {
            return Err(Error::DuplicateNode(id.to_string()));
        }
        self.nodes.push(node);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.schema().id == id)
    }

    pub fn get(&self, id: &str) -> Result<&dyn Node> {
        self.nodes
            .iter()
            .find(|node| node.schema().id == id)
            .map(|node| node.as_ref())
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    pub fn display_name(&self, id: &str) -> Result<&'static str> {
        Ok(self.get(id)?.schema().display_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Node> {
        self.nodes.iter().map(|node| node.as_ref())
    }

    pub fn schemas(&self) -> Vec<NodeSchema> {
        self.iter().map(|node| node.schema()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
