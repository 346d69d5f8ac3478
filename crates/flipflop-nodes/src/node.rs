use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::{Error, Result};

/// A unit of work the host can describe and execute.
///
/// `schema()` declares inputs and outputs; `execute()` receives raw inputs and
/// resolves them against that schema.
pub trait Node: Send + Sync {
    fn schema(&self) -> NodeSchema;

    fn execute(&self, inputs: &NodeInputs) -> Result<NodeOutputs>;
}

/// Value types exchanged with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueKind {
    String,
    Boolean,
}

impl ValueKind {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Boolean => value.is_boolean(),
        }
    }

    /// Convert command-line text into a value of this kind.
    pub fn parse_text(self, name: &str, text: &str) -> Result<Value> {
        match self {
            ValueKind::String => Ok(Value::String(text.to_string())),
            ValueKind::Boolean => match text.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(Value::Bool(true)),
                "false" | "no" | "0" | "off" => Ok(Value::Bool(false)),
                _ => Err(Error::InvalidInput {
                    name: name.to_string(),
                    expected: self,
                }),
            },
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ValueKind::String => "STRING",
            ValueKind::Boolean => "BOOLEAN",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: ValueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl InputSpec {
    pub fn string(name: &'static str) -> Self {
        Self::new(name, ValueKind::String)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, ValueKind::Boolean)
    }

    fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            multiline: false,
            placeholder: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl OutputSpec {
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::String,
        }
    }
}

/// Declared interface of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSchema {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
    /// Node produces a side effect and is a graph sink.
    pub output_node: bool,
    /// Node must run on every execution, even with unchanged inputs.
    pub always_execute: bool,
}

impl NodeSchema {
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|spec| spec.name == name)
    }
}

/// Raw input values keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeInputs {
    values: Map<String, Value>,
}

impl NodeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Check every declared input and fill in defaults.
    pub fn resolve(&self, schema: &NodeSchema) -> Result<ResolvedInputs> {
        for name in self.values.keys() {
            if schema.input(name).is_none() {
                log::warn!("{}: ignoring undeclared input '{}'", schema.id, name);
            }
        }

        let mut values = Map::new();
        for spec in &schema.inputs {
            let value = match (self.values.get(spec.name), &spec.default) {
                (Some(value), _) => value.clone(),
                (None, Some(default)) => default.clone(),
                (None, None) => return Err(Error::MissingInput(spec.name.to_string())),
            };
            if !spec.kind.accepts(&value) {
                return Err(Error::InvalidInput {
                    name: spec.name.to_string(),
                    expected: spec.kind,
                });
            }
            values.insert(spec.name.to_string(), value);
        }
        Ok(ResolvedInputs { values })
    }
}

/// Inputs checked against a schema; every declared input is present with the
/// declared type.
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    values: Map<String, Value>,
}

impl ResolvedInputs {
    pub fn string(&self, name: &str) -> Result<&str> {
        self.values
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingInput(name.to_string()))
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        self.values
            .get(name)
            .and_then(Value::as_bool)
            .ok_or_else(|| Error::MissingInput(name.to_string()))
    }
}

/// Output values keyed by output name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NodeOutputs {
    values: Map<String, Value>,
}

impl NodeOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> NodeSchema {
        NodeSchema {
            id: "Test",
            display_name: "Test",
            category: "Utility",
            inputs: vec![
                InputSpec::string("label").default_value("x"),
                InputSpec::boolean("flag"),
            ],
            outputs: vec![OutputSpec::string("out")],
            output_node: false,
            always_execute: false,
        }
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let inputs = NodeInputs::new().with("flag", true);
        let resolved = inputs.resolve(&schema()).unwrap();
        assert_eq!(resolved.string("label").unwrap(), "x");
        assert!(resolved.boolean("flag").unwrap());
    }

    #[test]
    fn test_resolve_rejects_missing_required() {
        let err = NodeInputs::new().resolve(&schema()).unwrap_err();
        assert!(matches!(err, Error::MissingInput(name) if name == "flag"));
    }

    #[test]
    fn test_resolve_rejects_wrong_type() {
        let inputs = NodeInputs::new().with("flag", "yes");
        let err = inputs.resolve(&schema()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput { expected: ValueKind::Boolean, .. }
        ));
    }

    #[test]
    fn test_resolve_ignores_undeclared_inputs() {
        let inputs = NodeInputs::new().with("flag", false).with("extra", 1);
        assert!(inputs.resolve(&schema()).is_ok());
    }

    #[test]
    fn test_parse_text_boolean() {
        assert_eq!(
            ValueKind::Boolean.parse_text("flag", "Yes").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            ValueKind::Boolean.parse_text("flag", "off").unwrap(),
            Value::Bool(false)
        );
        assert!(ValueKind::Boolean.parse_text("flag", "maybe").is_err());
    }

    #[test]
    fn test_schema_serializes_kinds_uppercase() {
        let json = serde_json::to_value(schema()).unwrap();
        assert_eq!(json["inputs"][0]["kind"], "STRING");
        assert_eq!(json["inputs"][1]["kind"], "BOOLEAN");
        assert!(json["inputs"][1].get("default").is_none());
    }
}
