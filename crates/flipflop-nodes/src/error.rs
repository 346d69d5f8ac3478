use std::fmt;

use crate::node::ValueKind;

/// Result type for flipflop-nodes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while describing or executing nodes
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Stored configuration could not be read or written as JSON
    Json(serde_json::Error),

    /// Configuration location could not be resolved
    Config(String),

    /// Configuration values were rejected
    InvalidConfig(String),

    /// No node registered under this id
    UnknownNode(String),

    /// A node with this id is already registered
    DuplicateNode(String),

    /// Required input has no value and no default
    MissingInput(String),

    /// Input value has the wrong type
    InvalidInput { name: String, expected: ValueKind },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::UnknownNode(id) => write!(f, "Unknown node: {}", id),
            Error::DuplicateNode(id) => write!(f, "Node already registered: {}", id),
            Error::MissingInput(name) => write!(f, "Missing required input: {}", name),
            Error::InvalidInput { name, expected } => {
                write!(f, "Input '{}' must be of type {}", name, expected)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_)
            | Error::InvalidConfig(_)
            | Error::UnknownNode(_)
            | Error::DuplicateNode(_)
            | Error::MissingInput(_)
            | Error::InvalidInput { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
