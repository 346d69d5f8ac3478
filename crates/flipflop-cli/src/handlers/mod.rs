pub mod config;
pub mod node;
pub mod pattern;
pub mod render;
pub mod tokens;
