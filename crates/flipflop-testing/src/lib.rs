//! Testing infrastructure for flipflop integration tests.
//!
//! - `TestWorld`: isolated data directory plus a CLI runner
//! - `assertions`: checks on JSON command output
//! - `fixtures`: fixed instants and their expected renderings

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
