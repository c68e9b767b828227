//! Testing infrastructure for ducklett integration tests.
//!
//! - `TestWorld`: an isolated data directory plus a configured CLI runner
//! - `assertions`: checks against the storage file and `status --format json`

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
