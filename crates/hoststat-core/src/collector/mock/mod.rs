//! Mock implementations of the collector traits for testing.

mod filesystem;
mod scenarios;

pub use filesystem::{MockFs, MockStatFs};
