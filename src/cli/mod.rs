//! Command-line interface.

mod args;
pub mod build;

pub use args::{BuildArgs, Cli, Commands};
