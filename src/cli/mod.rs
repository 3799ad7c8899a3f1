//! CLI module
//!
//! Command-line interface for inspecting writer configuration.
//!
//! # Commands
//!
//! - `resolve` - Bind parameters and print the resolved writer config
//! - `keys` - List recognized writer parameters and their defaults

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
