//! Writer module
//!
//! Resolves the Iceberg writer's operating settings from host parameters.
//!
//! # Overview
//!
//! This module provides:
//! - `WriterConfig` - Immutable settings resolved once per writer instance
//! - `properties` - Recognized parameter keys and their defaults
//! - `PartitionKeyResolver` - Pluggable interpretation of the raw partition key

mod config;
mod partition;
pub mod properties;

pub use config::WriterConfig;
pub use partition::{PartitionColumns, PartitionKeyResolver, RawPartitionKey};
