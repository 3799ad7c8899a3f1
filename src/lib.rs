// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Iceberg Sink Config
//!
//! Typed, immutable writer configuration for an Iceberg table sink in a
//! streaming pipeline.
//!
//! ## Features
//!
//! - **Typed Parameters**: Raw host values are bound to declared types once, up front
//! - **Defaults**: Every writer setting has a fixed default; absence is never an error
//! - **Immutable Config**: `WriterConfig` is built once per writer and only read after
//! - **Opaque Storage**: Any storage handle is carried through untouched
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iceberg_sink_config::params::ParameterRegistry;
//! use iceberg_sink_config::storage::StorageOptions;
//! use iceberg_sink_config::writer::WriterConfig;
//!
//! let raw = serde_json::from_value(serde_json::json!({
//!     "row-group-size": "500000",
//!     "partition-key-transform": "day"
//! }))?;
//! let params = ParameterRegistry::writer().bind(&raw)?;
//! let config = WriterConfig::new(&params, StorageOptions::new())?;
//!
//! assert_eq!(config.row_group_size(), 500_000);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! host values ──► ParameterRegistry::bind ──► Parameters (ParameterSource)
//!                                                   │
//!                          storage handle ──► WriterConfig::resolve
//!                                                   │
//!                                         WriterConfig<S> (read-only)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and enumerations
pub mod types;

/// Typed host parameters and registration
pub mod params;

/// Writer configuration
pub mod writer;

/// Storage configuration handle
pub mod storage;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use params::{ParameterRegistry, ParameterSource, Parameters};
pub use storage::StorageOptions;
pub use writer::WriterConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
