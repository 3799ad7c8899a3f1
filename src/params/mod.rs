//! Parameter module
//!
//! Typed access to the key-value parameter set supplied by the host runtime.
//!
//! # Overview
//!
//! This module provides:
//! - `ParameterValue` - A typed parameter value (integer, text, or transform)
//! - `ParameterSource` - Lookup-with-default access, coercing at the boundary
//! - `Parameters` - In-memory `ParameterSource` backed by a map
//! - `ParameterRegistry` - Declared parameters that bind raw host values to typed ones

mod registry;
mod source;
mod types;

pub use registry::{
    load_raw_parameters, raw_parameters_from_str, ParameterDefinition, ParameterRegistry,
    RawParameters,
};
pub use source::{ParameterSource, Parameters};
pub use types::{ParameterKind, ParameterValue};

#[cfg(test)]
mod tests;
