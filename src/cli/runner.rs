//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::params::{load_raw_parameters, ParameterRegistry, RawParameters};
use crate::storage::StorageOptions;
use crate::writer::WriterConfig;
use serde_json::{json, Value};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let message = self.execute()?;
        self.output_message(&message);
        Ok(())
    }

    /// Run the CLI command and return its output message
    pub fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::Resolve {
                params,
                storage,
                overrides,
            } => self.resolve(params.as_deref(), storage.as_deref(), overrides),
            Commands::Keys => Ok(self.keys()),
        }
    }

    /// Resolve a writer config from files and overrides
    fn resolve(
        &self,
        params: Option<&Path>,
        storage: Option<&Path>,
        overrides: &[String],
    ) -> Result<Value> {
        let mut raw = match params {
            Some(path) => load_raw_parameters(path)?,
            None => RawParameters::new(),
        };
        for entry in overrides {
            let (key, value) = parse_override(entry)?;
            raw.insert(key, Value::String(value));
        }

        let storage = match storage {
            Some(path) => StorageOptions::load(path)?,
            None => StorageOptions::new(),
        };

        let parameters = ParameterRegistry::writer().bind(&raw)?;
        let config = WriterConfig::new(&parameters, storage)?;

        if self.cli.verbose {
            tracing::info!(
                "Resolved writer config from {} parameter(s)",
                parameters.len()
            );
        }

        Ok(json!({
            "type": "WRITER_CONFIG",
            "config": serde_json::to_value(&config)?,
            "partitioned": config.is_partitioned(),
            "storage_options": config.storage().len()
        }))
    }

    /// List recognized parameters
    fn keys(&self) -> Value {
        let registry = ParameterRegistry::writer();
        let keys: Vec<Value> = registry
            .definitions()
            .iter()
            .map(|d| {
                json!({
                    "name": d.name,
                    "type": d.kind,
                    "default": d.default,
                    "description": d.description
                })
            })
            .collect();

        json!({
            "type": "KEYS",
            "keys": keys
        })
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Split a `KEY=VALUE` override
fn parse_override(entry: &str) -> Result<(String, String)> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| Error::config(format!("Invalid override '{entry}', expected KEY=VALUE")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::config(format!("Empty key in override '{entry}'")));
    }
    Ok((key.to_string(), value.to_string()))
}
