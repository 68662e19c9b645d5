// crates/message-catalog-gen/src/config.rs
// ============================================================================
// Module: Generator Configuration
// Description: TOML configuration for the message-catalog-gen CLI.
// Purpose: Declare which tables to compile and where to write the output.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! The CLI reads `message-catalog.toml`:
//!
//! ```toml
//! runtime_path = "::message_catalog"
//!
//! [[tables]]
//! source = "data/messages.tsv"
//! output = "src/generated/messages.rs"
//! ```
//!
//! Relative `source` and `output` paths are resolved against the directory
//! holding the config file. Unknown keys are rejected.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_RUNTIME_PATH;
use crate::GenError;
use crate::ident;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "message-catalog.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "MESSAGE_CATALOG_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Generator configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Runtime crate path used in generated code.
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
    /// Tables to compile, in order.
    #[serde(default)]
    pub tables: Vec<TableConfig>,
    /// Directory relative paths are resolved against (not serialized).
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// One definition table and its generated output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Definition table path.
    pub source: PathBuf,
    /// Generated Rust file path.
    pub output: PathBuf,
}

impl GeneratorConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is `path` when given, else `MESSAGE_CATALOG_CONFIG`, else
    /// `message-catalog.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, GenError> {
        let resolved = resolve_path(path);
        let bytes = fs::read(&resolved)
            .map_err(|err| GenError::Config(format!("{}: {err}", resolved.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(GenError::Config("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| GenError::Config("config file must be utf-8".to_string()))?;
        let base_dir = resolved.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_toml(content, base_dir)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] when the text is not valid configuration.
    pub fn from_toml(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self, GenError> {
        let mut config: Self =
            toml::from_str(content).map_err(|err| GenError::Config(err.to_string()))?;
        config.base_dir = base_dir.into();
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), GenError> {
        if !ident::is_module_path(&self.runtime_path) {
            return Err(GenError::Config(format!(
                "runtime_path `{}` is not a module path",
                self.runtime_path
            )));
        }
        if self.tables.is_empty() {
            return Err(GenError::Config("at least one [[tables]] entry is required".to_string()));
        }
        let mut outputs = BTreeSet::new();
        for table in &self.tables {
            if table.source.as_os_str().is_empty() || table.output.as_os_str().is_empty() {
                return Err(GenError::Config("table source and output must be non-empty".to_string()));
            }
            if !outputs.insert(self.resolve(&table.output)) {
                return Err(GenError::Config(format!(
                    "output {} is configured more than once",
                    table.output.display()
                )));
            }
        }
        Ok(())
    }

    /// Resolves a configured path against the config file's directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.base_dir.join(path) }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default runtime path for serde.
fn default_runtime_path() -> String {
    DEFAULT_RUNTIME_PATH.to_string()
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}
