//! Traits describing where zone definitions come from, plus core sources.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ConfigError;
use crate::model::RegistryDefinition;

/// Trait for configuration sources that supply an unvalidated registry.
pub trait ZoneSource: Send + Sync {
    /// Short human-readable label used in logs and error reports.
    fn name(&self) -> &str;

    /// Produce the raw definition.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the source cannot be read or decoded.
    fn definition(&self) -> Result<RegistryDefinition, ConfigError>;
}

/// Source backed by a JSON document held in memory.
#[derive(Debug, Clone)]
pub struct JsonSource {
    name: String,
    json: String,
}

impl JsonSource {
    /// Wrap a JSON document under a label.
    #[must_use]
    pub fn new<N: Into<String>, J: Into<String>>(name: N, json: J) -> Self {
        Self {
            name: name.into(),
            json: json.into(),
        }
    }
}

impl ZoneSource for JsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Result<RegistryDefinition, ConfigError> {
        parse_definition(&self.json)
    }
}

/// Source that reads a JSON file from disk each time it is asked.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    /// Create a source for the file at `path`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path the source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ZoneSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Result<RegistryDefinition, ConfigError> {
        debug!("reading zone definitions from {}", self.path.display());
        let json = fs::read_to_string(&self.path)?;
        parse_definition(&json)
    }
}

/// Decode a registry definition from JSON text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the document does not match the schema.
pub fn parse_definition(json: &str) -> Result<RegistryDefinition, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
