//! Configuration types for the schema processor

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaTableError};

/// Configuration for a schema processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Table title used when the main schema carries no `title`
    pub default_title: String,

    /// Maximum `allOf` nesting depth before extraction fails
    pub max_composition_depth: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            default_title: "Schema table".to_string(),
            max_composition_depth: 32,
        }
    }
}

impl ProcessorConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the composition depth bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_composition_depth == 0 {
            return Err(SchemaTableError::config(
                "max_composition_depth must be at least 1",
            ));
        }
        Ok(())
    }
}
