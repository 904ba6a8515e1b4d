//! Display configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// How lookups and listings are written to the terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `term (description)` lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Heading printed above the menu
    pub title: String,

    /// Output format for results
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Boogle Slang Word Application".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Menu title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
