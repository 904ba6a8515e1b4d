//! Input rules configuration module.
//!
//! Thresholds the session applies to terms and descriptions before they are
//! handed to the index.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Input rules configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Minimum term length in bytes
    pub min_term_length: usize,

    /// Minimum number of whitespace-separated words in a description
    pub min_description_words: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_term_length: 2,
            min_description_words: 2,
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        // The index must never see an empty term
        if self.min_term_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "input.min_term_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.min_description_words == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "input.min_description_words".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
