//! Input rules for terms and descriptions.

use crate::config::input::InputConfig;
use crate::error::input::InputError;

/// Checks typed values against the configured thresholds.
///
/// A term must be at least `min_term_length` bytes and contain no
/// whitespace. A description must hold at least `min_description_words`
/// whitespace-separated words.
#[derive(Debug, Clone)]
pub struct InputRules {
    min_term_length: usize,
    min_description_words: usize,
}

impl InputRules {
    /// Creates rules from the input configuration.
    pub fn new(config: &InputConfig) -> Self {
        Self {
            min_term_length: config.min_term_length,
            min_description_words: config.min_description_words,
        }
    }

    /// Checks a term typed for release or search.
    pub fn check_term(&self, term: &str) -> Result<(), InputError> {
        if term.len() < self.min_term_length {
            return Err(InputError::TermTooShort {
                min: self.min_term_length,
            });
        }
        if term.chars().any(char::is_whitespace) {
            return Err(InputError::TermHasWhitespace);
        }
        Ok(())
    }

    /// Checks a description typed for release.
    pub fn check_description(&self, description: &str) -> Result<(), InputError> {
        if description.split_whitespace().count() < self.min_description_words {
            return Err(InputError::DescriptionTooShort {
                min: self.min_description_words,
            });
        }
        Ok(())
    }

    /// Requirement shown in the term prompt.
    pub fn term_hint(&self) -> String {
        format!(
            "Must be more than {} characters and contains no space",
            self.min_term_length.saturating_sub(1)
        )
    }

    /// Requirement shown in the description prompt.
    pub fn description_hint(&self) -> String {
        format!("Must contain at least {} words", self.min_description_words)
    }
}

impl Default for InputRules {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}
