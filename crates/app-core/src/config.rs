//! Login flow configuration
//!
//! Every field has a default, so an empty JSON object is a complete
//! configuration.

use crate::phone::VALID_DIGIT_COUNTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum length of the phone text field
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 15;

/// Default UI language tag
pub const DEFAULT_LANGUAGE: &str = "vi";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the flow cannot use
    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for the phone login flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginConfig {
    /// Characters accepted by the phone field before it stops taking input
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,

    /// Digit counts that make a number complete
    #[serde(default = "default_valid_digit_counts")]
    pub valid_digit_counts: Vec<usize>,

    /// Preferred UI language tag
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_max_input_length() -> usize {
    DEFAULT_MAX_INPUT_LENGTH
}

fn default_valid_digit_counts() -> Vec<usize> {
    VALID_DIGIT_COUNTS.to_vec()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            max_input_length: default_max_input_length(),
            valid_digit_counts: default_valid_digit_counts(),
            language: default_language(),
        }
    }
}

impl LoginConfig {
    /// Parses and validates a JSON configuration
    ///
    /// # Example
    ///
    /// ```
    /// use app_core::config::LoginConfig;
    ///
    /// let config = LoginConfig::from_json(r#"{ "language": "en" }"#).unwrap();
    /// assert_eq!(config.language, "en");
    /// assert_eq!(config.max_input_length, 15);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == 0 {
            return Err(ConfigError::Invalid {
                field: "maxInputLength",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.valid_digit_counts.is_empty() {
            return Err(ConfigError::Invalid {
                field: "validDigitCounts",
                reason: "must list at least one digit count".to_string(),
            });
        }

        if self.language.trim().is_empty() {
            tracing::warn!("Empty language tag in config, falling back to {}", DEFAULT_LANGUAGE);
        }

        Ok(())
    }

    /// Truncates text to the field's maximum length, counted in characters
    pub fn clamp_input<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.max_input_length) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}
