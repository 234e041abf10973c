//! Internationalization for the phone login flow
//!
//! This crate provides bundled Fluent translations, language
//! negotiation, and message formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::Language;
pub use translator::{Message, Translator};

/// Localization errors
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The language tag is not well formed
    #[error("Invalid language tag: {0}")]
    InvalidLanguage(String),

    /// A bundled resource failed to parse or load
    #[error("Failed to load translations for {language}: {details}")]
    Parse {
        /// Language whose resource failed
        language: &'static str,
        /// Parser output
        details: String,
    },

    /// The message id is not in the bundle
    #[error("Missing message: {0}")]
    MissingMessage(&'static str),

    /// The message could not be formatted
    #[error("Failed to format {id}: {details}")]
    Format {
        /// Message id
        id: &'static str,
        /// Resolver output
        details: String,
    },
}

/// Result type for localization operations
pub type Result<T> = std::result::Result<T, I18nError>;
