//! Supported languages and negotiation

use crate::{I18nError, Result};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Languages with bundled translations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese
    #[default]
    Vi,
    /// English
    En,
}

impl Language {
    /// All bundled languages, default first
    pub fn all() -> [Language; 2] {
        [Language::Vi, Language::En]
    }

    /// BCP 47 tag
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }

    /// Parsed language identifier
    pub fn langid(&self) -> LanguageIdentifier {
        // tags above are valid
        self.tag().parse().unwrap_or_default()
    }

    /// Fluent source for this language
    pub(crate) fn source(&self) -> &'static str {
        match self {
            Language::Vi => include_str!("../locales/vi.ftl"),
            Language::En => include_str!("../locales/en.ftl"),
        }
    }

    fn from_langid(langid: &LanguageIdentifier) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|lang| lang.langid().language == langid.language)
    }

    /// Picks the best bundled language for a requested tag
    ///
    /// An empty tag yields the default language; an unsupported but
    /// well-formed tag falls back to the default as well.
    ///
    /// # Example
    ///
    /// ```
    /// use i18n::lang::Language;
    ///
    /// assert_eq!(Language::negotiate("en-US").unwrap(), Language::En);
    /// assert_eq!(Language::negotiate("fr").unwrap(), Language::Vi);
    /// ```
    pub fn negotiate(requested: &str) -> Result<Self> {
        let requested = requested.trim();
        if requested.is_empty() {
            return Ok(Self::default());
        }

        let requested: LanguageIdentifier = requested
            .parse()
            .map_err(|_| I18nError::InvalidLanguage(requested.to_string()))?;

        let available: Vec<LanguageIdentifier> =
            Self::all().iter().map(Language::langid).collect();
        let default = Self::default().langid();

        let negotiated = negotiate_languages(
            &[requested],
            &available,
            Some(&default),
            NegotiationStrategy::Lookup,
        );

        Ok(negotiated
            .first()
            .and_then(|langid| Self::from_langid(langid))
            .unwrap_or_default())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
