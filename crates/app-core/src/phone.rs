//! Phone number input formatting
//!
//! Normalizes raw keystrokes from the phone field into the masked display
//! form used by the login screen, and decides when the number is complete.
//!
//! Two national forms are recognized:
//! - `84...` is shown with the country code, e.g. `+84 912 345 678`
//! - `0...` is shown as a trunk-prefixed number, e.g. `0912 345 678`
//!
//! Anything else is shown as bare digits. The significant part after the
//! prefix is grouped 3-3-3; digits past the ninth are dropped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Country calling code recognized at the start of the digits
pub const COUNTRY_CODE: &str = "84";

/// Trunk prefix for national numbers
pub const TRUNK_PREFIX: &str = "0";

/// Size of each digit group
pub const GROUP_SIZE: usize = 3;

/// Number of groups rendered after the prefix
pub const GROUP_COUNT: usize = 3;

/// Digit counts accepted as a complete number
pub const VALID_DIGIT_COUNTS: [usize; 2] = [10, 11];

/// Errors raised while the user is typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PhoneInputError {
    /// The text contains something other than digits and `+`
    #[error("Phone number may only contain digits")]
    NonNumericInput,
}

/// Result type for phone input checks
pub type Result<T> = std::result::Result<T, PhoneInputError>;

/// Outcome of running one text change through the formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedInput {
    /// Masked display text
    pub text: String,
    /// Error raised by the raw text, if any
    pub error: Option<PhoneInputError>,
    /// Whether the display text is a complete number
    pub is_valid: bool,
}

fn non_numeric_regex() -> &'static Regex {
    static NON_NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
    NON_NUMERIC_REGEX.get_or_init(|| Regex::new(r"[^0-9+]").unwrap())
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checks raw text for characters other than digits and `+`
///
/// Whitespace is ignored. A lone `+` is accepted.
///
/// # Example
///
/// ```
/// use app_core::phone::{check, PhoneInputError};
///
/// assert!(check("+84 912").is_ok());
/// assert_eq!(check("0912a"), Err(PhoneInputError::NonNumericInput));
/// ```
pub fn check(text: &str) -> Result<()> {
    if non_numeric_regex().is_match(&strip_whitespace(text)) {
        return Err(PhoneInputError::NonNumericInput);
    }
    Ok(())
}

/// Formats raw text into the masked display form
///
/// Non-digit characters are dropped silently; use [`check`] to surface them.
///
/// # Example
///
/// ```
/// use app_core::phone::format;
///
/// assert_eq!(format("0912345678"), "0912 345 678");
/// assert_eq!(format("84912345678"), "+84 912 345 678");
/// assert_eq!(format("12345"), "12345");
/// ```
pub fn format(text: &str) -> String {
    let cleaned = digits_only(text);

    let formatted = if let Some(rest) = cleaned.strip_prefix(COUNTRY_CODE) {
        format!("+{} {}", COUNTRY_CODE, group_digits(rest))
    } else if let Some(rest) = cleaned.strip_prefix(TRUNK_PREFIX) {
        format!("{}{}", TRUNK_PREFIX, group_digits(rest))
    } else {
        cleaned
    };

    formatted.trim().to_string()
}

/// Splits digits into up to [`GROUP_COUNT`] space separated groups
///
/// Digits that do not fit in the groups are dropped.
pub fn group_digits(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(GROUP_SIZE)
        .take(GROUP_COUNT)
        // input is ASCII digits only
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts the ASCII digits in a string, ignoring `+` and spaces
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Returns true when the text holds a complete number
///
/// Uses the default [`VALID_DIGIT_COUNTS`].
pub fn validate(text: &str) -> bool {
    validate_with(text, &VALID_DIGIT_COUNTS)
}

/// Returns true when the digit count of `text` is one of `valid_counts`
pub fn validate_with(text: &str, valid_counts: &[usize]) -> bool {
    valid_counts.contains(&digit_count(text))
}

/// Runs a text change through check, format and validate
///
/// The error and the validity are independent: text can be valid while
/// the raw input still carried a stray character.
pub fn process(text: &str, valid_counts: &[usize]) -> FormattedInput {
    let error = check(text).err();
    let formatted = format(text);
    let is_valid = validate_with(&formatted, valid_counts);

    tracing::debug!(
        digits = digit_count(&formatted),
        is_valid,
        has_error = error.is_some(),
        "Formatted phone input"
    );

    FormattedInput {
        text: formatted,
        error,
        is_valid,
    }
}
