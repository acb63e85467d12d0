//! Local format checks applied before any upstream call

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for candidate names, in characters
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

/// Punctuation accepted inside a name besides letters and spaces
pub const DEFAULT_ALLOWED_PUNCTUATION: &str = "-'.";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Coarse error category exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    EmptyName,
    InvalidFormat,
}

impl ValidationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

/// Name validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum NameValidationError {
    /// Name is empty after trimming
    Empty,
    /// Name exceeds the configured maximum length
    TooLong { length: usize, max: usize },
    /// Name contains a character outside the allowed set
    InvalidCharacter { character: char },
}

impl NameValidationError {
    pub fn code(&self) -> ValidationErrorCode {
        match self {
            Self::Empty => ValidationErrorCode::EmptyName,
            Self::TooLong { .. } | Self::InvalidCharacter { .. } => {
                ValidationErrorCode::InvalidFormat
            }
        }
    }
}

impl fmt::Display for NameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Name too long: {} characters (max {})", length, max)
            }
            Self::InvalidCharacter { character } => {
                write!(
                    f,
                    "Invalid character {:?} in name: only letters, spaces and the configured punctuation are allowed",
                    character
                )
            }
        }
    }
}

impl std::error::Error for NameValidationError {}

/// Rules a candidate name must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    pub max_length: usize,
    pub allowed_punctuation: Vec<char>,
    /// Collapse internal whitespace runs into a single space before checking
    pub collapse_whitespace: bool,
}

impl NameRules {
    pub fn new(max_length: usize, allowed_punctuation: &str) -> Self {
        Self {
            max_length,
            allowed_punctuation: allowed_punctuation.chars().collect(),
            collapse_whitespace: false,
        }
    }

    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    fn is_allowed(&self, c: char) -> bool {
        c.is_alphabetic() || c == ' ' || self.allowed_punctuation.contains(&c)
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NAME_LENGTH, DEFAULT_ALLOWED_PUNCTUATION)
    }
}

/// A name that has passed [`validate_name`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedName(String);

impl ValidatedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a candidate name against `rules`.
///
/// Returns the trimmed name; casing and inner content are preserved unless
/// `collapse_whitespace` is enabled.
pub fn validate_name(name: &str, rules: &NameRules) -> Result<ValidatedName, NameValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(NameValidationError::Empty);
    }

    let candidate = if rules.collapse_whitespace {
        WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
    } else {
        trimmed.to_string()
    };

    let length = candidate.chars().count();
    if length > rules.max_length {
        return Err(NameValidationError::TooLong {
            length,
            max: rules.max_length,
        });
    }

    if let Some(character) = candidate.chars().find(|c| !rules.is_allowed(*c)) {
        return Err(NameValidationError::InvalidCharacter { character });
    }

    Ok(ValidatedName(candidate))
}
