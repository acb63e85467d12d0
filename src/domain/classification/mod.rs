//! Name classification domain: validation, prompt construction and reply parsing

mod classifier;
mod entity;
mod error;
mod parser;
mod prompt;
mod validation;

pub use classifier::NameClassifier;
pub use entity::{ClassificationRequest, ClassificationVerdict, Prediction};
pub use error::GatewayError;
pub use parser::parse_verdict;
pub use prompt::{build_classification_request, SYSTEM_PROMPT};
pub use validation::{
    validate_name, NameRules, NameValidationError, ValidatedName, ValidationErrorCode,
    DEFAULT_ALLOWED_PUNCTUATION, DEFAULT_MAX_NAME_LENGTH,
};

#[cfg(test)]
pub use classifier::mock::StubNameClassifier;
