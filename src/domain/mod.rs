//! Domain layer - Core business logic and entities

pub mod classification;
pub mod credentials;
pub mod error;
pub mod llm;

pub use classification::{
    ClassificationRequest, ClassificationVerdict, GatewayError, NameClassifier, NameRules,
    NameValidationError, Prediction, ValidatedName, ValidationErrorCode,
};
pub use credentials::{Credential, CredentialProvider};
pub use error::DomainError;
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage};
