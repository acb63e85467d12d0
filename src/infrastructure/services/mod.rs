//! Infrastructure services

mod classification_service;

pub use classification_service::{
    ClassifierSettings, LlmNameClassifier, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
