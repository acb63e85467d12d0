//! Infrastructure layer - adapters for external services

pub mod credentials;
pub mod llm;
pub mod logging;
pub mod services;
