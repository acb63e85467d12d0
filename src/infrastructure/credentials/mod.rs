//! Credential provider implementations

mod env_provider;

pub use env_provider::{EnvCredentialProvider, DEFAULT_API_KEY_VAR};
