use async_trait::async_trait;
use std::env;

use crate::domain::{Credential, CredentialProvider, DomainError};

pub const DEFAULT_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Credential provider that reads the API key from an environment variable
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    api_key_var: String,
}

impl EnvCredentialProvider {
    pub fn new(api_key_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
        }
    }

    fn read_credential(&self) -> Result<Credential, DomainError> {
        let api_key = env::var(&self.api_key_var).map_err(|_| {
            DomainError::credential(format!(
                "Environment variable '{}' not set",
                self.api_key_var
            ))
        })?;

        if api_key.trim().is_empty() {
            return Err(DomainError::credential(format!(
                "Environment variable '{}' is empty",
                self.api_key_var
            )));
        }

        Ok(Credential::new(self.api_key_var.clone(), api_key.trim()))
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(&self) -> Result<Credential, DomainError> {
        self.read_credential()
    }

    fn provider_name(&self) -> &'static str {
        "environment"
    }
}
