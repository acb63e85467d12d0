use async_trait::async_trait;
use std::fmt::Debug;

use super::Credential;
use crate::domain::DomainError;

/// Trait for sources of the upstream API key (environment, secret store)
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    /// Load the credential; fails when it is missing or empty
    async fn get_credential(&self) -> Result<Credential, DomainError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}
