//! Name Verdict Gateway
//!
//! Validates a candidate human name locally, then asks an upstream language
//! model whether it is realistic and returns a structured verdict.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::{CredentialProvider, DomainError};
use infrastructure::credentials::EnvCredentialProvider;
use infrastructure::llm::{HttpClient, OpenAiProvider};
use infrastructure::services::LlmNameClassifier;

/// Build application state, reading the API key from the configured
/// environment variable. Fails when the key is missing.
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let credentials = EnvCredentialProvider::new(config.classifier.api_key_env.clone());
    create_app_state_with_credentials(config, &credentials).await
}

/// Build application state with an explicit credential source
pub async fn create_app_state_with_credentials(
    config: &AppConfig,
    credentials: &dyn CredentialProvider,
) -> Result<AppState, DomainError> {
    let credential = credentials.get_credential().await?;
    info!(
        source = credentials.provider_name(),
        key = credential.source(),
        "Loaded upstream credential"
    );

    let client = HttpClient::with_timeout(config.classifier.timeout())?;
    let provider = OpenAiProvider::with_base_url(
        client,
        credential.api_key(),
        config.classifier.base_url.clone(),
    );
    let classifier = LlmNameClassifier::new(Arc::new(provider), config.classifier.settings());

    Ok(AppState::new(
        Arc::new(classifier),
        config.validation.rules(),
    ))
}
