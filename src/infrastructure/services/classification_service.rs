//! Classification gateway - one model call per validated name

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::classification::{build_classification_request, parse_verdict};
use crate::domain::{
    ClassificationVerdict, FinishReason, GatewayError, LlmProvider, LlmResponse, NameClassifier,
    ValidatedName,
};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 60;

/// Fixed parameters for every classification call
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Name classifier backed by a chat-completion provider
#[derive(Debug)]
pub struct LlmNameClassifier {
    provider: Arc<dyn LlmProvider>,
    settings: ClassifierSettings,
}

impl LlmNameClassifier {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: ClassifierSettings) -> Self {
        Self { provider, settings }
    }

    fn interpret(
        &self,
        name: &ValidatedName,
        response: &LlmResponse,
    ) -> Result<ClassificationVerdict, GatewayError> {
        debug!(
            name = %name,
            response_id = %response.id,
            upstream_model = %response.model,
            finish_reason = ?response.finish_reason,
            completion_tokens = response.usage.as_ref().map(|u| u.completion_tokens),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            reply = %response.content(),
            "Received upstream reply"
        );

        let truncated = response.finish_reason == Some(FinishReason::Length);
        if truncated {
            warn!(
                name = %name,
                max_tokens = self.settings.max_tokens,
                "Upstream reply was cut off at max_tokens"
            );
        }

        parse_verdict(name, response.content()).map_err(|e| match e {
            GatewayError::UnparseableResponse { message } if truncated => {
                GatewayError::unparseable(format!(
                    "{} (reply truncated at max_tokens = {})",
                    message, self.settings.max_tokens
                ))
            }
            other => other,
        })
    }
}

#[async_trait]
impl NameClassifier for LlmNameClassifier {
    async fn classify(&self, name: &ValidatedName) -> Result<ClassificationVerdict, GatewayError> {
        let request = build_classification_request(
            name,
            self.settings.temperature,
            self.settings.max_tokens,
        );

        debug!(
            name = %name,
            model = %self.settings.model,
            provider = self.provider.provider_name(),
            "Calling upstream model"
        );

        let result = match self.provider.chat(&self.settings.model, request).await {
            Ok(response) => self.interpret(name, &response),
            Err(e) => Err(e),
        };

        match &result {
            Ok(verdict) => {
                info!(name = %name, prediction = %verdict.prediction, "Name classified");
            }
            Err(e) => {
                warn!(name = %name, error_code = e.code(), error = %e, "Name classification failed");
            }
        }

        result
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}
