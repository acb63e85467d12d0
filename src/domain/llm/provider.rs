use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::classification::GatewayError;

/// Trait for chat-completion backends
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a single, non-streaming chat completion request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, GatewayError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::llm::{FinishReason, Message};

    #[derive(Debug)]
    pub struct MockLlmProvider {
        reply: Result<String, GatewayError>,
        finish_reason: Option<FinishReason>,
        requests: Mutex<Vec<(String, LlmRequest)>>,
    }

    impl MockLlmProvider {
        pub fn with_reply(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                finish_reason: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(error: GatewayError) -> Self {
            Self {
                reply: Err(error),
                finish_reason: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_finish_reason(mut self, reason: FinishReason) -> Self {
            self.finish_reason = Some(reason);
            self
        }

        /// Requests received so far, with the model they targeted
        pub fn requests(&self) -> Vec<(String, LlmRequest)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn chat(
            &self,
            model: &str,
            request: LlmRequest,
        ) -> Result<LlmResponse, GatewayError> {
            self.requests
                .lock()
                .unwrap()
                .push((model.to_string(), request));

            let content = self.reply.clone()?;
            let response = LlmResponse::new("mock-1", model, Message::assistant(content));

            Ok(match &self.finish_reason {
                Some(reason) => response.with_finish_reason(reason.clone()),
                None => response,
            })
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
