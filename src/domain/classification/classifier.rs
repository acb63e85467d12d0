use async_trait::async_trait;
use std::fmt::Debug;

use super::{ClassificationVerdict, GatewayError, ValidatedName};

/// Trait for anything that can judge whether a validated name is realistic
#[async_trait]
pub trait NameClassifier: Send + Sync + Debug {
    /// Classify a single name with exactly one upstream attempt
    async fn classify(&self, name: &ValidatedName) -> Result<ClassificationVerdict, GatewayError>;

    /// Identifier of the model backing this classifier
    fn model(&self) -> &str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::classification::parse_verdict;

    /// Classifier that parses a canned reply, or fails with a canned error
    #[derive(Debug)]
    pub struct StubNameClassifier {
        reply: Result<String, GatewayError>,
        calls: AtomicUsize,
    }

    impl StubNameClassifier {
        pub fn replying(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(error: GatewayError) -> Self {
            Self {
                reply: Err(error),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NameClassifier for StubNameClassifier {
        async fn classify(
            &self,
            name: &ValidatedName,
        ) -> Result<ClassificationVerdict, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match &self.reply {
                Ok(reply) => parse_verdict(name, reply),
                Err(error) => Err(error.clone()),
            }
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }
}
