//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::{NameClassifier, NameRules};

/// Read-only state; nothing here is mutated while serving requests
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn NameClassifier>,
    pub name_rules: Arc<NameRules>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn NameClassifier>, name_rules: NameRules) -> Self {
        Self {
            classifier,
            name_rules: Arc::new(name_rules),
        }
    }
}
