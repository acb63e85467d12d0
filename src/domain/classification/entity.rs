use std::fmt;

use serde::{Deserialize, Serialize};

/// Inbound request to classify a single candidate name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub name: String,
}

/// Binary verdict returned by the upstream model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "Realistic")]
    Realistic,
    #[serde(rename = "Not Realistic")]
    NotRealistic,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::NotRealistic => "Not Realistic",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final classification for a validated name.
///
/// `reason` is only ever set for [`Prediction::NotRealistic`], and only when the
/// model supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub name: String,
    pub prediction: Prediction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ClassificationVerdict {
    pub fn realistic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prediction: Prediction::Realistic,
            reason: None,
        }
    }

    pub fn not_realistic(name: impl Into<String>, reason: Option<String>) -> Self {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        Self {
            name: name.into(),
            prediction: Prediction::NotRealistic,
            reason,
        }
    }
}
