use thiserror::Error;

/// Failures of the classification gateway. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network failure, timeout or a non-success status from the upstream
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Missing or rejected credential
    #[error("Upstream authentication failed: {message}")]
    UpstreamAuth { message: String },

    /// The upstream answered but the reply maps to no known verdict
    #[error("Unparseable upstream response: {message}")]
    UnparseableResponse { message: String },
}

impl GatewayError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::UpstreamAuth {
            message: message.into(),
        }
    }

    pub fn unparseable(message: impl Into<String>) -> Self {
        Self::UnparseableResponse {
            message: message.into(),
        }
    }

    /// Stable machine-readable code used in error bodies and logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::UpstreamAuth { .. } => "upstream_auth_error",
            Self::UnparseableResponse { .. } => "unparseable_response",
        }
    }
}
