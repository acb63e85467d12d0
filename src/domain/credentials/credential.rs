use std::fmt;

/// API key for the upstream model service.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    source: String,
    api_key: String,
}

impl Credential {
    pub fn new(source: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            api_key: api_key.into(),
        }
    }

    /// Where the key was loaded from, e.g. the environment variable name
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("source", &self.source)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
