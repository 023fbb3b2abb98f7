use thiserror::Error;

/// Closed set of failure kinds a generation call can surface.
///
/// Every error is logged with full context at its point of detection and then
/// propagated unchanged; there is no silent recovery and no automatic retry.
/// Mapping these kinds to transport responses is the caller's concern.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid message role: {0}")]
    InvalidRole(String),

    #[error("Authentication rejected by completion service: {0}")]
    Authentication(String),

    #[error("Rate limited by completion service: {0}")]
    RateLimit(String),

    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Completion request timed out: {0}")]
    Timeout(String),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown completion error: {0}")]
    Unknown(String),
}

impl GenerationError {
    pub fn invalid_role(msg: impl Into<String>) -> Self {
        Self::InvalidRole(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn rate_limit(msg: impl Into<String>) -> Self {
        Self::RateLimit(msg.into())
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    pub fn is_invalid_role(&self) -> bool {
        matches!(self, Self::InvalidRole(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit(_))
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}
