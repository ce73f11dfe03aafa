use thiserror::Error;

/// Errors surfaced by [`crate::Integrator`] accessors.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The context handle was not produced by this integrator's router.
    #[error("invalid context type")]
    InvalidContextType,

    #[error("invalid status code: {0}")]
    InvalidStatus(u16),

    /// Request body was not a JSON object; serde's message is kept as-is.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Reasons a URL-encoded form could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("invalid semicolon separator in form data")]
    Semicolon,

    #[error("invalid content type: {0}")]
    InvalidContentType(String),
}
