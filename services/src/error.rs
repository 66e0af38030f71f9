use thiserror::Error;

/// Opaque failure raised by a collaborator.
///
/// Callers receive the boxed value exactly as the collaborator produced it and
/// may downcast it to the backend's concrete error type.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Common failure shapes for backends that have no richer error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}
