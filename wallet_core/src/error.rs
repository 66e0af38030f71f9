use ptoken_services::ServiceError;
use ptoken_types::TokenId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    /// A parameter is missing, malformed or out of range. Raised before any
    /// collaborator is called.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    /// A bridge operation on a token without bridge configuration.
    #[error("token {token_id} does not support {capability}")]
    UnsupportedCapability {
        token_id: TokenId,
        capability: &'static str,
    },

    /// The collaborator's own error, passed through untouched.
    #[error(transparent)]
    Collaborator(ServiceError),

    #[error("coin total overflows u64")]
    Overflow,

    #[error("config error: {0}")]
    Config(String),
}

impl WalletError {
    pub(crate) fn validation(field: &'static str, reason: &'static str) -> Self {
        Self::Validation { field, reason }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedCapability { .. })
    }

    /// The collaborator error, if this failure came from one.
    pub fn collaborator_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Collaborator(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Take back ownership of the collaborator error.
    pub fn into_collaborator_error(self) -> Result<ServiceError, Self> {
        match self {
            Self::Collaborator(e) => Ok(e),
            other => Err(other),
        }
    }
}
