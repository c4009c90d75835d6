//! # API Errors
//!
//! Failure taxonomy surfaced by the data access client. Lookups that find
//! nothing return `None` and never reach this type.

use thiserror::Error;

/// Errors raised while talking to the remote catalog or deriving from it
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete at the protocol level
    #[error("HTTP error on '{endpoint}': {message}")]
    Transport {
        endpoint: String,
        /// `None` when no response arrived at all
        status: Option<u16>,
        message: String,
    },

    /// A response arrived but the envelope reported failure or was malformed
    #[error("API request '{endpoint}' failed: {message}")]
    ApiLogic { endpoint: String, message: String },

    /// A derivation received a value missing required fields
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub(crate) fn transport(endpoint: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            status,
            message: message.into(),
        }
    }

    pub(crate) fn api_logic(endpoint: &str, message: impl Into<String>) -> Self {
        Self::ApiLogic {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_api_logic(&self) -> bool {
        matches!(self, Self::ApiLogic { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// HTTP status carried by a transport failure, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
