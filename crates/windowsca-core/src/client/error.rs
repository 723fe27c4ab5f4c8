//! Client construction errors

use thiserror::Error;

/// Errors returned when a client cannot be built from resolved credentials
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Host value cannot be turned into an endpoint
    #[error("invalid WinRM host \"{host}\": {reason}")]
    InvalidHost { host: String, reason: String },

    /// Port is not a number in 1..=65535
    #[error("invalid WinRM port \"{0}\"")]
    InvalidPort(String),

    /// Scheme other than http or https
    #[error("unsupported WinRM scheme \"{0}\", expected http or https")]
    UnsupportedScheme(String),

    #[error("{0}")]
    Other(String),
}

impl ClientError {
    pub fn invalid_host(host: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHost {
            host: host.into(),
            reason: reason.into(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
