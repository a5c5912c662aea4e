//! The errors thrown by the commands

/// All the possible errors returned by the client and the provider
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider handled the request but rejected it, with a reason
    #[error("rejected by the provider: {reason}")]
    Provider { reason: String },
    /// Error raised by the underlying http client
    #[error("unable to reach the provider")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to decode the provider response")]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }
}
