//! Error taxonomy for a search run
//!
//! Every failure is funnelled into one of three categories so the binary can
//! report each one distinctly before exiting.

use thiserror::Error;

pub type SearchResult<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The call completed but the service answered with an error
    #[error("service error {code}: {message}")]
    Service { code: u16, message: String },

    /// The request could not be completed
    #[error("transport error: {cause}: {message}")]
    Transport { cause: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SearchError {
    pub fn service(code: u16, message: impl Into<String>) -> Self {
        Self::Service {
            code,
            message: message.into(),
        }
    }

    pub fn transport(cause: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            cause: cause.into(),
            message: message.into(),
        }
    }

    pub fn other(message: impl std::fmt::Display) -> Self {
        Self::Other(anyhow::anyhow!("{}", message))
    }

    /// Single-line report written to stderr by the binary
    pub fn report(&self) -> String {
        match self {
            Self::Service { code, message } => {
                format!("There was a service error: {} : {}", code, message)
            }
            Self::Transport { cause, message } => {
                format!("There was an IO error: {} : {}", cause, message)
            }
            Self::Other(err) => format!("{:?}", err),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else if err.is_body() || err.is_decode() {
            "body"
        } else if err.is_request() {
            "request"
        } else {
            "http"
        };
        // The request URL carries the API key.
        let err = err.without_url();
        let message = match std::error::Error::source(&err) {
            Some(source) => format!("{} ({})", err, source),
            None => err.to_string(),
        };
        Self::transport(cause, message)
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::transport(format!("{:?}", err.kind()), err.to_string())
    }
}
