use std::fmt;

/// A failure of the underlying transport while fetching `uri`.
///
/// Only transport-level problems land here: connection, DNS or body decoding
/// errors. A response with a non-2xx status is not a failure.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {uri}: {message}")]
pub struct TransportError {
    pub uri: String,
    pub message: String,
    #[source]
    source: Option<reqwest::Error>,
}

impl TransportError {
    pub fn new(uri: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            uri: uri.into(),
            message: message.to_string(),
            source: None,
        }
    }

    pub fn from_reqwest(uri: impl Into<String>, err: reqwest::Error) -> Self {
        let message = if err.is_connect() {
            "connection failed".to_string()
        } else if err.is_body() || err.is_decode() {
            "failed to read response body".to_string()
        } else if err.is_builder() {
            "invalid request".to_string()
        } else {
            "request failed".to_string()
        };

        Self {
            uri: uri.into(),
            message,
            source: Some(err),
        }
    }
}
