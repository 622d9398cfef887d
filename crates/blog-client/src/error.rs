use thiserror::Error;

/// Client-side failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the API.
    #[error("Failed to connect to server")]
    Connection(#[source] reqwest::Error),

    /// The API answered with `success: false`.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The API answered with something that is not an envelope.
    #[error("Unexpected response (status {status}): {reason}")]
    Decode { status: u16, reason: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Decode { status, .. } => Some(*status),
            ClientError::Connection(_) | ClientError::InvalidUrl(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
