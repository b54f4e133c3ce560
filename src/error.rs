use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("Please select an image file (got {0})")]
    InvalidFileType(String),
    #[error("Network error: {0}")]
    Network(String),
    /// Message reported by the object store, kept verbatim
    #[error("{0}")]
    Storage(String),
    #[error("Couldn't save message: {0}")]
    Datastore(String),
    /// Message reported by the email relay, kept verbatim
    #[error("{0}")]
    Relay(String),
    #[error("Browser API unavailable: {0}")]
    Browser(String),
    #[error("Unknown theme: {0}")]
    InvalidTheme(String),
    #[error("A message is already being sent")]
    SubmissionInFlight,
}

impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}
