use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,
}

/// Failure of a call to the model service.
///
/// The display text is what ends up in the session's error field, so it
/// reads as a sentence for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("model service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("classifier is misconfigured: {0}")]
    Config(String),
}
