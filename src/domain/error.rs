use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Password generation failed: {0}")]
    PasswordGeneration(String),
}

/// Infrastructure failures from the external backend platform.
///
/// Provider-reported business rejections (duplicate email and the like) are
/// not errors; they travel as data in `SignUpOutcome`.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}
