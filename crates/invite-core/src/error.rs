//! Error types for the wedding invitation

use thiserror::Error;

/// Main error type for invitation operations outside the UI controllers.
///
/// The reveal and audio controllers never return errors; playback failures
/// are contained and surfaced as notices (see [`crate::audio::AudioNotice`]).
#[derive(Error, Debug)]
pub enum InviteError {
    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// RSVP submission or lookup failed
    #[error(transparent)]
    Rsvp(#[from] crate::rsvp::RsvpError),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid URL in configuration or arguments
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias using InviteError
pub type InviteResult<T> = Result<T, InviteError>;
