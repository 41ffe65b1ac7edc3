//! Playback failure classification.

use std::fmt;

use thiserror::Error;

/// Why a play request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackErrorKind {
    /// Autoplay policy: no user gesture yet
    PolicyDenied,
    /// Media cannot be decoded, or the source is missing
    UnsupportedFormat,
    /// Fetch failed or was aborted
    Resource,
    /// Anything else
    Generic,
}

impl PlaybackErrorKind {
    /// Map a DOMException name to a kind.
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => PlaybackErrorKind::PolicyDenied,
            "NotSupportedError" => PlaybackErrorKind::UnsupportedFormat,
            "AbortError" | "NetworkError" => PlaybackErrorKind::Resource,
            _ => PlaybackErrorKind::Generic,
        }
    }

    /// Only a policy denial is worth retrying after a gesture.
    pub fn is_policy_denial(&self) -> bool {
        matches!(self, PlaybackErrorKind::PolicyDenied)
    }

    /// Message shown to the guest after a failed manual play.
    pub fn user_message(&self) -> &'static str {
        match self {
            PlaybackErrorKind::PolicyDenied => {
                "El navegador bloqueó la reproducción. Haz clic de nuevo para reproducir."
            }
            PlaybackErrorKind::UnsupportedFormat => {
                "Formato de audio no soportado o archivo no encontrado."
            }
            PlaybackErrorKind::Resource | PlaybackErrorKind::Generic => {
                "Error al reproducir la música. Verifica la conexión o la URL del archivo."
            }
        }
    }
}

impl fmt::Display for PlaybackErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaybackErrorKind::PolicyDenied => "autoplay denied",
            PlaybackErrorKind::UnsupportedFormat => "unsupported format",
            PlaybackErrorKind::Resource => "resource error",
            PlaybackErrorKind::Generic => "playback error",
        };
        f.write_str(label)
    }
}

/// A rejected play request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct PlaybackError {
    pub kind: PlaybackErrorKind,
    pub message: String,
}

impl PlaybackError {
    pub fn new(kind: PlaybackErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build from the `name` and `message` of a rejected `play()` promise.
    pub fn from_dom_exception(name: &str, message: impl Into<String>) -> Self {
        Self::new(PlaybackErrorKind::from_dom_name(name), message)
    }

    pub fn policy_denied() -> Self {
        Self::new(
            PlaybackErrorKind::PolicyDenied,
            "play() failed because the user didn't interact with the document first",
        )
    }

    pub fn unsupported_format() -> Self {
        Self::new(
            PlaybackErrorKind::UnsupportedFormat,
            "The element has no supported sources",
        )
    }
}
