//! User-facing notices emitted by the audio controller.

use super::error::PlaybackErrorKind;

/// Something the guest should be told about the music.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioNotice {
    /// Autoplay was denied; any click will start the music
    GestureRequired,
    /// Automatic playback gave up; the button still works
    AutoplayBlocked(PlaybackErrorKind),
    /// Manual play failed
    PlaybackFailed(PlaybackErrorKind),
    /// The audio source failed to load
    MediaUnavailable,
}

impl AudioNotice {
    pub fn message(&self) -> &'static str {
        match self {
            AudioNotice::GestureRequired => {
                "Haz clic en cualquier parte de la página para comenzar la música 🎵"
            }
            AudioNotice::AutoplayBlocked(_) => {
                "Haz clic en el botón de música para comenzar la reproducción"
            }
            AudioNotice::PlaybackFailed(kind) => kind.user_message(),
            AudioNotice::MediaUnavailable => {
                "No se pudo cargar la música. Verifica la URL del archivo de audio."
            }
        }
    }

    /// Transient notices become toasts; the others are banners driven by
    /// the playback phase.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AudioNotice::PlaybackFailed(_) | AudioNotice::MediaUnavailable
        )
    }

    /// Errors are styled as destructive toasts.
    pub fn is_error(&self) -> bool {
        !matches!(self, AudioNotice::GestureRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_prompt_is_informational() {
        assert!(!AudioNotice::GestureRequired.is_error());
        assert!(!AudioNotice::GestureRequired.is_transient());
    }

    #[test]
    fn test_manual_failure_message_follows_kind() {
        let notice = AudioNotice::PlaybackFailed(PlaybackErrorKind::UnsupportedFormat);
        assert!(notice.is_transient());
        assert_eq!(
            notice.message(),
            PlaybackErrorKind::UnsupportedFormat.user_message()
        );
    }
}
