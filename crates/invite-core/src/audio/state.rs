//! Playback phase and the read-only snapshot published to the UI.

/// Playback phase.
///
/// Waiting for a gesture and being blocked are separate variants, so the
/// two recovery modes can never be active at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioPhase {
    /// Paused or not started
    #[default]
    Idle,
    /// Media buffering or a play request outstanding
    Loading,
    Playing,
    /// Autoplay was denied by policy; the next gesture retries
    AwaitingGesture,
    /// Autoplay failed for good; the manual toggle is the only way in
    Blocked,
}

/// Snapshot of the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioSnapshot {
    pub phase: AudioPhase,
    /// One-shot latch for the automatic attempt
    pub autoplay_attempted: bool,
    /// A play request is outstanding
    pub request_in_flight: bool,
}

impl AudioSnapshot {
    pub fn playing(&self) -> bool {
        self.phase == AudioPhase::Playing
    }

    pub fn loading(&self) -> bool {
        self.phase == AudioPhase::Loading
    }

    pub fn awaiting_gesture(&self) -> bool {
        self.phase == AudioPhase::AwaitingGesture
    }

    pub fn autoplay_blocked(&self) -> bool {
        self.phase == AudioPhase::Blocked
    }

    /// Whether the floating label next to the button should be shown.
    pub fn has_status_label(&self) -> bool {
        self.phase != AudioPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_flags_are_exclusive() {
        for phase in [
            AudioPhase::Idle,
            AudioPhase::Loading,
            AudioPhase::Playing,
            AudioPhase::AwaitingGesture,
            AudioPhase::Blocked,
        ] {
            let snap = AudioSnapshot {
                phase,
                ..Default::default()
            };
            assert!(!(snap.awaiting_gesture() && snap.autoplay_blocked()));
            assert!(!(snap.playing() && snap.loading()));
        }
    }

    #[test]
    fn test_default_is_idle() {
        let snap = AudioSnapshot::default();
        assert_eq!(snap.phase, AudioPhase::Idle);
        assert!(!snap.has_status_label());
    }
}
