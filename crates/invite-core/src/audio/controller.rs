//! The autoplay negotiation state machine.
//!
//! ```text
//!              on_load_start
//!   Idle ─────────────────────▶ Loading
//!    ▲                            │ on_can_play_through → on_media_ready
//!    │                            ▼
//!    │                   attempt_autoplay (latch)
//!    │          ┌─────────────────┼──────────────────────┐
//!    │        Ok│   NotAllowedError│ (unlatch)    other   │
//!    │          ▼                 ▼                      ▼
//!    │       Playing ◀──Ok── AwaitingGesture ──Err──▶ Blocked
//!    │          │         on_first_gesture (latch)       │
//!    └──toggle──┘                                        │
//!    └──────────────────── dismiss_notice ───────────────┘
//! ```
//!
//! `toggle()` is valid from every phase. It pauses when playing and
//! otherwise issues a manual play request, unless one is already in flight.

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::error::PlaybackError;
use super::gesture::{GestureKind, GestureSubscription};
use super::media::{MediaHandle, PlayOrigin};
use super::notice::AudioNotice;
use super::state::{AudioPhase, AudioSnapshot};

/// Buffer size for the notice broadcast channel.
const NOTICE_CHANNEL_SIZE: usize = 16;

/// Mutable state, only touched under the controller's lock.
struct AudioInner {
    phase: AudioPhase,
    autoplay_attempted: bool,
    /// Set by a media error; a late autoplay denial must not unlatch.
    media_failed: bool,
    in_flight: Option<PlayOrigin>,
    gesture: Option<GestureSubscription>,
    root: CancellationToken,
}

impl AudioInner {
    /// Move to `next`, keeping the gesture subscription in step with the
    /// `AwaitingGesture` phase.
    fn transition(&mut self, next: AudioPhase) {
        if self.phase == next {
            return;
        }
        if self.phase == AudioPhase::AwaitingGesture {
            if let Some(gesture) = self.gesture.take() {
                gesture.detach();
            }
        }
        if next == AudioPhase::AwaitingGesture {
            self.gesture = Some(GestureSubscription::new(self.root.child_token()));
        }
        debug!(from = ?self.phase, to = ?next, "Audio phase transition");
        self.phase = next;
    }

    fn snapshot(&self) -> AudioSnapshot {
        AudioSnapshot {
            phase: self.phase,
            autoplay_attempted: self.autoplay_attempted,
            request_in_flight: self.in_flight.is_some(),
        }
    }
}

enum ToggleAction {
    Pause,
    Play { fallback: AudioPhase },
    Busy,
}

/// Drives a looping background track through the browser's autoplay policy.
///
/// All operations take `&self`; the short critical sections never span an
/// `.await`, so events may arrive while a play request is outstanding. At
/// most one play request is in flight per controller.
///
/// # Example
///
/// ```ignore
/// let audio = Rc::new(AudioAutoplayController::new(WebviewAudio));
///
/// // forwarded from the <audio> element
/// audio.on_load_start();
/// audio.on_can_play_through().await;
///
/// // wired to the floating button
/// audio.toggle().await;
/// ```
pub struct AudioAutoplayController<M: MediaHandle> {
    media: M,
    inner: Mutex<AudioInner>,
    state_tx: watch::Sender<AudioSnapshot>,
    notice_tx: broadcast::Sender<AudioNotice>,
    cancel: CancellationToken,
}

impl<M: MediaHandle> AudioAutoplayController<M> {
    /// Create an idle controller around a media handle.
    pub fn new(media: M) -> Self {
        let cancel = CancellationToken::new();
        let (state_tx, _) = watch::channel(AudioSnapshot::default());
        let (notice_tx, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);

        Self {
            media,
            inner: Mutex::new(AudioInner {
                phase: AudioPhase::Idle,
                autoplay_attempted: false,
                media_failed: false,
                in_flight: None,
                gesture: None,
                root: cancel.clone(),
            }),
            state_tx,
            notice_tx,
            cancel,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn snapshot(&self) -> AudioSnapshot {
        self.inner.lock().snapshot()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AudioSnapshot> {
        self.state_tx.subscribe()
    }

    /// Subscribe to user-facing notices.
    pub fn notices(&self) -> broadcast::Receiver<AudioNotice> {
        self.notice_tx.subscribe()
    }

    /// The live gesture subscription, present only while awaiting a gesture.
    pub fn gesture_subscription(&self) -> Option<GestureSubscription> {
        self.inner.lock().gesture.clone()
    }

    // === Media lifecycle ===

    /// The element started fetching its source.
    pub fn on_load_start(&self) {
        self.update(|inner| {
            if inner.phase == AudioPhase::Idle {
                inner.transition(AudioPhase::Loading);
            }
        });
    }

    /// Enough data is buffered to play through.
    pub async fn on_can_play_through(&self) {
        self.update(|inner| {
            if inner.phase == AudioPhase::Loading && inner.in_flight.is_none() {
                inner.transition(AudioPhase::Idle);
            }
        });
        self.on_media_ready().await;
    }

    /// The element failed to load its source.
    ///
    /// Automatic playback is abandoned; the button keeps working.
    pub fn on_error(&self, detail: &str) {
        error!(detail, "Audio loading error");
        self.update(|inner| {
            inner.autoplay_attempted = true;
            inner.media_failed = true;
            if inner.phase != AudioPhase::Blocked {
                inner.transition(AudioPhase::Idle);
            }
        });
        self.notify(AudioNotice::MediaUnavailable);
    }

    /// Playback reached the end. The track loops, so this is rare.
    pub fn on_ended(&self) {
        self.update(|inner| {
            if inner.phase == AudioPhase::Playing {
                inner.transition(AudioPhase::Idle);
            }
        });
    }

    // === Autoplay ===

    /// Start automatic playback unless it was already attempted.
    pub async fn on_media_ready(&self) {
        let ready = {
            let inner = self.inner.lock();
            !inner.autoplay_attempted
                && inner.phase != AudioPhase::Playing
                && inner.in_flight.is_none()
        };
        if ready {
            self.attempt_autoplay().await;
        }
    }

    /// Try to play without a user gesture.
    ///
    /// A policy denial unlatches the attempt and waits for the first
    /// gesture. Any other rejection blocks automatic playback for good.
    pub async fn attempt_autoplay(&self) {
        let started = self.update(|inner| {
            if inner.autoplay_attempted
                || inner.phase == AudioPhase::Playing
                || inner.in_flight.is_some()
            {
                return false;
            }
            inner.autoplay_attempted = true;
            inner.in_flight = Some(PlayOrigin::Autoplay);
            inner.transition(AudioPhase::Loading);
            true
        });
        if !started {
            debug!("Autoplay already attempted or in progress, skipping");
            return;
        }

        let Some(result) = self.request_play(PlayOrigin::Autoplay).await else {
            return;
        };

        match result {
            Ok(()) => {
                self.update(|inner| {
                    inner.in_flight = None;
                    inner.transition(AudioPhase::Playing);
                });
                info!("Autoplay successful");
            }
            Err(err) if err.kind.is_policy_denial() => {
                let awaiting = self.update(|inner| {
                    inner.in_flight = None;
                    if inner.media_failed {
                        if inner.phase == AudioPhase::Loading {
                            inner.transition(AudioPhase::Idle);
                        }
                        return false;
                    }
                    inner.autoplay_attempted = false;
                    inner.transition(AudioPhase::AwaitingGesture);
                    true
                });
                if awaiting {
                    info!(error = %err, "Autoplay denied, waiting for user interaction");
                    self.notify(AudioNotice::GestureRequired);
                } else {
                    debug!(error = %err, "Autoplay denied after a media error, not waiting for a gesture");
                }
            }
            Err(err) => {
                self.update(|inner| {
                    inner.in_flight = None;
                    inner.transition(AudioPhase::Blocked);
                });
                warn!(error = %err, "Autoplay failed");
                self.notify(AudioNotice::AutoplayBlocked(err.kind));
            }
        }
    }

    /// First click, touch or key press after a policy denial.
    ///
    /// Only the first call while awaiting a gesture issues a request; the
    /// subscription is detached before the request goes out.
    pub async fn on_first_gesture(&self, kind: GestureKind) {
        let started = self.update(|inner| {
            if inner.phase != AudioPhase::AwaitingGesture
                || inner.autoplay_attempted
                || inner.in_flight.is_some()
            {
                return false;
            }
            inner.autoplay_attempted = true;
            inner.in_flight = Some(PlayOrigin::Gesture);
            inner.transition(AudioPhase::Loading);
            true
        });
        if !started {
            debug!(?kind, "Gesture ignored, not awaiting one");
            return;
        }

        info!(?kind, "User interaction detected, attempting to play music");
        let Some(result) = self.request_play(PlayOrigin::Gesture).await else {
            return;
        };

        match result {
            Ok(()) => {
                self.update(|inner| {
                    inner.in_flight = None;
                    inner.transition(AudioPhase::Playing);
                });
                info!("Music started after user interaction");
            }
            Err(err) => {
                self.update(|inner| {
                    inner.in_flight = None;
                    inner.transition(AudioPhase::Blocked);
                });
                warn!(error = %err, "Playback still refused after user interaction");
                self.notify(AudioNotice::AutoplayBlocked(err.kind));
            }
        }
    }

    // === Manual control ===

    /// Play/pause button.
    ///
    /// Manual failures never touch the autoplay latch. A failure started
    /// while awaiting a gesture goes back to waiting with a fresh
    /// subscription.
    pub async fn toggle(&self) {
        let action = self.update(|inner| {
            if inner.in_flight.is_some() {
                return ToggleAction::Busy;
            }
            if inner.phase == AudioPhase::Playing {
                inner.transition(AudioPhase::Idle);
                return ToggleAction::Pause;
            }
            let fallback = match inner.phase {
                AudioPhase::Blocked | AudioPhase::AwaitingGesture => inner.phase,
                _ => AudioPhase::Idle,
            };
            inner.in_flight = Some(PlayOrigin::Manual);
            inner.transition(AudioPhase::Loading);
            ToggleAction::Play { fallback }
        });

        let fallback = match action {
            ToggleAction::Busy => {
                debug!("Play request already in flight, ignoring toggle");
                return;
            }
            ToggleAction::Pause => {
                self.media.pause();
                info!("Music paused");
                return;
            }
            ToggleAction::Play { fallback } => fallback,
        };

        let Some(result) = self.request_play(PlayOrigin::Manual).await else {
            return;
        };

        match result {
            Ok(()) => {
                self.update(|inner| {
                    inner.in_flight = None;
                    inner.transition(AudioPhase::Playing);
                });
                info!("Music playing");
            }
            Err(err) => {
                self.update(|inner| {
                    inner.in_flight = None;
                    if fallback == AudioPhase::AwaitingGesture && inner.media_failed {
                        inner.transition(AudioPhase::Idle);
                    } else {
                        inner.transition(fallback);
                    }
                });
                error!(error = %err, "Playback error");
                self.notify(AudioNotice::PlaybackFailed(err.kind));
            }
        }
    }

    /// Close the persistent "autoplay blocked" banner.
    pub fn dismiss_notice(&self) {
        self.update(|inner| {
            if inner.phase == AudioPhase::Blocked {
                inner.transition(AudioPhase::Idle);
            }
        });
    }

    /// Detach listeners and abandon any in-flight request.
    ///
    /// Results of requests that resolve afterwards are discarded.
    pub fn shutdown(&self) {
        debug!("Shutting down audio controller");
        self.cancel.cancel();
        self.update(|inner| {
            if let Some(gesture) = inner.gesture.take() {
                gesture.detach();
            }
        });
    }

    // === Internals ===

    fn update<R>(&self, f: impl FnOnce(&mut AudioInner) -> R) -> R {
        let mut inner = self.inner.lock();
        let out = f(&mut inner);
        let snapshot = inner.snapshot();
        self.state_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        out
    }

    /// Issue the play request. `None` means the controller was shut down
    /// while waiting.
    async fn request_play(&self, origin: PlayOrigin) -> Option<Result<(), PlaybackError>> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!(?origin, "Controller shut down with a play request in flight");
                None
            }
            result = self.media.play(origin) => Some(result),
        }
    }

    fn notify(&self, notice: AudioNotice) {
        // No subscribers is fine.
        let _ = self.notice_tx.send(notice);
    }
}

impl<M: MediaHandle> Drop for AudioAutoplayController<M> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::*;
    use crate::audio::PlaybackErrorKind;

    /// Media whose play results are scripted; defaults to success.
    #[derive(Default)]
    struct ScriptedMedia {
        outcomes: RefCell<VecDeque<Result<(), PlaybackError>>>,
        calls: RefCell<Vec<PlayOrigin>>,
        outstanding: Cell<usize>,
        max_outstanding: Cell<usize>,
        pauses: Cell<usize>,
    }

    impl ScriptedMedia {
        fn with_outcomes(outcomes: Vec<Result<(), PlaybackError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                ..Default::default()
            }
        }
    }

    impl MediaHandle for ScriptedMedia {
        async fn play(&self, origin: PlayOrigin) -> Result<(), PlaybackError> {
            self.calls.borrow_mut().push(origin);
            self.outstanding.set(self.outstanding.get() + 1);
            self.max_outstanding
                .set(self.max_outstanding.get().max(self.outstanding.get()));
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.outstanding.set(self.outstanding.get() - 1);
            self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
        }

        fn pause(&self) {
            self.pauses.set(self.pauses.get() + 1);
        }
    }

    fn controller(outcomes: Vec<Result<(), PlaybackError>>) -> AudioAutoplayController<ScriptedMedia> {
        AudioAutoplayController::new(ScriptedMedia::with_outcomes(outcomes))
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_success() {
        let audio = controller(vec![Ok(())]);
        audio.on_load_start();
        assert!(audio.snapshot().loading());

        audio.on_can_play_through().await;
        let snap = audio.snapshot();
        assert!(snap.playing());
        assert!(snap.autoplay_attempted);
        assert!(!snap.awaiting_gesture() && !snap.autoplay_blocked());
        assert_eq!(*audio.media().calls.borrow(), vec![PlayOrigin::Autoplay]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_policy_denial_waits_for_gesture_then_plays() {
        let audio = controller(vec![Err(PlaybackError::policy_denied()), Ok(())]);
        let mut notices = audio.notices();

        audio.on_can_play_through().await;
        let snap = audio.snapshot();
        assert!(snap.awaiting_gesture());
        assert!(!snap.playing());
        assert!(!snap.autoplay_attempted, "latch is released for the retry");
        assert_eq!(notices.try_recv().unwrap(), AudioNotice::GestureRequired);

        let gesture = audio.gesture_subscription().expect("gesture listener armed");
        assert!(gesture.is_active());

        audio.on_first_gesture(GestureKind::Click).await;
        let snap = audio.snapshot();
        assert!(snap.playing());
        assert!(!snap.awaiting_gesture());
        assert!(!gesture.is_active(), "listener detached after the first gesture");
        assert!(audio.gesture_subscription().is_none());
        assert_eq!(
            *audio.media().calls.borrow(),
            vec![PlayOrigin::Autoplay, PlayOrigin::Gesture]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_decode_error_blocks_without_gesture_listener() {
        let audio = controller(vec![Err(PlaybackError::unsupported_format())]);
        let mut notices = audio.notices();

        audio.on_can_play_through().await;
        let snap = audio.snapshot();
        assert!(snap.autoplay_blocked());
        assert!(!snap.awaiting_gesture());
        assert!(audio.gesture_subscription().is_none());
        assert_eq!(
            notices.try_recv().unwrap(),
            AudioNotice::AutoplayBlocked(PlaybackErrorKind::UnsupportedFormat)
        );

        // Gestures do nothing, and readiness does not retry.
        audio.on_first_gesture(GestureKind::Click).await;
        audio.on_can_play_through().await;
        assert_eq!(audio.media().calls.borrow().len(), 1);
        assert!(audio.snapshot().autoplay_blocked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_while_playing_pauses_without_request() {
        let audio = controller(vec![Ok(())]);
        audio.on_can_play_through().await;
        assert!(audio.snapshot().playing());

        audio.toggle().await;
        assert!(!audio.snapshot().playing());
        assert_eq!(audio.media().pauses.get(), 1);
        assert_eq!(audio.media().calls.borrow().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_gesture_failure_blocks() {
        let audio = controller(vec![
            Err(PlaybackError::policy_denied()),
            Err(PlaybackError::policy_denied()),
        ]);
        audio.on_can_play_through().await;
        audio.on_first_gesture(GestureKind::Touch).await;

        let snap = audio.snapshot();
        assert!(snap.autoplay_blocked());
        assert!(!snap.awaiting_gesture());
        assert!(audio.gesture_subscription().is_none());

        audio.on_first_gesture(GestureKind::Key).await;
        assert_eq!(audio.media().calls.borrow().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simultaneous_gestures_issue_one_retry() {
        let audio = controller(vec![Err(PlaybackError::policy_denied()), Ok(())]);
        audio.on_can_play_through().await;

        tokio::join!(
            audio.on_first_gesture(GestureKind::Click),
            audio.on_first_gesture(GestureKind::Touch),
            audio.on_first_gesture(GestureKind::Key),
        );
        assert_eq!(audio.media().calls.borrow().len(), 2);
        assert!(audio.snapshot().playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_events_keep_one_request_in_flight() {
        let audio = controller(vec![]);
        tokio::join!(
            audio.on_can_play_through(),
            audio.toggle(),
            audio.attempt_autoplay(),
            audio.toggle(),
        );
        assert_eq!(audio.media().max_outstanding.get(), 1);
        assert_eq!(audio.media().calls.borrow().len(), 1);
        assert!(audio.snapshot().playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_failure_reports_and_keeps_latch() {
        let audio = controller(vec![Err(PlaybackError::new(
            PlaybackErrorKind::Generic,
            "boom",
        ))]);
        let mut notices = audio.notices();

        audio.toggle().await;
        let snap = audio.snapshot();
        assert!(!snap.playing());
        assert!(!snap.autoplay_attempted);
        assert_eq!(snap.phase, AudioPhase::Idle);
        assert_eq!(
            notices.try_recv().unwrap(),
            AudioNotice::PlaybackFailed(PlaybackErrorKind::Generic)
        );

        // Autoplay is still available afterwards.
        audio.on_can_play_through().await;
        assert!(audio.snapshot().playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_play_clears_blocked() {
        let audio = controller(vec![Err(PlaybackError::unsupported_format()), Ok(())]);
        audio.on_can_play_through().await;
        assert!(audio.snapshot().autoplay_blocked());

        audio.toggle().await;
        let snap = audio.snapshot();
        assert!(snap.playing());
        assert!(!snap.autoplay_blocked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_failure_from_blocked_stays_blocked() {
        let audio = controller(vec![
            Err(PlaybackError::unsupported_format()),
            Err(PlaybackError::unsupported_format()),
        ]);
        audio.on_can_play_through().await;
        audio.toggle().await;
        assert!(audio.snapshot().autoplay_blocked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_while_awaiting_gesture_consumes_subscription() {
        let audio = controller(vec![Err(PlaybackError::policy_denied()), Ok(())]);
        audio.on_can_play_through().await;
        let gesture = audio.gesture_subscription().unwrap();

        audio.toggle().await;
        assert!(audio.snapshot().playing());
        assert!(!gesture.is_active());

        audio.on_first_gesture(GestureKind::Click).await;
        assert_eq!(audio.media().calls.borrow().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_toggle_while_awaiting_gesture_keeps_waiting() {
        let audio = controller(vec![
            Err(PlaybackError::policy_denied()),
            Err(PlaybackError::new(PlaybackErrorKind::Generic, "decode failed")),
            Ok(()),
        ]);
        audio.on_can_play_through().await;
        let first = audio.gesture_subscription().unwrap();

        audio.toggle().await;
        let snap = audio.snapshot();
        assert!(snap.awaiting_gesture());
        assert!(!snap.autoplay_attempted);
        assert!(!first.is_active());

        let rearmed = audio.gesture_subscription().expect("gesture listener re-armed");
        assert!(rearmed.is_active());

        audio.on_first_gesture(GestureKind::Touch).await;
        assert!(audio.snapshot().playing());
        assert_eq!(
            *audio.media().calls.borrow(),
            vec![PlayOrigin::Autoplay, PlayOrigin::Manual, PlayOrigin::Gesture]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_notice_returns_to_idle() {
        let audio = controller(vec![Err(PlaybackError::unsupported_format())]);
        audio.on_can_play_through().await;
        audio.dismiss_notice();
        assert_eq!(audio.snapshot().phase, AudioPhase::Idle);

        // Still no automatic retry.
        audio.on_can_play_through().await;
        assert_eq!(audio.media().calls.borrow().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_media_error_halts_autoplay() {
        let audio = controller(vec![]);
        let mut notices = audio.notices();
        audio.on_load_start();
        audio.on_error("MEDIA_ERR_SRC_NOT_SUPPORTED");

        let snap = audio.snapshot();
        assert!(!snap.loading() && !snap.playing());
        assert_eq!(notices.try_recv().unwrap(), AudioNotice::MediaUnavailable);

        audio.on_can_play_through().await;
        assert!(audio.media().calls.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_media_error_during_autoplay_survives_policy_denial() {
        let audio = controller(vec![Err(PlaybackError::policy_denied())]);
        let mut notices = audio.notices();

        tokio::join!(audio.on_can_play_through(), async {
            tokio::task::yield_now().await;
            audio.on_error("MEDIA_ERR_NETWORK");
        });

        let snap = audio.snapshot();
        assert!(snap.autoplay_attempted);
        assert!(!snap.awaiting_gesture() && !snap.loading());
        assert!(audio.gesture_subscription().is_none());
        assert_eq!(notices.try_recv().unwrap(), AudioNotice::MediaUnavailable);
        assert!(notices.try_recv().is_err());

        audio.on_can_play_through().await;
        assert_eq!(audio.media().calls.borrow().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ended_stops_playing() {
        let audio = controller(vec![Ok(())]);
        audio.on_can_play_through().await;
        audio.on_ended();
        assert_eq!(audio.snapshot().phase, AudioPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_discards_in_flight_result() {
        let audio = controller(vec![Ok(())]);
        let rx = audio.subscribe();

        tokio::join!(audio.on_can_play_through(), async {
            tokio::task::yield_now().await;
            audio.shutdown();
        });

        assert!(!rx.borrow().playing());
        assert!(rx.borrow().request_in_flight);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_detaches_gesture_listener() {
        let audio = controller(vec![Err(PlaybackError::policy_denied())]);
        audio.on_can_play_through().await;
        let gesture = audio.gesture_subscription().unwrap();

        audio.shutdown();
        gesture.cancelled().await;
        assert!(!gesture.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_state_changes() {
        let audio = controller(vec![Ok(())]);
        let mut rx = audio.subscribe();

        audio.on_can_play_through().await;
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().playing());
    }
}
