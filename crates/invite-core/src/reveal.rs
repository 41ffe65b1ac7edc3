//! Envelope reveal sequencing.
//!
//! The invitation sits behind a sealed envelope. Clicking it starts the
//! opening animation; once the animation has had time to finish, the
//! wrapped content is mounted.
//!
//! ```text
//!   Closed ──trigger()──▶ Opening ──[delay elapses]──▶ Revealed
//! ```
//!
//! `Revealed` is terminal. Nothing ever returns to `Closed`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Delay between the opening click and mounting the content.
///
/// Matches the duration of the envelope flap animation in the stylesheet.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Phase of the reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Envelope sealed, waiting for the first click
    #[default]
    Closed,
    /// Flap is opening, content still withheld
    Opening,
    /// Content mounted
    Revealed,
}

impl RevealPhase {
    /// True once the user has opened the envelope.
    pub fn is_opened(&self) -> bool {
        !matches!(self, RevealPhase::Closed)
    }

    /// True once the content may be mounted.
    pub fn is_content_visible(&self) -> bool {
        matches!(self, RevealPhase::Revealed)
    }
}

/// Boolean view of the reveal phase, as the page shell consumes it.
///
/// `content_visible` implies `opened`: both are derived from one
/// [`RevealPhase`], so no other combination can be built from a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub opened: bool,
    pub content_visible: bool,
}

impl From<RevealPhase> for RevealState {
    fn from(phase: RevealPhase) -> Self {
        Self {
            opened: phase.is_opened(),
            content_visible: phase.is_content_visible(),
        }
    }
}

/// Gates the invitation behind the one-time envelope interaction.
///
/// The pending reveal timer is tied to a cancellation token that fires on
/// [`RevealController::shutdown`] or when the controller is dropped, so a
/// torn-down page never sees a late transition.
///
/// # Example
///
/// ```ignore
/// let reveal = RevealController::new(Duration::from_millis(800));
/// let mut rx = reveal.subscribe();
///
/// reveal.trigger();
/// rx.wait_for(|phase| phase.is_content_visible()).await?;
/// ```
pub struct RevealController {
    phase_tx: Arc<watch::Sender<RevealPhase>>,
    delay: Duration,
    cancel: CancellationToken,
}

impl RevealController {
    /// Create a controller in the `Closed` phase.
    pub fn new(delay: Duration) -> Self {
        let (phase_tx, _) = watch::channel(RevealPhase::Closed);
        Self {
            phase_tx: Arc::new(phase_tx),
            delay,
            cancel: CancellationToken::new(),
        }
    }

    /// Create a controller using [`DEFAULT_REVEAL_DELAY`].
    pub fn with_default_delay() -> Self {
        Self::new(DEFAULT_REVEAL_DELAY)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        *self.phase_tx.borrow()
    }

    /// Current phase as `opened` / `content_visible` flags.
    pub fn state(&self) -> RevealState {
        self.phase().into()
    }

    /// Subscribe to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<RevealPhase> {
        self.phase_tx.subscribe()
    }

    /// Open the envelope.
    ///
    /// Returns `true` if this call started the opening. Every later call is
    /// a no-op returning `false`, whether the envelope is still opening or
    /// already revealed.
    ///
    /// The deferred transition runs on the ambient tokio runtime, or on a
    /// timer thread when there is none. Either way the content is never
    /// shown before the delay has elapsed.
    pub fn trigger(&self) -> bool {
        let started = self.phase_tx.send_if_modified(|phase| {
            if *phase == RevealPhase::Closed {
                *phase = RevealPhase::Opening;
                true
            } else {
                false
            }
        });

        if !started {
            debug!(phase = ?self.phase(), "Envelope already opened, ignoring trigger");
            return false;
        }

        info!(delay_ms = self.delay.as_millis() as u64, "Envelope opened");

        let phase_tx = Arc::clone(&self.phase_tx);
        let cancel = self.cancel.clone();
        let delay = self.delay;

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            debug!("Reveal timer cancelled before the content was shown");
                        }
                        _ = tokio::time::sleep(delay) => {
                            finish_reveal(&phase_tx);
                        }
                    }
                });
            }
            Err(_) => {
                warn!("No async runtime available, timing the reveal on a thread");
                let spawned = std::thread::Builder::new()
                    .name("reveal-timer".into())
                    .spawn(move || {
                        std::thread::sleep(delay);
                        if cancel.is_cancelled() {
                            debug!("Reveal timer cancelled before the content was shown");
                        } else {
                            finish_reveal(&phase_tx);
                        }
                    });
                if let Err(e) = spawned {
                    warn!(error = %e, "Could not start reveal timer, envelope stays open");
                }
            }
        }

        true
    }

    /// Hand `children` back only when the content may be mounted.
    ///
    /// Content withheld here is never constructed by the caller's renderer,
    /// so its own mount side effects (network calls, timers) are ordered
    /// strictly after the reveal.
    pub fn render_gate<T>(&self, children: T) -> Option<T> {
        if self.phase().is_content_visible() {
            Some(children)
        } else {
            None
        }
    }

    /// Wait until the content is revealed.
    ///
    /// Never resolves if the controller is shut down while still opening.
    pub async fn wait_revealed(&self) {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this cannot fail while we borrow it.
        let _ = rx.wait_for(|phase| phase.is_content_visible()).await;
    }

    /// Cancel the pending reveal timer, if any.
    pub fn shutdown(&self) {
        if !self.cancel.is_cancelled() {
            debug!(phase = ?self.phase(), "Shutting down reveal controller");
            self.cancel.cancel();
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for RevealController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealController")
            .field("phase", &self.phase())
            .field("delay", &self.delay)
            .finish()
    }
}

fn finish_reveal(phase_tx: &watch::Sender<RevealPhase>) {
    let revealed = phase_tx.send_if_modified(|phase| {
        if *phase == RevealPhase::Opening {
            *phase = RevealPhase::Revealed;
            true
        } else {
            false
        }
    });
    if revealed {
        info!("Invitation content revealed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_trigger_opens_then_reveals_after_delay() {
        let reveal = RevealController::with_default_delay();
        assert_eq!(reveal.state(), RevealState::default());

        assert!(reveal.trigger());
        assert_eq!(
            reveal.state(),
            RevealState {
                opened: true,
                content_visible: false
            }
        );

        tokio::time::sleep(Duration::from_millis(799)).await;
        assert_eq!(reveal.phase(), RevealPhase::Opening);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
        assert!(reveal.state().content_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_content_never_visible_before_delay() {
        let reveal = RevealController::new(Duration::from_millis(800));
        let start = Instant::now();
        reveal.trigger();
        reveal.wait_revealed().await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_trigger_is_noop() {
        let reveal = RevealController::with_default_delay();
        let mut rx = reveal.subscribe();
        let recorder = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let phase = *rx.borrow_and_update();
                seen.push(phase);
                if phase == RevealPhase::Revealed {
                    break;
                }
            }
            seen
        });

        assert!(reveal.trigger());
        assert!(!reveal.trigger());
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!reveal.trigger());

        reveal.wait_revealed().await;
        assert!(!reveal.trigger());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(reveal.phase(), RevealPhase::Revealed);

        let seen = recorder.await.unwrap();
        assert_eq!(seen, vec![RevealPhase::Opening, RevealPhase::Revealed]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_gate_withholds_until_revealed() {
        let reveal = RevealController::with_default_delay();
        assert_eq!(reveal.render_gate("content"), None);

        reveal.trigger();
        assert_eq!(reveal.render_gate("content"), None);

        reveal.wait_revealed().await;
        assert_eq!(reveal.render_gate("content"), Some("content"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_reveal() {
        let reveal = RevealController::with_default_delay();
        reveal.trigger();
        reveal.shutdown();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(reveal.phase(), RevealPhase::Opening);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_reveal() {
        let reveal = RevealController::with_default_delay();
        let rx = reveal.subscribe();
        reveal.trigger();
        drop(reveal);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(*rx.borrow(), RevealPhase::Opening);
    }

    #[test]
    fn test_trigger_without_runtime_waits_for_delay() {
        let delay = Duration::from_millis(50);
        let reveal = RevealController::new(delay);
        let start = std::time::Instant::now();

        assert!(reveal.trigger());
        assert_eq!(reveal.phase(), RevealPhase::Opening);

        while !reveal.phase().is_content_visible() {
            std::thread::sleep(Duration::from_millis(5));
            assert!(start.elapsed() < Duration::from_secs(5), "reveal never happened");
        }
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn test_shutdown_without_runtime_cancels_reveal() {
        let reveal = RevealController::new(Duration::from_millis(20));
        reveal.trigger();
        reveal.shutdown();

        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(reveal.phase(), RevealPhase::Opening);
    }

    #[test]
    fn test_state_from_phase() {
        assert_eq!(RevealState::from(RevealPhase::Closed), RevealState::default());
        assert!(RevealState::from(RevealPhase::Opening).opened);
        assert!(!RevealState::from(RevealPhase::Opening).content_visible);
        let revealed = RevealState::from(RevealPhase::Revealed);
        assert!(revealed.opened && revealed.content_visible);
    }
}
