//! Background music with browser autoplay negotiation.
//!
//! Browsers refuse programmatic playback until the visitor has interacted
//! with the page. The controller tries anyway, and when the refusal is a
//! policy denial it waits silently for the first click, touch or key press
//! before trying once more. Any other failure (undecodable file, network)
//! is reported once and never retried automatically.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  AudioAutoplayController<M: MediaHandle>                        │
//! │  ├── inner: Mutex<AudioInner>                                   │
//! │  │   ├── phase: Idle | Loading | Playing | AwaitingGesture |    │
//! │  │   │          Blocked                                          │
//! │  │   ├── autoplay_attempted (one-shot latch)                    │
//! │  │   ├── in_flight: Option<PlayOrigin> (≤ 1 play request)       │
//! │  │   └── gesture: Option<GestureSubscription>                   │
//! │  │       └── only present while AwaitingGesture                 │
//! │  │                                                              │
//! │  ├── state_tx: watch::Sender<AudioSnapshot>   (UI mirror)       │
//! │  ├── notice_tx: broadcast::Sender<AudioNotice> (toasts)         │
//! │  └── cancel: CancellationToken (teardown)                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod controller;
mod error;
mod gesture;
mod media;
mod notice;
mod state;

pub use controller::AudioAutoplayController;
pub use error::{PlaybackError, PlaybackErrorKind};
pub use gesture::{GestureKind, GestureSubscription};
pub use media::{MediaHandle, PlayOrigin};
pub use notice::AudioNotice;
pub use state::{AudioPhase, AudioSnapshot};
