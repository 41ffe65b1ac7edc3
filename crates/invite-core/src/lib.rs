//! Wedding Invitation Core Library
//!
//! Presentation state machines and content model behind the invitation site.
//!
//! ## Overview
//!
//! The site is a single page: an envelope intro, a hero banner with a
//! countdown, the love-story timeline, a photo/video gallery, and an RSVP
//! form. Background music plays when the browser allows it.
//!
//! Two controllers carry the interesting state:
//!
//! - [`RevealController`]: click the envelope, wait for the opening
//!   animation, then mount the invitation.
//! - [`AudioAutoplayController`]: try to autoplay the music, fall back to
//!   the first user gesture when the browser denies it, and always honour
//!   the manual play/pause toggle.
//!
//! Both are independent and publish read-only snapshots over `tokio::sync`
//! channels so the UI shell never touches their state directly.
//!
//! ## Quick Start
//!
//! ```ignore
//! use invite_core::{RevealController, RevealPhase};
//!
//! #[tokio::main]
//! async fn main() {
//!     let reveal = RevealController::with_default_delay();
//!     assert!(reveal.trigger());
//!     assert!(!reveal.trigger()); // already opening
//!
//!     reveal.wait_revealed().await;
//!     assert_eq!(reveal.phase(), RevealPhase::Revealed);
//! }
//! ```

pub mod audio;
pub mod config;
pub mod content;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod reveal;
pub mod rsvp;

// Re-exports
pub use audio::{
    AudioAutoplayController, AudioNotice, AudioPhase, AudioSnapshot, GestureKind,
    GestureSubscription, MediaHandle, PlayOrigin, PlaybackError, PlaybackErrorKind,
};
pub use config::{AudioConfig, InviteConfig};
pub use content::{GalleryItem, MediaKind, NavSection, StoryMilestone, WeddingDetails};
pub use countdown::TimeLeft;
pub use error::{InviteError, InviteResult};
pub use gallery::Lightbox;
pub use reveal::{RevealController, RevealPhase, RevealState, DEFAULT_REVEAL_DELAY};
pub use rsvp::{RsvpClient, RsvpDraft, RsvpError, RsvpReceipt, RsvpRequest, RsvpStats};
