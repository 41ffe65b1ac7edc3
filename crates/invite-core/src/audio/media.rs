//! The playable media seam.

use std::future::Future;

use super::error::PlaybackError;

/// Who asked for playback.
///
/// A media backend may use this to scope the request, e.g. run it inside
/// the gesture's user-activation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    /// Automatic attempt once the media is ready
    Autoplay,
    /// Retry triggered by the first page-wide gesture
    Gesture,
    /// Play/pause button
    Manual,
}

/// A looping audio element the controller can drive.
///
/// Lifecycle events (load start, can-play-through, error, ended) are not
/// part of this trait: the owner of the element forwards them to the
/// controller's `on_*` methods.
pub trait MediaHandle: 'static {
    /// Request playback. Resolves once the browser accepts or rejects.
    fn play(&self, origin: PlayOrigin) -> impl Future<Output = Result<(), PlaybackError>>;

    /// Pause playback. Never fails.
    fn pause(&self);
}
