//! Page-wide gesture subscription.

use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

/// Kind of user gesture that can unlock playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Click,
    Touch,
    Key,
}

impl GestureKind {
    /// Every gesture kind the listener attaches to.
    pub const ALL: [GestureKind; 3] = [GestureKind::Click, GestureKind::Touch, GestureKind::Key];

    /// DOM event type for this gesture.
    pub fn dom_event(&self) -> &'static str {
        match self {
            GestureKind::Click => "click",
            GestureKind::Touch => "touchstart",
            GestureKind::Key => "keydown",
        }
    }

    /// Parse a DOM event type.
    pub fn from_dom_event(event: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.dom_event() == event)
    }
}

/// Handle for the document-level gesture listener.
///
/// The controller creates one when it enters `AwaitingGesture` and cancels it
/// on any exit from that state: a consumed gesture, a manual toggle, a load
/// restart, or teardown. Whoever attached the real listener awaits
/// [`GestureSubscription::cancelled`] to know when to detach it.
///
/// Clones share the same cancellation.
#[derive(Debug, Clone)]
pub struct GestureSubscription {
    token: CancellationToken,
}

impl GestureSubscription {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// True until the controller detaches the subscription.
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Resolves once the listener must be removed.
    pub fn cancelled(&self) -> WaitForCancellationFutureOwned {
        self.token.clone().cancelled_owned()
    }

    pub(crate) fn detach(&self) {
        self.token.cancel();
    }
}
