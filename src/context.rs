//! Shared context for the invitation.
//!
//! Provides the configuration and the toast queue to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_config();
//! let toasts = use_toasts();
//!
//! push_toast(toasts, Toast::success("¡Confirmación Enviada!", None));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use invite_core::InviteConfig;

use crate::components::Toast;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts shown at once
const MAX_VISIBLE_TOASTS: usize = 3;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Get the invitation configuration loaded at startup.
pub fn get_config() -> InviteConfig {
    crate::get_config()
}

/// Hook to access the invitation configuration.
pub fn use_config() -> Signal<InviteConfig> {
    use_context::<Signal<InviteConfig>>()
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

/// Allocate a toast id.
pub fn next_toast_id() -> u64 {
    NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Show a toast and schedule its removal.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, toast: Toast) {
    let id = toast.id;
    {
        let mut queue = toasts.write();
        queue.push(toast);
        while queue.len() > MAX_VISIBLE_TOASTS {
            queue.remove(0);
        }
    }

    spawn(async move {
        tokio::time::sleep(TOAST_DURATION).await;
        toasts.write().retain(|t| t.id != id);
    });
}

/// Remove a toast before it expires.
pub fn dismiss_toast(mut toasts: Signal<Vec<Toast>>, id: u64) {
    toasts.write().retain(|t| t.id != id);
}
