//! Toast notifications.
//!
//! Short-lived messages for RSVP results and playback failures. The queue
//! lives in context (see `crate::context::push_toast`).

use dioxus::prelude::*;

use crate::context::{dismiss_toast, next_toast_id, use_toasts};

/// Toast visual variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    /// Get CSS class for this variant.
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast--destructive",
        }
    }
}

/// A single toast.
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: next_toast_id(),
            title: title.into(),
            description,
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: next_toast_id(),
            title: title.into(),
            description,
            variant: ToastVariant::Destructive,
        }
    }
}

/// Renders the toast queue in the corner of the window.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let visible: Vec<Toast> = toasts();

    rsx! {
        div { class: "toaster",
            for toast in visible {
                div {
                    key: "{toast.id}",
                    class: toast.variant.class(),
                    role: "status",

                    div { class: "toast__body",
                        p { class: "toast__title", "{toast.title}" }
                        if let Some(description) = toast.description.clone() {
                            p { class: "toast__description", "{description}" }
                        }
                    }
                    button {
                        class: "toast__close",
                        onclick: move |_| dismiss_toast(toasts, toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_are_unique() {
        let a = Toast::success("a", None);
        let b = Toast::error("b", Some("detalle".to_string()));
        assert_ne!(a.id, b.id);
        assert_eq!(b.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_variant_classes() {
        assert_eq!(ToastVariant::Default.class(), "toast");
        assert!(ToastVariant::Destructive.class().contains("toast--destructive"));
    }
}
