//! Envelope Opener
//!
//! Full-screen sealed envelope. Clicking it opens the flap; once the
//! opening animation has had time to play, the invitation underneath is
//! mounted.
//!
//! ## States
//!
//! | Phase | Envelope | Children |
//! |-------|----------|----------|
//! | Closed | sealed, "Estás invitado!" hint | not mounted |
//! | Opening | flap rotated, "Abriendo..." | not mounted |
//! | Revealed | faded out, click-through | mounted |

use std::rc::Rc;

use dioxus::prelude::*;
use invite_core::{RevealController, RevealPhase};
use tracing::debug;

/// Decorative hearts floating behind the envelope: (left %, top %, delay s)
const HEART_PARTICLES: [(u8, u8, f32); 12] = [
    (8, 12, 0.0),
    (22, 70, 1.2),
    (35, 30, 2.4),
    (48, 85, 0.6),
    (60, 18, 1.8),
    (72, 55, 2.9),
    (85, 35, 0.3),
    (92, 78, 1.5),
    (15, 45, 2.1),
    (40, 60, 0.9),
    (66, 90, 2.6),
    (80, 8, 1.1),
];

fn overlay_class(phase: RevealPhase) -> &'static str {
    if phase.is_content_visible() {
        "envelope-overlay--hidden"
    } else {
        ""
    }
}

fn flap_class(phase: RevealPhase) -> &'static str {
    if phase.is_opened() {
        "envelope__flap--open"
    } else {
        ""
    }
}

fn seal_class(phase: RevealPhase) -> &'static str {
    if phase.is_opened() {
        "envelope__seal--broken"
    } else {
        ""
    }
}

fn content_class(phase: RevealPhase) -> &'static str {
    if phase.is_content_visible() {
        "envelope-content--visible"
    } else {
        ""
    }
}

/// Envelope that gates its children behind the reveal sequence.
///
/// # Example
///
/// ```rust
/// rsx! {
///     Envelope { reveal_delay_ms: 800,
///         HeroSection {}
///     }
/// }
/// ```
#[component]
pub fn Envelope(
    /// Delay between opening the flap and mounting the children
    reveal_delay_ms: u64,
    children: Element,
) -> Element {
    let controller = use_hook(|| {
        Rc::new(RevealController::new(std::time::Duration::from_millis(
            reveal_delay_ms,
        )))
    });
    let mut phase = use_signal(|| controller.phase());

    // Mirror the controller's phase into the signal
    use_hook({
        let controller = controller.clone();
        move || {
            let mut rx = controller.subscribe();
            spawn(async move {
                while rx.changed().await.is_ok() {
                    let next = *rx.borrow_and_update();
                    debug!(?next, "Envelope phase changed");
                    phase.set(next);
                }
            });
        }
    });

    // Cancel the pending reveal when the envelope goes away
    use_drop({
        let controller = controller.clone();
        move || controller.shutdown()
    });

    let current = phase();
    let overlay = overlay_class(current);
    let flap = flap_class(current);
    let seal = seal_class(current);
    let content = content_class(current);
    let gated = controller.render_gate(children);
    let on_open = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            controller.trigger();
        }
    };

    rsx! {
        div { class: "envelope-site",
            div { class: "envelope-overlay {overlay}",
                div { class: "envelope", onclick: on_open,
                    div { class: "envelope__shadow" }

                    div { class: "envelope__body",
                        div { class: "envelope__letter",
                            div { class: "envelope__letter-icon", "💌" }
                            div { class: "envelope__letter-text",
                                if current.is_opened() {
                                    "Abriendo..."
                                } else {
                                    "Invitación al casamiento"
                                }
                            }
                            div { class: "envelope__letter-rule" }
                        }
                    }

                    div { class: "envelope__flap {flap}",
                        div { class: "envelope__seal {seal}",
                            span { "💕" }
                        }
                    }

                    if current.is_opened() {
                        div { class: "envelope__glow" }
                    }

                    if !current.is_opened() {
                        div { class: "envelope__hint",
                            div { class: "envelope__hint-title", "Estás invitado!" }
                            div { class: "envelope__hint-subtitle",
                                "Hace click para abrir la invitación"
                            }
                        }
                    }
                }

                div { class: "envelope__particles",
                    for (i, (left, top, delay)) in HEART_PARTICLES.iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "envelope__particle",
                            style: "left: {left}%; top: {top}%; animation-delay: {delay}s;",
                            "💕"
                        }
                    }
                }
            }

            div { class: "envelope-content {content}",
                {gated}
            }
        }
    }
}
