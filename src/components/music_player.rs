//! Music Player
//!
//! Floating play/pause button backed by a looping `<audio>` element in the
//! webview. The autoplay negotiation lives in
//! [`invite_core::AudioAutoplayController`]; this component only forwards
//! media events to it, runs `play()`/`pause()` through `document::eval`,
//! and renders its snapshot.
//!
//! ## Labels
//!
//! | Phase | Floating label | Banner |
//! |-------|----------------|--------|
//! | Idle | none | none |
//! | Loading | "⏳ Cargando..." | none |
//! | Playing | "♪ Reproduciendo" | none |
//! | AwaitingGesture | "✨ Hace click para música" | informational |
//! | Blocked | "🎵 ¡Hace click para música!" | dismissible |

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use invite_core::{
    AudioAutoplayController, AudioNotice, AudioPhase, AudioSnapshot, GestureKind,
    GestureSubscription, MediaHandle, PlayOrigin, PlaybackError, PlaybackErrorKind,
};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::components::Toast;
use crate::context::{push_toast, use_config, use_toasts};

/// DOM id of the audio element
const AUDIO_ELEMENT_ID: &str = "wedding-audio";

/// Resolves with the outcome of `audio.play()`.
const PLAY_SCRIPT: &str = r#"
const audio = document.getElementById("wedding-audio");
if (!audio) {
    return { ok: false, name: "AbortError", message: "audio element not mounted" };
}
try {
    await audio.play();
    return { ok: true };
} catch (e) {
    return { ok: false, name: e.name || "Error", message: e.message || "" };
}
"#;

const PAUSE_SCRIPT: &str = r#"
const audio = document.getElementById("wedding-audio");
if (audio) { audio.pause(); }
"#;

/// Capture-phase listeners for the first page-wide gesture. Every gesture is
/// sent to Rust; any message from Rust removes the listeners.
const GESTURE_LISTENER_SCRIPT: &str = r#"
const kinds = ["click", "touchstart", "keydown"];
const handler = (event) => dioxus.send(event.type);
kinds.forEach((kind) => document.addEventListener(kind, handler, { capture: true }));
await dioxus.recv();
kinds.forEach((kind) => document.removeEventListener(kind, handler, { capture: true }));
"#;

type Controller = Rc<AudioAutoplayController<WebviewAudio>>;

#[derive(Deserialize)]
struct PlayOutcome {
    ok: bool,
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// The `<audio>` element, driven through the webview.
pub struct WebviewAudio;

impl MediaHandle for WebviewAudio {
    async fn play(&self, origin: PlayOrigin) -> Result<(), PlaybackError> {
        debug!(?origin, "Requesting playback");

        let value = document::eval(PLAY_SCRIPT)
            .await
            .map_err(|e| PlaybackError::new(PlaybackErrorKind::Generic, format!("{e:?}")))?;
        let outcome: PlayOutcome = serde_json::from_value(value)
            .map_err(|e| PlaybackError::new(PlaybackErrorKind::Generic, e.to_string()))?;

        if outcome.ok {
            Ok(())
        } else {
            Err(PlaybackError::from_dom_exception(&outcome.name, outcome.message))
        }
    }

    fn pause(&self) {
        let _ = document::eval(PAUSE_SCRIPT);
    }
}

/// Text next to the button, if any.
fn status_label(snapshot: &AudioSnapshot) -> Option<&'static str> {
    match snapshot.phase {
        AudioPhase::Idle => None,
        AudioPhase::Loading => Some("⏳ Cargando..."),
        AudioPhase::Playing => Some("♪ Reproduciendo"),
        AudioPhase::AwaitingGesture => Some("✨ Hace click para música"),
        AudioPhase::Blocked => Some("🎵 ¡Hace click para música!"),
    }
}

/// Tooltip of the play/pause button.
fn button_title(snapshot: &AudioSnapshot) -> &'static str {
    match snapshot.phase {
        AudioPhase::Loading => "Cargando música...",
        AudioPhase::Playing => "Pausar música",
        AudioPhase::Blocked => "¡Haz clic para reproducir música!",
        AudioPhase::AwaitingGesture => "Haz clic en cualquier parte para música automática",
        AudioPhase::Idle => "Reproducir música",
    }
}

/// Modifier class for the button ring.
fn phase_class(snapshot: &AudioSnapshot) -> &'static str {
    match snapshot.phase {
        AudioPhase::Loading => "music-player--loading",
        AudioPhase::Playing => "music-player--playing",
        AudioPhase::AwaitingGesture => "music-player--waiting",
        AudioPhase::Blocked => "music-player--blocked",
        AudioPhase::Idle => "",
    }
}

fn notice_toast(notice: AudioNotice) -> Toast {
    if notice.is_error() {
        Toast::error(notice.message(), None)
    } else {
        Toast::success(notice.message(), None)
    }
}

/// Attach the document listener for one gesture subscription and forward
/// gestures until the controller cancels it.
async fn forward_gestures(controller: &Controller, subscription: GestureSubscription) {
    let mut listener = document::eval(GESTURE_LISTENER_SCRIPT);
    debug!("Gesture listener attached");

    loop {
        tokio::select! {
            _ = subscription.cancelled() => break,
            event = listener.recv::<String>() => match event {
                Ok(name) => {
                    if let Some(kind) = GestureKind::from_dom_event(&name) {
                        controller.on_first_gesture(kind).await;
                    }
                }
                Err(e) => {
                    warn!(error = ?e, "Gesture listener closed");
                    break;
                }
            },
        }
    }

    let _ = listener.send(true);
    debug!("Gesture listener detached");
}

/// Keep a document listener attached for as long as the controller holds an
/// active gesture subscription.
async fn listen_for_gestures(controller: Controller, listening: Rc<Cell<bool>>) {
    while let Some(subscription) = controller
        .gesture_subscription()
        .filter(GestureSubscription::is_active)
    {
        forward_gestures(&controller, subscription).await;
    }
    listening.set(false);
}

/// Floating music control.
///
/// Mount once per page; the audio element is part of this component.
#[component]
pub fn MusicPlayer() -> Element {
    let config = use_config();
    let toasts = use_toasts();
    let audio = config.read().audio.clone();

    let controller: Controller = use_hook(|| Rc::new(AudioAutoplayController::new(WebviewAudio)));
    let mut snapshot = use_signal(|| controller.snapshot());

    // Mirror snapshots; attach the gesture listener while one is armed
    use_hook({
        let controller = controller.clone();
        move || {
            let mut rx = controller.subscribe();
            let listening = Rc::new(Cell::new(false));
            spawn(async move {
                while rx.changed().await.is_ok() {
                    let next = *rx.borrow_and_update();
                    snapshot.set(next);

                    if next.awaiting_gesture() && !listening.get() {
                        listening.set(true);
                        spawn(listen_for_gestures(controller.clone(), listening.clone()));
                    }
                }
            });
        }
    });

    // Transient notices become toasts
    use_hook({
        let controller = controller.clone();
        move || {
            let mut notices = controller.notices();
            spawn(async move {
                loop {
                    match notices.recv().await {
                        Ok(notice) if notice.is_transient() => {
                            push_toast(toasts, notice_toast(notice));
                        }
                        Ok(notice) => debug!(?notice, "Notice shown as banner"),
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Dropped audio notices");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            });
        }
    });

    // Volume is not an HTML attribute
    use_effect(move || {
        let volume = config.read().audio.volume;
        let _ = document::eval(&format!(
            r#"const audio = document.getElementById("{AUDIO_ELEMENT_ID}"); if (audio) {{ audio.volume = {volume}; }}"#
        ));
    });

    use_drop({
        let controller = controller.clone();
        move || {
            info!("Music player unmounted");
            controller.shutdown();
        }
    });

    let current = snapshot();
    let label = status_label(&current);
    let title = button_title(&current);
    let ring = phase_class(&current);

    let on_load_start = controller.clone();
    let on_can_play_through = controller.clone();
    let on_error = controller.clone();
    let on_ended = controller.clone();
    let on_toggle = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            async move { controller.toggle().await }
        }
    };
    let on_dismiss = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.dismiss_notice()
    };

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            src: "{audio.url}",
            preload: "{audio.preload}",
            r#loop: audio.looping,
            onloadstart: move |_| on_load_start.on_load_start(),
            oncanplaythrough: move |_| {
                let controller = on_can_play_through.clone();
                async move { controller.on_can_play_through().await }
            },
            onerror: move |_| on_error.on_error("audio element failed to load its source"),
            onended: move |_| on_ended.on_ended(),
        }

        if current.awaiting_gesture() {
            div { class: "music-banner music-banner--info",
                span { class: "music-banner__icon", "★" }
                span { class: "music-banner__text", {AudioNotice::GestureRequired.message()} }
            }
        }

        if current.autoplay_blocked() {
            div { class: "music-banner music-banner--blocked",
                span { class: "music-banner__icon", "♪" }
                span { class: "music-banner__text",
                    {AudioNotice::AutoplayBlocked(PlaybackErrorKind::Generic).message()}
                }
                button { class: "music-banner__close", onclick: on_dismiss, "✕" }
            }
        }

        div { class: "music-player {ring}",
            button {
                class: "music-player__button",
                title: title,
                onclick: on_toggle,
                if current.loading() {
                    span { class: "music-player__spinner" }
                } else if current.playing() {
                    span { class: "music-player__icon", "❚❚" }
                } else {
                    span { class: "music-player__icon music-player__icon--play", "▶" }
                }
            }

            if current.playing() {
                span { class: "music-player__pulse" }
            }

            if let Some(text) = label {
                div { class: "music-player__label", "{text}" }
            }
        }
    }
}
