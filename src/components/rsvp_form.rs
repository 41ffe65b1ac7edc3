//! RSVP Form
//!
//! Name, attendance choice and an optional comment. The draft is validated
//! locally before anything is sent; every outcome is reported as a toast.

use dioxus::prelude::*;
use invite_core::{NavSection, RsvpClient, RsvpDraft, RsvpError};
use tracing::{error, info};

use crate::components::Toast;
use crate::context::{push_toast, use_config, use_toasts};

fn error_toast(err: &RsvpError) -> Toast {
    Toast::error(err.toast_title(), err.toast_description())
}

/// Class of an attendance button for the current choice.
fn choice_class(selected: Option<bool>, value: bool) -> &'static str {
    match (selected == Some(value), value) {
        (true, true) => "rsvp__choice rsvp__choice--yes",
        (true, false) => "rsvp__choice rsvp__choice--no",
        (false, _) => "rsvp__choice",
    }
}

#[component]
pub fn RsvpForm() -> Element {
    let config = use_config();
    let toasts = use_toasts();
    let mut draft = use_signal(RsvpDraft::default);
    let mut submitting = use_signal(|| false);

    let current = draft();
    let busy = submitting();
    let yes_class = choice_class(current.attending, true);
    let no_class = choice_class(current.attending, false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let request = match draft.read().validate() {
            Ok(request) => request,
            Err(e) => {
                push_toast(toasts, error_toast(&e));
                return;
            }
        };

        let backend_url = config.read().backend_url.clone();
        submitting.set(true);
        spawn(async move {
            let result = match RsvpClient::new(&backend_url) {
                Ok(client) => client.submit(&request).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(receipt) => {
                    info!(updated = receipt.is_update(), "RSVP confirmed");
                    push_toast(
                        toasts,
                        Toast::success(receipt.toast_title(), Some(receipt.toast_description())),
                    );
                    draft.write().reset();
                }
                Err(e) => {
                    error!(error = %e, "RSVP submission failed");
                    push_toast(toasts, error_toast(&e));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        section { id: NavSection::Rsvp.anchor(), class: "rsvp",
            div { class: "section-header",
                h2 { class: "section-title", "Venís?" }
                p { class: "section-subtitle",
                    "Tu presencia haría que nuestro día sea aún más especial"
                }
            }

            div { class: "rsvp__card",
                div { class: "rsvp__card-header",
                    span { class: "rsvp__heart", "♥" }
                    h3 { "Confirmación de Asistencia" }
                }

                form { class: "rsvp__form", onsubmit: on_submit,
                    div { class: "rsvp__field",
                        label { r#for: "name", "Tu Nombre *" }
                        input {
                            id: "name",
                            r#type: "text",
                            placeholder: "Ingresa tu nombre completo",
                            value: "{current.name}",
                            disabled: busy,
                            oninput: move |evt| draft.write().name = evt.value(),
                        }
                    }

                    div { class: "rsvp__field",
                        label { "¿Vas a asistir? *" }
                        div { class: "rsvp__choices",
                            button {
                                r#type: "button",
                                class: yes_class,
                                disabled: busy,
                                onclick: move |_| draft.write().attending = Some(true),
                                div { class: "rsvp__choice-icon", "✓" }
                                div { "¡Sí, estaré ahí!" }
                            }
                            button {
                                r#type: "button",
                                class: no_class,
                                disabled: busy,
                                onclick: move |_| draft.write().attending = Some(false),
                                div { class: "rsvp__choice-icon", "✗" }
                                div { "Lo siento, no podré ir" }
                            }
                        }
                    }

                    div { class: "rsvp__field",
                        label { r#for: "comment", "Comentarios Adicionales" }
                        textarea {
                            id: "comment",
                            rows: "4",
                            placeholder: "Mensajes especiales, restricciones alimentarias, o preguntas...",
                            value: "{current.comment}",
                            disabled: busy,
                            oninput: move |evt| draft.write().comment = evt.value(),
                        }
                    }

                    button { class: "rsvp__submit", r#type: "submit", disabled: busy,
                        if busy {
                            span { class: "rsvp__spinner" }
                            span { "Enviando..." }
                        } else {
                            span { "Enviar Confirmación" }
                        }
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
    fn test_choice_class_highlights_selection() {
        assert_eq!(choice_class(None, true), "rsvp__choice");
        assert_eq!(choice_class(Some(true), true), "rsvp__choice rsvp__choice--yes");
        assert_eq!(choice_class(Some(true), false), "rsvp__choice");
        assert_eq!(choice_class(Some(false), false), "rsvp__choice rsvp__choice--no");
    }

    #[test]
    fn test_validation_error_toast_is_destructive_without_description() {
        let toast = error_toast(&RsvpError::MissingName);
        assert_eq!(toast.title, "Por favor ingresa tu nombre");
        assert!(toast.description.is_none());
    }
}
