//! Photo Gallery
//!
//! Grid of photos and videos; clicking one opens it in a lightbox with
//! previous/next navigation that wraps around.

use dioxus::prelude::*;
use invite_core::{GalleryItem, Lightbox, NavSection};

use crate::context::use_config;

#[component]
fn GalleryMedia(item: GalleryItem, class: &'static str, controls: bool) -> Element {
    if item.is_video() {
        rsx! {
            video {
                class: class,
                src: "{item.url}",
                controls: controls,
                muted: !controls,
                r#loop: !controls,
                autoplay: !controls,
                playsinline: true,
            }
        }
    } else {
        rsx! {
            img { class: class, src: "{item.url}", alt: "{item.alt}" }
        }
    }
}

#[component]
pub fn PhotoGallery() -> Element {
    let config = use_config();
    let items = config.read().gallery.clone();
    let mut lightbox = use_signal(|| Lightbox::new(items.len()));
    let mut show_details = use_signal(|| false);

    let current = lightbox().current(&items).cloned();

    rsx! {
        section { id: NavSection::Gallery.anchor(), class: "gallery",
            div { class: "section-header",
                h2 { class: "section-title", "Nuestra Galería" }
                p { class: "section-subtitle",
                    "Capturando los hermosos momentos de nuestro viaje juntos"
                }
            }

            div { class: "gallery__grid",
                for (index, item) in items.iter().cloned().enumerate() {
                    div {
                        key: "{item.id}",
                        class: "gallery__tile",
                        onclick: move |_| {
                            show_details.set(false);
                            lightbox.write().open(index);
                        },
                        GalleryMedia { item: item.clone(), class: "gallery__media", controls: false }
                        if item.is_video() {
                            span { class: "gallery__badge", "▶" }
                        }
                        div { class: "gallery__caption",
                            p { "{item.caption}" }
                        }
                    }
                }
            }

            if let Some(item) = current {
                div {
                    class: "lightbox",
                    onclick: move |_| lightbox.write().close(),

                    div {
                        class: "lightbox__frame",
                        onclick: move |evt| evt.stop_propagation(),

                        button { class: "lightbox__close", onclick: move |_| lightbox.write().close(), "✕" }
                        button { class: "lightbox__prev", onclick: move |_| lightbox.write().prev(), "‹" }
                        button { class: "lightbox__next", onclick: move |_| lightbox.write().next(), "›" }

                        GalleryMedia { item: item.clone(), class: "lightbox__media", controls: true }

                        div { class: "lightbox__caption",
                            p { class: "lightbox__caption-title", "{item.caption}" }
                            button {
                                class: "lightbox__info",
                                onclick: move |_| show_details.set(!show_details()),
                                "ℹ"
                            }
                            if show_details() {
                                p { class: "lightbox__description", "{item.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
