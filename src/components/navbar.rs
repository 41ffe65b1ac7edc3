//! Navigation bar with section anchors.

use dioxus::prelude::*;
use invite_core::NavSection;

use crate::context::use_config;

/// Scroll a page section into view.
pub fn scroll_to(section: NavSection) {
    let anchor = section.anchor();
    let _ = document::eval(&format!(
        r#"document.getElementById("{anchor}")?.scrollIntoView({{ behavior: "smooth" }});"#
    ));
}

/// Sticky top bar. Collapses into a menu button on narrow windows.
#[component]
pub fn Navbar() -> Element {
    let config = use_config();
    let mut menu_open = use_signal(|| false);

    let brand = config.read().wedding.couple.display_names();
    let sections: Vec<(NavSection, &'static str, &'static str)> = NavSection::ALL
        .iter()
        .map(|section| (*section, section.anchor(), section.label()))
        .collect();
    let menu_class = if menu_open() { "navbar__links navbar__links--open" } else { "navbar__links" };

    rsx! {
        nav { class: "navbar",
            button {
                class: "navbar__brand",
                onclick: move |_| scroll_to(NavSection::Home),
                "{brand}"
            }

            button {
                class: "navbar__toggle",
                onclick: move |_| menu_open.set(!menu_open()),
                if menu_open() { "✕" } else { "☰" }
            }

            div { class: menu_class,
                for (section, anchor, label) in sections {
                    button {
                        key: "{anchor}",
                        class: "navbar__link",
                        onclick: move |_| {
                            menu_open.set(false);
                            scroll_to(section);
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
