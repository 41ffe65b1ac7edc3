//! Hero Section
//!
//! Couple names, date, venue and the live countdown.

use dioxus::prelude::*;
use invite_core::NavSection;

use crate::components::{scroll_to, Countdown};
use crate::context::use_config;

#[component]
pub fn HeroSection() -> Element {
    let config = use_config();
    let details = config.read().wedding.clone();

    let date = details.formatted_date();
    let weekday = details.weekday_name();
    let target = details.ceremony_start();

    rsx! {
        section { id: NavSection::Home.anchor(), class: "hero",
            div { class: "hero__content",
                p { class: "hero__eyebrow", "You're Invited to Celebrate" }

                h1 { class: "hero__names",
                    "{details.couple.bride}"
                    span { class: "hero__ampersand", "&" }
                    "{details.couple.groom}"
                }

                p { class: "hero__tagline", "are getting married" }

                div { class: "hero__details",
                    div { class: "hero__detail",
                        span { class: "hero__detail-icon", "📅" }
                        div {
                            p { class: "hero__detail-primary", "{date}" }
                            p { class: "hero__detail-secondary", "{weekday}" }
                        }
                    }
                    div { class: "hero__detail",
                        span { class: "hero__detail-icon", "📍" }
                        div {
                            p { class: "hero__detail-primary", "{details.venue.name}" }
                            p { class: "hero__detail-secondary", "{details.venue.address}" }
                        }
                    }
                }

                Countdown { target }

                button {
                    class: "hero__cta",
                    onclick: move |_| scroll_to(NavSection::Rsvp),
                    "RSVP Now"
                }
            }

            div { class: "hero__scroll-hint",
                p { "Scroll to explore" }
                div { class: "hero__scroll-mouse",
                    div { class: "hero__scroll-wheel" }
                }
            }
        }
    }
}
