//! Love-story timeline.

use dioxus::prelude::*;
use invite_core::NavSection;

use crate::context::use_config;

#[component]
pub fn OurStory() -> Element {
    let config = use_config();
    let story = config.read().story.clone();

    rsx! {
        section { id: NavSection::Story.anchor(), class: "story",
            div { class: "section-header",
                h2 { class: "section-title", "Our Love Story" }
                p { class: "section-subtitle",
                    "Every love story is beautiful, but ours is our favorite"
                }
            }

            div { class: "timeline",
                div { class: "timeline__line" }
                for (index, milestone) in story.into_iter().enumerate() {
                    {
                        // Alternate sides on wide windows
                        let side = if index % 2 == 0 { "timeline__item--left" } else { "timeline__item--right" };
                        rsx! {
                            div { key: "{index}", class: "timeline__item {side}",
                                div { class: "timeline__card",
                                    div { class: "timeline__icon", "{milestone.icon}" }
                                    h3 { class: "timeline__title", "{milestone.title}" }
                                    p { class: "timeline__text", "{milestone.description}" }
                                }
                                div { class: "timeline__year", "{milestone.year}" }
                            }
                        }
                    }
                }
            }

            blockquote { class: "story__quote",
                "\"Being deeply loved by someone gives you strength, while loving someone deeply gives you courage.\""
            }
            cite { class: "story__cite", "- Lao Tzu" }
        }
    }
}
