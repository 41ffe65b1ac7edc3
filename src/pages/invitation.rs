//! The invitation page.
//!
//! The envelope covers the window until it is opened; the sections are only
//! mounted once the reveal completes. Music and toasts live outside the
//! envelope so autoplay can be negotiated while it is still closed.

use dioxus::prelude::*;

use crate::components::{
    Envelope, Footer, HeroSection, MusicPlayer, Navbar, OurStory, PhotoGallery, RsvpForm, Toaster,
};
use crate::context::use_config;

#[component]
pub fn Invitation() -> Element {
    let config = use_config();
    let reveal_delay_ms = config.read().reveal_delay_ms;

    rsx! {
        div { class: "invitation",
            Envelope { reveal_delay_ms,
                Navbar {}
                HeroSection {}
                OurStory {}
                PhotoGallery {}
                RsvpForm {}
                Footer {}
            }
            MusicPlayer {}
            Toaster {}
        }
    }
}
