//! UI components for the wedding invitation.

mod countdown;
mod envelope;
mod footer;
mod gallery;
mod hero;
mod music_player;
mod navbar;
mod our_story;
mod rsvp_form;
mod toaster;

pub use countdown::Countdown;
pub use envelope::Envelope;
pub use footer::Footer;
pub use gallery::PhotoGallery;
pub use hero::HeroSection;
pub use music_player::MusicPlayer;
pub use navbar::{scroll_to, Navbar};
pub use our_story::OurStory;
pub use rsvp_form::RsvpForm;
pub use toaster::{Toast, ToastVariant, Toaster};
