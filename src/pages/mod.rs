//! Page components for the wedding invitation.

mod invitation;

pub use invitation::Invitation;
