//! Site components

mod cards;
mod contact;
mod footer;
mod hero;
mod loading;
mod nav;

pub use cards::*;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::LoadingScreen;
pub use nav::Navbar;
