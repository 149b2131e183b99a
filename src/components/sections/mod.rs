//! Page sections of the single-page portfolio.
//!
//! Each section owns one decorative [`ParticleCanvas`] preset and the
//! markup for its content panel. Sections never share animation state;
//! every canvas runs its own field and frame loop.
//!
//! [`ParticleCanvas`]: crate::components::particle_field::ParticleCanvas

mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
