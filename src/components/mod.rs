//! UI components: the particle-field engine and the page sections built
//! on top of it.

pub mod particle_field;
pub mod sections;
