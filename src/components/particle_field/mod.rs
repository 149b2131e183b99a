//! Parameterized canvas particle-field engine.
//!
//! One engine drives every animated background on the site. A section
//! picks a [`FieldConfig`] preset and mounts a [`ParticleCanvas`]; the
//! engine handles surface sizing, point initialization, per-frame
//! stepping, rendering, and teardown.
//!
//! Per frame, data flows one way: the scheduler invokes the stepper
//! (mutating the point store), then the renderer (reading it). Resize
//! events rebuild the point store wholesale.
//!
//! # Example
//!
//! ```ignore
//! use folio::components::particle_field::{FieldConfig, ParticleCanvas};
//!
//! view! { <ParticleCanvas config=FieldConfig::network() /> }
//! ```

pub mod color;
mod component;
pub mod config;
mod field;
mod render;
mod rng;
mod scheduler;

pub use component::ParticleCanvas;
pub use config::{BoundaryPolicy, FieldConfig};
pub use field::{Point, PointField, TailSegment};
pub use scheduler::{FrameLoop, Phase};
