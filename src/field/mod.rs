//! Particle field module
//!
//! Pure per-frame physics for the decorative background particles:
//! - Explicit frame inputs (surface bounds, pointer position)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Particle, ParticleField, Surface};
pub use tick::{FrameInput, step_particle, tick};
