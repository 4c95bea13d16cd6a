//! Per-frame particle update
//!
//! One call to `tick` is one animation frame. The host decides when frames
//! happen; nothing here reads the clock, the DOM or the pointer directly.

use glam::Vec2;

use super::state::Particle;
use crate::consts::*;

/// Inputs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Pointer position in document coordinates
    pub pointer: Vec2,
    /// Surface size in CSS pixels
    pub bounds: Vec2,
}

/// Advance every particle by one frame
pub fn tick(particles: &mut [Particle], input: &FrameInput) {
    for particle in particles.iter_mut() {
        step_particle(particle, input);
    }
}

/// Advance a single particle by one frame
pub fn step_particle(particle: &mut Particle, input: &FrameInput) {
    repel(particle, input.pointer);

    // Constant drift
    particle.pos += particle.vel;

    // Weak pull toward the anchor
    particle.pos += (particle.anchor - particle.pos) * ANCHOR_PULL;

    wrap(particle, input.bounds);
}

/// Push the particle straight away from the pointer when it is close
fn repel(particle: &mut Particle, pointer: Vec2) {
    let away = particle.pos - pointer;
    let distance = away.length();
    if distance >= REPULSION_RADIUS {
        return;
    }

    let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
    // Pointer exactly on the particle: push left
    let dir = away.normalize_or(Vec2::NEG_X);
    particle.pos += dir * force * REPULSION_STRENGTH;
}

/// Torus wrap. The anchor moves with the particle so the pull does not drag
/// it back across the edge.
fn wrap(particle: &mut Particle, bounds: Vec2) {
    let far_x = bounds.x + WRAP_MARGIN;
    let far_y = bounds.y + WRAP_MARGIN;

    if particle.pos.x < -WRAP_MARGIN {
        particle.pos.x = far_x;
        particle.anchor.x = far_x;
    } else if particle.pos.x > far_x {
        particle.pos.x = -WRAP_MARGIN;
        particle.anchor.x = -WRAP_MARGIN;
    }

    if particle.pos.y < -WRAP_MARGIN {
        particle.pos.y = far_y;
        particle.anchor.y = far_y;
    } else if particle.pos.y > far_y {
        particle.pos.y = -WRAP_MARGIN;
        particle.anchor.y = -WRAP_MARGIN;
    }
}
