//! Particle field state
//!
//! The particle list, the last known pointer position and the surface size
//! are owned by a single `ParticleField` instead of living in page globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::{FrameInput, tick};
use crate::consts::*;

/// Drawing surface in CSS pixels, plus the device pixel ratio used for the
/// canvas backing store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        // Some embedded browsers report 0 for devicePixelRatio
        let pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Size in CSS pixels
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing store size in device pixels
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio) as u32,
            (self.height * self.pixel_ratio) as u32,
        )
    }
}

/// A single drifting point
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Anchor point the particle is slowly pulled back toward
    pub anchor: Vec2,
    /// Constant drift per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Seed a particle somewhere on a surface of the given size.
    ///
    /// The anchor is drawn independently of the start position, so a fresh
    /// particle settles toward its own spot over the first few seconds.
    pub fn random<R: Rng>(rng: &mut R, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y),
            anchor: Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y),
            vel: Vec2::new(
                rng.random_range(-MAX_DRIFT..=MAX_DRIFT),
                rng.random_range(-MAX_DRIFT..=MAX_DRIFT),
            ),
            radius: rng.random_range(MIN_PARTICLE_RADIUS..=MAX_PARTICLE_RADIUS),
        }
    }
}

/// The whole particle field
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    /// Last known pointer position in document coordinates
    pub pointer: Vec2,
    pub surface: Surface,
}

impl ParticleField {
    /// Create a field of `PARTICLE_COUNT` particles seeded from `seed`
    pub fn new(seed: u64, surface: Surface) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let size = surface.size();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(&mut rng, size))
            .collect();

        Self {
            particles,
            pointer: Vec2::ZERO,
            surface,
        }
    }

    /// Record the latest pointer position (last write wins)
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Adopt new surface dimensions. Existing particles are left where they
    /// are; anything now out of range wraps back in on the next frames.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Inputs for the next frame
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            bounds: self.surface.size(),
        }
    }

    /// Advance the field by one animation frame
    pub fn advance(&mut self) {
        let input = self.frame_input();
        tick(&mut self.particles, &input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(1280.0, 3000.0, 2.0)
    }

    #[test]
    fn test_field_seeding_ranges() {
        let field = ParticleField::new(42, surface());
        assert_eq!(field.particles.len(), PARTICLE_COUNT);

        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 1280.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 3000.0);
            assert!(p.anchor.x >= 0.0 && p.anchor.x <= 1280.0);
            assert!(p.vel.x.abs() <= MAX_DRIFT && p.vel.y.abs() <= MAX_DRIFT);
            assert!(p.radius >= MIN_PARTICLE_RADIUS && p.radius <= MAX_PARTICLE_RADIUS);
        }
    }

    #[test]
    fn test_field_determinism() {
        let a = ParticleField::new(7, surface());
        let b = ParticleField::new(7, surface());
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut field = ParticleField::new(3, surface());
        let before: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

        field.resize(Surface::new(640.0, 900.0, 1.0));
        assert_eq!(field.surface.width, 640.0);
        let after: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
        assert_eq!(field.frame_input().bounds, Vec2::new(640.0, 900.0));
    }

    #[test]
    fn test_advance_moves_particles() {
        let mut field = ParticleField::new(1, surface());
        field.set_pointer(Vec2::new(-500.0, -500.0));
        let before: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

        field.advance();
        field.advance();
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        let moved = field
            .particles
            .iter()
            .zip(&before)
            .filter(|(p, old)| p.pos != **old)
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn test_surface_backing_size() {
        let s = Surface::new(800.0, 600.0, 2.0);
        assert_eq!(s.backing_size(), (1600, 1200));

        let s = Surface::new(800.0, 600.0, 0.0);
        assert_eq!(s.pixel_ratio, 1.0);
        assert_eq!(s.backing_size(), (800, 600));
    }
}
