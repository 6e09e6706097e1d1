//! Fire burst celebrating a mat landing.
//!
//! Purely cosmetic: the particles never push back on the gymnast. The pool
//! is allocated once at construction and never resized; deactivating hides
//! the burst without clearing it, and the next ignite re-scatters every
//! particle wholesale.

use bincode::{Decode, Encode};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::random::SeededRng;

/// Number of particles in the burst, fixed for the session.
pub const PARTICLE_COUNT: usize = 32;

/// Extra downward pull on the particles, heavier than the gymnast's own
/// gravity for a snappier burst.
const PARTICLE_GRAVITY: f32 = 5.0;

/// One spark of the burst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Encode, Decode)]
pub struct Particle {
    #[bincode(with_serde)]
    pub position: Vec3,
    #[bincode(with_serde)]
    pub velocity: Vec3,
}

/// The landing celebration burst.
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct FireEffect {
    /// Whether the burst is currently visible and animating.
    pub active: bool,

    /// World position the burst was ignited at.
    #[bincode(with_serde)]
    pub origin: Vec3,

    particles: Vec<Particle>,
}

impl FireEffect {
    pub fn new() -> Self {
        Self {
            active: false,
            origin: Vec3::ZERO,
            particles: vec![
                Particle {
                    position: Vec3::ZERO,
                    velocity: Vec3::ZERO,
                };
                PARTICLE_COUNT
            ],
        }
    }

    /// Start the burst at `origin`, re-scattering every particle.
    ///
    /// Horizontal offsets land in [-0.25, 0.25] around the origin; velocities
    /// spray upward with a little sideways drift.
    pub fn ignite(&mut self, origin: Vec3, rng: &mut SeededRng) {
        self.active = true;
        self.origin = origin;

        for particle in &mut self.particles {
            particle.position = origin
                + Vec3::new(
                    rng.next_range(-0.25, 0.25),
                    0.0,
                    rng.next_range(-0.25, 0.25),
                );
            particle.velocity = Vec3::new(
                rng.next_range(-1.0, 1.0),
                rng.next_range(2.0, 5.0),
                rng.next_range(-1.0, 1.0),
            );
        }
    }

    /// Animate the burst. No-op while inactive.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        for particle in &mut self.particles {
            particle.position += particle.velocity * dt;
            particle.velocity.y -= PARTICLE_GRAVITY * dt;
        }
    }

    /// Hide the burst. Particle state is left in place for the renderer to
    /// fade out; the next ignite overwrites it anyway.
    pub fn extinguish(&mut self) {
        self.active = false;
    }

    /// Particles for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Default for FireEffect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_fixed() {
        let mut fire = FireEffect::new();
        let mut rng = SeededRng::new(7);
        assert_eq!(fire.particles().len(), PARTICLE_COUNT);

        fire.ignite(Vec3::new(1.0, 0.5, 0.0), &mut rng);
        fire.update(0.1);
        fire.extinguish();
        fire.ignite(Vec3::ZERO, &mut rng);

        assert_eq!(fire.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn ignite_scatters_within_bounds() {
        let mut fire = FireEffect::new();
        let mut rng = SeededRng::new(99);
        let origin = Vec3::new(6.0, 0.65, 0.0);

        fire.ignite(origin, &mut rng);

        assert!(fire.active);
        for particle in fire.particles() {
            let offset = particle.position - origin;
            assert!(offset.x.abs() <= 0.25);
            assert_eq!(offset.y, 0.0);
            assert!(offset.z.abs() <= 0.25);
            assert!(particle.velocity.x.abs() <= 1.0);
            assert!((2.0..5.0).contains(&particle.velocity.y));
            assert!(particle.velocity.z.abs() <= 1.0);
        }
    }

    #[test]
    fn update_integrates_and_pulls_down() {
        let mut fire = FireEffect::new();
        let mut rng = SeededRng::new(3);
        fire.ignite(Vec3::ZERO, &mut rng);

        let before = fire.particles()[0];
        fire.update(0.1);
        let after = fire.particles()[0];

        let expected_pos = before.position + before.velocity * 0.1;
        assert!((after.position - expected_pos).length() < 1e-6);
        assert!((after.velocity.y - (before.velocity.y - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn inactive_burst_is_frozen() {
        let mut fire = FireEffect::new();
        let mut rng = SeededRng::new(3);
        fire.ignite(Vec3::ZERO, &mut rng);
        fire.extinguish();

        let before = fire.particles()[0];
        fire.update(0.1);
        assert_eq!(fire.particles()[0].position, before.position);
    }
}
