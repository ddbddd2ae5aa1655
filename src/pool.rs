//! Fixed-capacity particle pool.
//!
//! All particles are allocated once, up front. Spawning draws the slot
//! under a monotonically advancing wrap-around cursor and resets it in
//! place, so the pool never allocates after construction and never fails:
//! when every slot has been issued, the oldest issued slot is silently
//! recycled. Callers hold slot *indices*, which keeps a recycled slot and
//! any stale handle to it pointing at the same storage.

use crate::particle::Particle;
use glam::Vec2;
use rand::rngs::SmallRng;

/// Maximum simultaneous particles in the default configuration.
pub const DEFAULT_CAPACITY: usize = 5000;

/// Pre-allocated recycling store of [`Particle`]s.
#[derive(Debug)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    cursor: usize,
}

impl ParticlePool {
    /// Allocate `capacity` placeholder particles.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| Particle::placeholder()).collect(),
            cursor: 0,
        }
    }

    /// Number of slots. Constant over the pool's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reset the slot under the cursor at `origin` and return its index.
    ///
    /// O(1), never allocates, never fails. Whatever the slot held before
    /// is overwritten, issued-and-alive or not.
    pub fn acquire(&mut self, origin: Vec2, hue: f32, rng: &mut SmallRng) -> usize {
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.slots[index].reset(origin, hue, rng);
        index
    }

    #[inline]
    pub fn slot(&self, index: usize) -> &Particle {
        &self.slots[index]
    }

    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.slots[index]
    }
}
