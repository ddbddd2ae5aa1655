//! Aggregate simulation state.
//!
//! Everything mutable lives in one owned [`SimulationState`] value that the
//! tick borrows explicitly — no module globals — so the core stays unit
//! testable without a live drawing surface. Input handlers mutate the same
//! value between ticks; the single-threaded event-loop model makes that
//! safe without locking.

use crate::particle::Particle;
use crate::pool::ParticlePool;
use crate::target::Apple;
use glam::Vec2;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Monotonic score counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Targets captured by the pointer.
    pub eaten: u32,
    /// Targets that expired and exploded.
    pub lost: u32,
}

/// All mutable state of one simulation instance.
#[derive(Debug)]
pub struct SimulationState {
    /// Active particle handles (pool slot indices). A handle may appear
    /// more than once after the pool recycles a still-listed slot; both
    /// occurrences then alias the same particle, as the recycling
    /// contract intends.
    pub particles: Vec<usize>,
    pub pool: ParticlePool,
    pub score: Score,
    /// Global hue for newly spawned particles, degrees in `[0, 360]`.
    pub hue: f32,
    /// The live target, if any. `None` is the ordinary ABSENT state.
    pub apple: Option<Apple>,
    /// Where the previous target sat, kept across clears so the next
    /// spawn can alternate quadrants against it.
    pub(crate) last_target_pos: Option<Vec2>,
    /// Last known pointer position; `None` until the first pointer event.
    pub pointer: Option<Vec2>,
    /// Viewport dimensions in surface pixels.
    pub viewport: Vec2,
    /// While set, ticks skip all mutation and drawing.
    pub paused: bool,
    pub(crate) rng: SmallRng,
}

impl SimulationState {
    pub fn new(width: f32, height: f32, pool_capacity: usize) -> Self {
        Self {
            particles: Vec::new(),
            pool: ParticlePool::new(pool_capacity),
            score: Score::default(),
            hue: 0.0,
            apple: None,
            last_target_pos: None,
            pointer: None,
            viewport: Vec2::new(width, height),
            paused: false,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Spawn `count` particles at `origin`, falling back to the pointer
    /// and then to the viewport center when no origin is given.
    ///
    /// Each particle comes out of the pool, so a large burst may recycle
    /// the oldest live particles rather than grow the active set.
    pub fn spawn_burst(&mut self, origin: Option<Vec2>, count: usize) {
        let origin = origin
            .or(self.pointer)
            .unwrap_or(self.viewport * 0.5);
        trace!("burst of {} at ({:.0}, {:.0})", count, origin.x, origin.y);

        for _ in 0..count {
            let slot = self.pool.acquire(origin, self.hue, &mut self.rng);
            self.particles.push(slot);
        }
    }

    /// Adjust the global hue by `delta` degrees.
    ///
    /// Overshooting either end snaps to the opposite bound (above 360
    /// lands on 0, below 0 lands on 360), keeping the value in `[0, 360]`
    /// at every intermediate step.
    pub fn nudge_hue(&mut self, delta: f32) {
        self.hue += delta;
        if self.hue > 360.0 {
            self.hue = 0.0;
        }
        if self.hue < 0.0 {
            self.hue = 360.0;
        }
    }

    /// Record a new viewport size; all subsequent bounds math uses it.
    pub fn resize(&mut self, width: f32, height: f32) {
        debug!("viewport resized to {:.0}x{:.0}", width, height);
        self.viewport = Vec2::new(width, height);
    }

    #[inline]
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    #[inline]
    pub(crate) fn particle(&self, slot: usize) -> &Particle {
        self.pool.slot(slot)
    }
}
