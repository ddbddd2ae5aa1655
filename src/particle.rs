//! A single decaying particle.
//!
//! Particles move on a position-difference (Verlet-style) integrator: each
//! step derives velocity from the damped offset between the current and
//! previous position, then adds a per-particle drift sampled at spawn time.
//! Size decays every step; once it falls past the death threshold the
//! particle is dropped from the active list and its pool slot waits to be
//! recycled.

use crate::surface::Canvas;
use crate::visuals::{Hsl, RenderMode};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// Velocity damping applied per step.
pub const DAMPING: f32 = 0.98;

/// Size lost per step while above [`MIN_SIZE`].
pub const DECAY: f32 = 0.1;

/// Size floor; also assigned outright when a particle leaves the viewport,
/// so off-screen particles are pruned on the next survival check.
pub const MIN_SIZE: f32 = 0.2;

/// Particles at or below this size are dead and excluded from all work.
pub const DEATH_THRESHOLD: f32 = 0.3;

/// Constant downward drift blended into the vertical speed at spawn.
pub const GRAVITY_BIAS: f32 = 0.1;

/// A decaying point-mass rendered as a shrinking circle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position.
    pub pos: Vec2,
    /// Position on the previous step; the integrator derives velocity
    /// from `pos - prev`.
    pub prev: Vec2,
    /// Current radius. Monotonically non-increasing after spawn.
    pub size: f32,
    /// Per-particle drift added to the derived velocity each step.
    pub speed: Vec2,
    pub color: Hsl,
}

impl Particle {
    /// A placeholder particle for pool slots that were never issued.
    pub(crate) fn placeholder() -> Self {
        Self {
            pos: Vec2::ZERO,
            prev: Vec2::ZERO,
            size: MIN_SIZE,
            speed: Vec2::ZERO,
            color: Hsl::vivid(0.0),
        }
    }

    /// Reinitialize this particle at `origin`.
    ///
    /// Size is sampled uniformly in `[1, 6)`, drift components in
    /// `[-1.5, 1.5)` with [`GRAVITY_BIAS`] added vertically, and the color
    /// takes the current global hue.
    pub fn reset(&mut self, origin: Vec2, hue: f32, rng: &mut SmallRng) {
        self.pos = origin;
        self.prev = origin;
        self.size = rng.gen_range(1.0..6.0);
        self.speed = Vec2::new(
            rng.gen_range(-1.5..1.5),
            rng.gen_range(-1.5..1.5) + GRAVITY_BIAS,
        );
        self.color = Hsl::vivid(hue);
    }

    /// Advance one step: integrate motion, decay size, and kill the
    /// particle if it has left the viewport.
    pub fn step(&mut self, viewport: Vec2) {
        let velocity = (self.pos - self.prev) * DAMPING;
        self.prev = self.pos;
        self.pos += velocity + self.speed;

        if self.size > MIN_SIZE {
            self.size -= DECAY;
        }

        if self.pos.x < 0.0
            || self.pos.x > viewport.x
            || self.pos.y < 0.0
            || self.pos.y > viewport.y
        {
            self.size = MIN_SIZE;
        }
    }

    /// Whether the particle survives the post-step pruning check.
    #[inline]
    pub fn alive(&self) -> bool {
        self.size > DEATH_THRESHOLD
    }

    /// Issue the draw call for this particle.
    pub fn draw(&self, canvas: &mut dyn Canvas, mode: RenderMode) {
        canvas.fill_circle(self.pos, self.size, self.color, mode);
    }
}
