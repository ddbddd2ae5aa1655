//! The apple: a shrinking capture target.
//!
//! At most one apple exists at a time. Its life is a small state machine
//! advanced once per tick in fixed priority order:
//!
//! 1. absent → spawn a new apple (no draw on that tick),
//! 2. active → captured, when the pointer sits inside its radius,
//! 3. active → expired, when the radius has decayed away — exploding into
//!    a particle burst exactly once, on the tick the size crosses the
//!    threshold from a positive value,
//! 4. otherwise → shrink and draw.
//!
//! Spawn positions alternate screen quadrants: the previous apple's
//! pseudo-quadrant index `floor(x / halfW) + floor(y / halfH)` is advanced
//! by `(q + 2) % 4`, and the position is resampled until it clears the
//! HUD's reserved corner. The index formula collapses two corners onto the
//! same value and therefore is not a true quadrant id; it is kept
//! deliberately, since changing it would shift every respawn pattern.

use crate::state::SimulationState;
use crate::surface::Canvas;
use crate::visuals::{Hsl, RenderMode, HUD_RESERVED_HEIGHT, HUD_RESERVED_WIDTH};
use glam::Vec2;
use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

/// Radius of a freshly spawned apple.
pub const START_SIZE: f32 = 20.0;

/// Radius lost per tick while active.
pub const TARGET_DECAY: f32 = 0.1;

/// Radius at or below which the apple expires.
pub const EXPIRE_THRESHOLD: f32 = 0.3;

/// Particles released when an apple expires uncaptured.
pub const EXPLOSION_BURST: usize = 50;

/// The capture target.
#[derive(Debug, Clone)]
pub struct Apple {
    pub pos: Vec2,
    /// Current radius; also the capture radius.
    pub size: f32,
    pub color: Hsl,
}

/// Transition taken by one advance of the target state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEvent {
    /// A new apple appeared; the global hue now follows its color.
    Spawned,
    /// The pointer reached the apple; `eaten` was incremented.
    Captured,
    /// The apple decayed away and burst into particles; `lost` was
    /// incremented.
    Exploded,
    /// The apple was cleared with nothing to show for it.
    Faded,
}

impl Apple {
    /// Spawn an apple in the quadrant diagonal to `prev_pos`.
    ///
    /// With no previous position the anchor is sampled uniformly over the
    /// viewport. Candidates inside the HUD's reserved bottom-right region
    /// are resampled.
    pub fn spawn(prev_pos: Option<Vec2>, viewport: Vec2, rng: &mut SmallRng) -> Self {
        let anchor = prev_pos.unwrap_or_else(|| {
            Vec2::new(
                rng.gen::<f32>() * viewport.x,
                rng.gen::<f32>() * viewport.y,
            )
        });

        let half = viewport * 0.5;
        let quadrant = (quadrant_index(anchor, viewport) + 2) % 4;

        let pos = loop {
            let candidate = Vec2::new(
                rng.gen::<f32>() * half.x + (quadrant % 2) as f32 * half.x,
                rng.gen::<f32>() * half.y + (quadrant / 2) as f32 * half.y,
            );
            let in_hud_reserve = candidate.x > viewport.x - HUD_RESERVED_WIDTH
                && candidate.y > viewport.y - HUD_RESERVED_HEIGHT;
            if !in_hud_reserve {
                break candidate;
            }
        };

        Self {
            pos,
            size: START_SIZE,
            color: Hsl::vivid(rng.gen::<f32>() * 360.0),
        }
    }

    /// Radial capture test: is `point` within the apple's radius?
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.size
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.pos, self.size, self.color, RenderMode::Basic);
    }
}

/// Pseudo-quadrant index of `pos`: `floor(x / halfW) + floor(y / halfH)`.
///
/// Yields 0..=2 for in-viewport positions, conflating the top-right and
/// bottom-left corners. Kept as-is; see the module docs.
#[inline]
pub(crate) fn quadrant_index(pos: Vec2, viewport: Vec2) -> i32 {
    (pos.x / (viewport.x * 0.5)).floor() as i32 + (pos.y / (viewport.y * 0.5)).floor() as i32
}

/// Advance the target state machine by one tick.
///
/// Returns the transition taken, or `None` when the apple simply decayed
/// and was drawn.
pub(crate) fn advance(
    state: &mut SimulationState,
    canvas: &mut dyn Canvas,
) -> Option<TargetEvent> {
    let Some(mut apple) = state.apple.take() else {
        let apple = Apple::spawn(state.last_target_pos, state.viewport, &mut state.rng);
        debug!(
            "target up at ({:.0}, {:.0}), hue {:.0}",
            apple.pos.x, apple.pos.y, apple.color.h
        );
        state.hue = apple.color.h;
        state.apple = Some(apple);
        return Some(TargetEvent::Spawned);
    };

    if let Some(pointer) = state.pointer {
        if apple.contains(pointer) {
            state.score.eaten += 1;
            state.last_target_pos = Some(apple.pos);
            debug!("target captured, eaten = {}", state.score.eaten);
            return Some(TargetEvent::Captured);
        }
    }

    if apple.size <= EXPIRE_THRESHOLD {
        state.last_target_pos = Some(apple.pos);
        if apple.size > 0.0 {
            state.spawn_burst(Some(apple.pos), EXPLOSION_BURST);
            state.score.lost += 1;
            debug!("target expired, lost = {}", state.score.lost);
            return Some(TargetEvent::Exploded);
        }
        return Some(TargetEvent::Faded);
    }

    apple.size -= TARGET_DECAY;
    apple.draw(canvas);
    state.apple = Some(apple);
    None
}
