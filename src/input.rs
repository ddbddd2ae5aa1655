//! Input events and the spawn-request bus.
//!
//! The embedder owns the real event sources (pointer, wheel, window) and
//! forwards them as [`InputEvent`]s. Handlers mutate shared state directly
//! — single-threaded event-loop semantics — while particle spawning goes
//! through the [`EventBus`] queue, decoupling the producers from the pool
//! consumer. Requests are dispatched as soon as the event is handled and
//! the queue is drained again at tick start, so an event landing "before
//! or after" a tick is observed either way.
//!
//! # Usage
//!
//! ```ignore
//! sim.handle_event(InputEvent::PointerMoved(Vec2::new(x, y)));
//! sim.handle_event(InputEvent::Click(Vec2::new(x, y)));
//! sim.handle_event(InputEvent::Wheel(delta_y));
//! sim.handle_event(InputEvent::Resized(width, height));
//! ```

use crate::state::SimulationState;
use glam::Vec2;
use std::collections::VecDeque;

/// Particles spawned per click.
pub const CLICK_BURST: usize = 50;

/// Hue degrees per unit of wheel delta.
pub const WHEEL_HUE_RATE: f32 = 0.1;

/// An input delivered by the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Absolute pointer position, delivered on movement.
    PointerMoved(Vec2),
    /// Pointer click at an absolute position.
    Click(Vec2),
    /// Wheel/scroll delta; scales the global hue by [`WHEEL_HUE_RATE`].
    Wheel(f32),
    /// New viewport dimensions.
    Resized(f32, f32),
}

/// A queued request to spawn particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub origin: Vec2,
    pub count: usize,
}

/// Queue decoupling spawn-request producers from the pool consumer.
#[derive(Debug, Default)]
pub struct EventBus {
    pending: VecDeque<SpawnRequest>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a spawn request.
    pub fn emit(&mut self, request: SpawnRequest) {
        self.pending.push_back(request);
    }

    /// Take the oldest pending request, if any.
    pub fn pop(&mut self) -> Option<SpawnRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Apply one input event to the state, routing spawns through the bus.
///
/// Movement carries a trickle rule: while the active particle count sits
/// below the `eaten` score, each move event feeds a single particle at
/// the pointer, so a well-fed field slowly replenishes itself.
pub(crate) fn apply(state: &mut SimulationState, bus: &mut EventBus, event: InputEvent) {
    match event {
        InputEvent::PointerMoved(pos) => {
            state.set_pointer(pos);
            if state.particles.len() < state.score.eaten as usize {
                bus.emit(SpawnRequest {
                    origin: pos,
                    count: 1,
                });
            }
        }
        InputEvent::Click(pos) => {
            state.set_pointer(pos);
            bus.emit(SpawnRequest {
                origin: pos,
                count: CLICK_BURST,
            });
        }
        InputEvent::Wheel(delta) => {
            state.nudge_hue(delta * WHEEL_HUE_RATE);
        }
        InputEvent::Resized(width, height) => {
            state.resize(width, height);
        }
    }
}
