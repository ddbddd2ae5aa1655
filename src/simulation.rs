//! Simulation configuration and the per-tick orchestrator.
//!
//! [`Simulation`] owns all mutable state and advances it one frame per
//! [`tick`](Simulation::tick) call. The crate never schedules frames
//! itself: the embedder owns the loop (an animation-frame callback, a
//! fixed-rate timer, a test harness) and calls `tick` once per display
//! refresh, feeding input through [`handle_event`](Simulation::handle_event)
//! in between.
//!
//! # Quick Start
//!
//! ```ignore
//! use sparkfield::prelude::*;
//!
//! let config = SimulationConfig::default().with_render_mode(RenderMode::Glow);
//! let mut sim = Simulation::new(1280.0, 720.0, config)?;
//! let mut canvas = RecordingCanvas::new();
//!
//! loop {
//!     for event in poll_events() {
//!         sim.handle_event(event);
//!     }
//!     sim.tick(&mut canvas);
//! }
//! ```

use crate::error::ConfigError;
use crate::input::{self, EventBus, InputEvent};
use crate::pool::DEFAULT_CAPACITY;
use crate::spatial::{SpatialGrid, DEFAULT_CELL_SIZE};
use crate::state::SimulationState;
use crate::surface::Canvas;
use crate::target::{self, TargetEvent};
use crate::time::{FrameMetrics, DEFAULT_WINDOW};
use crate::visuals::{self, RenderMode};
use glam::Vec2;
use log::debug;

/// Maximum distance at which two same-cell particles are linked.
pub const DEFAULT_LINK_DISTANCE: f32 = 100.0;

/// Stroke width of connection lines.
pub const LINK_WIDTH: f32 = 0.2;

/// Tunable simulation parameters.
///
/// Construct with [`Default`] and adjust with the `with_*` methods; the
/// values are validated when handed to [`Simulation::new`].
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Maximum simultaneous particles (pool slots).
    pub pool_capacity: usize,
    /// Spatial grid cell size; should not be below `link_distance`.
    pub cell_size: f32,
    /// Distance threshold for connection lines.
    pub link_distance: f32,
    /// Draw style for particles.
    pub render_mode: RenderMode,
    /// Whether the score/metrics HUD is drawn.
    pub hud: bool,
    /// Trailing window for frame metrics, in ticks.
    pub metrics_window: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pool_capacity: DEFAULT_CAPACITY,
            cell_size: DEFAULT_CELL_SIZE,
            link_distance: DEFAULT_LINK_DISTANCE,
            render_mode: RenderMode::default(),
            hud: true,
            metrics_window: DEFAULT_WINDOW,
        }
    }
}

impl SimulationConfig {
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_link_distance(mut self, distance: f32) -> Self {
        self.link_distance = distance;
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_hud(mut self, hud: bool) -> Self {
        self.hud = hud;
        self
    }

    pub fn with_metrics_window(mut self, window: usize) -> Self {
        self.metrics_window = window;
        self
    }

    fn validate(&self, width: f32, height: f32) -> Result<(), ConfigError> {
        if self.pool_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(ConfigError::InvalidLinkDistance(self.link_distance));
        }
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::InvalidViewport(width, height));
        }
        Ok(())
    }
}

/// The simulation: state plus the per-tick pipeline.
#[derive(Debug)]
pub struct Simulation {
    state: SimulationState,
    grid: SpatialGrid,
    bus: EventBus,
    metrics: FrameMetrics,
    config: SimulationConfig,
    last_target_event: Option<TargetEvent>,
}

impl Simulation {
    /// Build a simulation for the given viewport.
    pub fn new(width: f32, height: f32, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate(width, height)?;
        debug!(
            "simulation up: {:.0}x{:.0}, {} pool slots, {:.0}px cells",
            width, height, config.pool_capacity, config.cell_size
        );
        Ok(Self {
            state: SimulationState::new(width, height, config.pool_capacity),
            grid: SpatialGrid::new(config.cell_size),
            bus: EventBus::new(),
            metrics: FrameMetrics::new(config.metrics_window),
            config,
            last_target_event: None,
        })
    }

    /// Feed one input event. Effects land immediately, before the next
    /// tick observes the state.
    pub fn handle_event(&mut self, event: InputEvent) {
        input::apply(&mut self.state, &mut self.bus, event);
        self.pump_bus();
    }

    /// Spawn `count` particles at `origin`, or at the pointer (falling
    /// back to the viewport center) when `origin` is `None`.
    pub fn spawn_at(&mut self, origin: Option<Vec2>, count: usize) {
        self.state.spawn_burst(origin, count);
    }

    /// Advance one frame, issuing draw calls against `canvas`.
    ///
    /// Runs the fixed per-tick order: clear, spatial rebuild, particle
    /// step/draw/prune, connection lines, target state machine, HUD.
    /// While paused the tick mutates nothing and draws nothing; frame
    /// metrics still record so the HUD stays honest on resume.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        self.metrics.begin_frame();
        self.pump_bus();
        self.last_target_event = None;

        if !self.state.paused {
            canvas.clear();
            self.rebuild_grid();
            self.step_particles(canvas);
            self.draw_links(canvas);
            self.last_target_event = target::advance(&mut self.state, canvas);
            if self.config.hud {
                visuals::draw_hud(&self.state, &self.metrics, canvas);
            }
        }

        self.metrics.end_frame(self.state.particles.len());
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    #[inline]
    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The target transition taken by the most recent unpaused tick.
    #[inline]
    pub fn last_target_event(&self) -> Option<TargetEvent> {
        self.last_target_event
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.state.paused = !self.state.paused;
    }

    /// Drain queued spawn requests into the pool.
    fn pump_bus(&mut self) {
        while let Some(request) = self.bus.pop() {
            self.state.spawn_burst(Some(request.origin), request.count);
        }
    }

    /// Rebuild the spatial grid from the active particles' current
    /// positions (pre-step, matching the link pass's cell assignment to
    /// where particles entered the tick).
    fn rebuild_grid(&mut self) {
        let state = &self.state;
        self.grid.rebuild(
            state
                .particles
                .iter()
                .map(|&slot| (slot, state.pool.slot(slot).pos)),
        );
    }

    /// Integrate, draw, and prune the active particles.
    fn step_particles(&mut self, canvas: &mut dyn Canvas) {
        let viewport = self.state.viewport;
        let mode = self.config.render_mode;

        let handles = std::mem::take(&mut self.state.particles);
        let mut survivors = Vec::with_capacity(handles.len());
        for slot in handles {
            let particle = self.state.pool.slot_mut(slot);
            particle.step(viewport);
            particle.draw(canvas, mode);
            if particle.alive() {
                survivors.push(slot);
            }
        }
        self.state.particles = survivors;
    }

    /// Draw connection lines between same-cell particle pairs closer than
    /// the link distance.
    fn draw_links(&self, canvas: &mut dyn Canvas) {
        for bucket in self.grid.buckets() {
            for i in 0..bucket.len() {
                for j in (i + 1)..bucket.len() {
                    let a = self.state.pool.slot(bucket[i]);
                    let b = self.state.pool.slot(bucket[j]);
                    if a.pos.distance(b.pos) < self.config.link_distance {
                        canvas.line(a.pos, b.pos, a.color, LINK_WIDTH);
                    }
                }
            }
        }
    }
}
