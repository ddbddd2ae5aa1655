//! # Sparkfield
//!
//! An interactive 2D particle playground: pointer clicks burst short-lived
//! particles out of a fixed pool, nearby particles are linked into
//! constellations through a spatial hash grid, and a shrinking "apple"
//! target respawns across screen quadrants to be chased for score.
//!
//! Sparkfield is the *simulation core only*. It owns no window, no GPU
//! surface, and no frame loop — the embedder schedules ticks and supplies
//! a [`Canvas`] to draw on, feeding input back as [`InputEvent`]s.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sparkfield::prelude::*;
//!
//! let mut sim = Simulation::new(1280.0, 720.0, SimulationConfig::default())?;
//! let mut canvas = RasterCanvas::new(1280, 720);
//!
//! // Driven by whatever frame scheduler the embedder owns:
//! loop {
//!     sim.handle_event(InputEvent::PointerMoved(Vec2::new(x, y)));
//!     sim.tick(&mut canvas);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles and the pool
//!
//! All particles live in a pre-allocated [`ParticlePool`]. Spawning resets
//! the slot under a wrap-around cursor, so the pool never allocates after
//! construction and never fails — past capacity it recycles the oldest
//! issued particle. Particles shrink every tick and are pruned once their
//! size crosses the death threshold.
//!
//! ### The spatial grid
//!
//! Each tick rebuilds a [`SpatialGrid`] bucketing particles by 100px cell.
//! Connection lines are tested among same-cell pairs only, keeping the
//! pairwise pass near-linear; links that straddle a cell boundary are
//! knowingly skipped.
//!
//! ### The apple
//!
//! One target at a time, advanced through a fixed-priority state machine:
//! spawn into the quadrant diagonal to the last one, get captured by the
//! pointer (`eaten`), or decay away and explode into a particle burst
//! (`lost`).
//!
//! ### Surfaces
//!
//! | Implementation | Use |
//! |----------------|-----|
//! | [`RecordingCanvas`] | headless assertions, draw-call tracing |
//! | [`RasterCanvas`] | offscreen RGBA frames, PNG export |
//! | your own [`Canvas`] | a real window, a terminal, a web canvas |

pub mod error;
pub mod input;
pub mod particle;
pub mod pool;
pub mod raster;
pub mod simulation;
pub mod spatial;
pub mod state;
pub mod surface;
pub mod target;
pub mod time;
pub mod visuals;

pub use error::{ConfigError, ExportError};
pub use glam::Vec2;
pub use input::{EventBus, InputEvent, SpawnRequest};
pub use particle::Particle;
pub use pool::ParticlePool;
pub use raster::RasterCanvas;
pub use simulation::{Simulation, SimulationConfig};
pub use spatial::SpatialGrid;
pub use state::{Score, SimulationState};
pub use surface::{Canvas, DrawCmd, RecordingCanvas};
pub use target::{Apple, TargetEvent};
pub use time::FrameMetrics;
pub use visuals::{Hsl, RenderMode};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use sparkfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConfigError, ExportError};
    pub use crate::input::{EventBus, InputEvent, SpawnRequest};
    pub use crate::raster::RasterCanvas;
    pub use crate::simulation::{Simulation, SimulationConfig};
    pub use crate::state::{Score, SimulationState};
    pub use crate::surface::{Canvas, DrawCmd, RecordingCanvas};
    pub use crate::target::TargetEvent;
    pub use crate::time::FrameMetrics;
    pub use crate::visuals::{Hsl, RenderMode};
    pub use crate::Vec2;
}
