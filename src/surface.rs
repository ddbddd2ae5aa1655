//! The drawing surface interface.
//!
//! The simulation core never owns a window or a GPU surface; it issues
//! immediate-mode draw calls against whatever implements [`Canvas`]. The
//! embedder supplies the real surface (a browser canvas, a GPU renderer, a
//! terminal cell grid); the crate ships two implementations of its own:
//! [`RecordingCanvas`] here for headless assertions, and
//! [`RasterCanvas`](crate::raster::RasterCanvas) for offscreen PNG frames.
//!
//! # Usage
//!
//! ```ignore
//! let mut canvas = RecordingCanvas::new();
//! sim.tick(&mut canvas);
//! let circles = canvas.commands().iter().filter(|c| matches!(c, DrawCmd::Circle { .. }));
//! ```

use crate::visuals::{Hsl, RenderMode};
use glam::Vec2;

/// Immediate-mode 2D drawing surface.
///
/// The full interface the core presents to the external drawing
/// collaborator. All coordinates are surface pixels with the origin at the
/// top-left corner.
pub trait Canvas {
    /// Erase the whole frame buffer.
    fn clear(&mut self);

    /// Draw a filled circle, optionally with a halo per [`RenderMode`].
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl, mode: RenderMode);

    /// Stroke a straight line segment.
    fn line(&mut self, from: Vec2, to: Vec2, color: Hsl, width: f32);

    /// Draw text with `pos` at its left baseline, filled with `fill` and
    /// outlined with `outline`.
    fn fill_text(&mut self, text: &str, pos: Vec2, fill: Hsl, outline: Hsl);

    /// Advance width of `text` in surface pixels, used for right-anchoring.
    fn text_width(&self, text: &str) -> f32;
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Hsl,
        mode: RenderMode,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Hsl,
        width: f32,
    },
    Text {
        text: String,
        pos: Vec2,
    },
}

/// A [`Canvas`] that records every draw call instead of rendering.
///
/// Useful for tests and for tracing what a tick produced without standing
/// up a real surface. `clear` drops previously recorded commands, so after
/// a tick the buffer holds exactly that frame.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCmd>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Count of recorded circle draws.
    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
            .count()
    }

    /// Count of recorded line draws.
    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count()
    }

    /// Count of recorded text draws.
    pub fn texts(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl, mode: RenderMode) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
            mode,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Hsl, width: f32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, _fill: Hsl, _outline: Hsl) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        // Rough 20px-font advance; only relative layout matters here.
        text.len() as f32 * 11.0
    }
}
