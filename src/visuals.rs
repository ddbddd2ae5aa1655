//! Visual configuration and HUD rendering.
//!
//! This module provides the rendering options that control how particles
//! appear, separate from the motion code that controls where they go, plus
//! the score/metrics HUD drawn in the bottom-right corner.
//!
//! # Usage
//!
//! ```ignore
//! let config = SimulationConfig::default().with_render_mode(RenderMode::Basic);
//! ```

use crate::state::SimulationState;
use crate::surface::Canvas;
use crate::time::FrameMetrics;
use glam::Vec2;

/// Horizontal and vertical padding for HUD text, in surface pixels.
pub const TEXT_PADDING: f32 = 20.0;

/// Width of the bottom-right region reserved for HUD text.
///
/// Targets are never spawned inside this region.
pub const HUD_RESERVED_WIDTH: f32 = 300.0;

/// Height of the bottom-right region reserved for HUD text.
pub const HUD_RESERVED_HEIGHT: f32 = 60.0;

/// How a particle is rendered.
///
/// A closed set of draw styles dispatched by the [`Canvas`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Plain filled circle.
    Basic,
    /// Filled circle with a soft halo around it (default).
    #[default]
    Glow,
}

/// An HSL color.
///
/// Hue is in degrees `[0, 360]`, saturation and lightness in percent
/// `[0, 100]`. Particles and targets are colored with full saturation at
/// 50% lightness, so hue alone carries the identity of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl { h: 0.0, s: 0.0, l: 100.0 };
    pub const BLACK: Hsl = Hsl { h: 0.0, s: 0.0, l: 0.0 };

    /// Fully saturated color at 50% lightness for the given hue.
    pub fn vivid(hue: f32) -> Self {
        Self { h: hue, s: 100.0, l: 50.0 }
    }

    /// Convert to 8-bit RGBA (alpha always 255).
    pub fn to_rgba(self) -> [u8; 4] {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
            255,
        ]
    }
}

/// Draw the HUD text stack: score, hint, and rolling metrics.
///
/// Lines are right-anchored [`TEXT_PADDING`] pixels from the right edge and
/// stacked upward from the bottom edge. Text is stroked in the live target's
/// color (black when no target is up) and filled white.
pub(crate) fn draw_hud(
    state: &SimulationState,
    metrics: &FrameMetrics,
    canvas: &mut dyn Canvas,
) {
    let score_line = format!(
        "Eaten: {}; Lost: {}",
        state.score.eaten, state.score.lost
    );
    let hint_line = "Click to create firework".to_string();
    let fps_line = format!("FPS: {}", metrics.fps());
    let particles_line = format!("Particles: {}", metrics.avg_particles());

    let outline = state
        .apple
        .as_ref()
        .map(|apple| apple.color)
        .unwrap_or(Hsl::BLACK);

    let lines = [score_line, hint_line, fps_line, particles_line];
    let count = lines.len() as f32;

    for (row, line) in lines.iter().enumerate() {
        let x = state.viewport.x - canvas.text_width(line) - TEXT_PADDING;
        let y = state.viewport.y - TEXT_PADDING * (count - row as f32);
        canvas.fill_text(line, Vec2::new(x, y), Hsl::WHITE, outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vivid_is_full_saturation() {
        let c = Hsl::vivid(120.0);
        assert_eq!(c.s, 100.0);
        assert_eq!(c.l, 50.0);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsl::vivid(0.0).to_rgba(), [255, 0, 0, 255]);
        assert_eq!(Hsl::vivid(120.0).to_rgba(), [0, 255, 0, 255]);
        assert_eq!(Hsl::vivid(240.0).to_rgba(), [0, 0, 255, 255]);
    }

    #[test]
    fn test_grayscale_extremes() {
        assert_eq!(Hsl::WHITE.to_rgba(), [255, 255, 255, 255]);
        assert_eq!(Hsl::BLACK.to_rgba(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_hue_wraps_in_conversion() {
        assert_eq!(Hsl::vivid(360.0).to_rgba(), Hsl::vivid(0.0).to_rgba());
        assert_eq!(Hsl::vivid(-120.0).to_rgba(), Hsl::vivid(240.0).to_rgba());
    }
}
