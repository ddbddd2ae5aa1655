//! Frame metrics over a trailing window.
//!
//! Tracks per-tick frame durations and active particle counts in a bounded
//! ring, giving the HUD a rolling FPS figure and an average field size
//! without unbounded growth.
//!
//! # Example
//!
//! ```ignore
//! let mut metrics = FrameMetrics::new(120);
//!
//! // In the frame loop:
//! metrics.begin_frame();
//! // ... simulate and draw ...
//! metrics.end_frame(particle_count);
//!
//! println!("FPS: {}", metrics.fps());
//! println!("Particles: {}", metrics.avg_particles());
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default trailing window, in ticks.
pub const DEFAULT_WINDOW: usize = 120;

/// Rolling frame-time and particle-count statistics.
#[derive(Debug)]
pub struct FrameMetrics {
    window: usize,
    frame_times: VecDeque<Duration>,
    particle_counts: VecDeque<usize>,
    frame_start: Option<Instant>,
}

impl FrameMetrics {
    /// Create a tracker keeping the last `window` samples.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            frame_times: VecDeque::with_capacity(window.max(1)),
            particle_counts: VecDeque::with_capacity(window.max(1)),
            frame_start: None,
        }
    }

    /// Mark the start of a tick.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a tick, recording its duration and the current
    /// particle count. A missing `begin_frame` records a zero duration.
    pub fn end_frame(&mut self, particle_count: usize) {
        let elapsed = self
            .frame_start
            .take()
            .map(|start| start.elapsed())
            .unwrap_or(Duration::ZERO);
        self.record(elapsed, particle_count);
    }

    /// Push one sample, evicting the oldest beyond the window.
    pub fn record(&mut self, frame_time: Duration, particle_count: usize) {
        if self.frame_times.len() == self.window {
            self.frame_times.pop_front();
            self.particle_counts.pop_front();
        }
        self.frame_times.push_back(frame_time);
        self.particle_counts.push_back(particle_count);
    }

    /// Samples currently held.
    #[inline]
    pub fn samples(&self) -> usize {
        self.frame_times.len()
    }

    /// Rolling frames-per-second, rounded. Returns 0 with no samples or
    /// when the window's frames took no measurable time.
    pub fn fps(&self) -> u32 {
        if self.frame_times.is_empty() {
            return 0;
        }
        let total: Duration = self.frame_times.iter().sum();
        let avg = total.as_secs_f64() / self.frame_times.len() as f64;
        if avg <= 0.0 {
            return 0;
        }
        (1.0 / avg).round() as u32
    }

    /// Rolling average of active particle counts, rounded. Returns 0 with
    /// no samples.
    pub fn avg_particles(&self) -> usize {
        if self.particle_counts.is_empty() {
            return 0;
        }
        let total: usize = self.particle_counts.iter().sum();
        ((total as f64) / (self.particle_counts.len() as f64)).round() as usize
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
