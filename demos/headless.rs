//! Headless run: script a few clicks, advance the simulation at a fixed
//! cadence, and export PNG frames.
//!
//! Run with: `cargo run --example headless`
//!
//! Frames land in `frames/`; set `RUST_LOG=debug` to watch target
//! transitions go by.

use sparkfield::prelude::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const TICKS: u32 = 240;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut sim = Simulation::new(WIDTH as f32, HEIGHT as f32, SimulationConfig::default())?;
    let mut canvas = RasterCanvas::new(WIDTH, HEIGHT);

    let out = std::path::Path::new("frames");
    std::fs::create_dir_all(out)?;

    sim.handle_event(InputEvent::PointerMoved(Vec2::new(320.0, 180.0)));

    for tick in 0..TICKS {
        // A click every second of simulated time, walking rightward.
        if tick % 60 == 0 {
            let x = 120.0 + (tick / 60) as f32 * 110.0;
            sim.handle_event(InputEvent::Click(Vec2::new(x, 180.0)));
        }
        // Drift the hue with the wheel halfway through.
        if tick == TICKS / 2 {
            sim.handle_event(InputEvent::Wheel(900.0));
        }

        sim.tick(&mut canvas);

        if tick % 20 == 0 {
            canvas.save_png(out.join(format!("frame_{tick:04}.png")))?;
        }
    }

    let score = sim.state().score;
    println!(
        "done: {} ticks, eaten {}, lost {}, {} particles live, ~{} avg",
        TICKS,
        score.eaten,
        score.lost,
        sim.state().particles.len(),
        sim.metrics().avg_particles(),
    );
    Ok(())
}
