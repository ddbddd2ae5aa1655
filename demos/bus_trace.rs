//! Draw-call census: what each tick of the simulation actually emits.
//!
//! Run with: `cargo run --example bus_trace`
//!
//! Drives the simulation against a recording surface and prints how many
//! circles, lines, and text draws each sampled frame produced — a quick
//! smoke check that needs no pixels at all.

use sparkfield::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut sim = Simulation::new(1280.0, 720.0, SimulationConfig::default())?;
    let mut canvas = RecordingCanvas::new();

    sim.handle_event(InputEvent::Click(Vec2::new(400.0, 400.0)));

    for tick in 0..120 {
        if tick == 40 {
            sim.handle_event(InputEvent::Click(Vec2::new(420.0, 380.0)));
        }
        sim.tick(&mut canvas);

        if tick % 10 == 0 {
            println!(
                "tick {:3}: {:3} circles, {:3} links, {} texts, {:4} live, target: {:?}",
                tick,
                canvas.circles(),
                canvas.lines(),
                canvas.texts(),
                sim.state().particles.len(),
                sim.last_target_event(),
            );
        }
    }

    let score = sim.state().score;
    println!("score: eaten {}, lost {}", score.eaten, score.lost);
    Ok(())
}
