//! Arrow Rush entry point
//!
//! Runs a headless session: simulated clock, autoplay (unless disabled in the
//! settings file), and a render pass into a vertex batch every frame. A window
//! backend would replace the simulated clock and upload the batch instead.

use std::path::PathBuf;

use env_logger::{Builder, Env};
use log::LevelFilter;

use arrow_rush::consts::FRAME_DT;
use arrow_rush::renderer::MeshSink;
use arrow_rush::sim::{GameEvent, TickInput};
use arrow_rush::{Game, Settings};

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    // Only fails if a logger is already installed
    let _ = Builder::from_env(env).try_init();
}

fn main() {
    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = settings_path
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    init_logging(settings.verbose);
    log::info!("Arrow Rush (headless) starting...");

    let mut game = Game::new(&settings);
    let mut sink = MeshSink::new();
    // Hold begin so an unattended run still leaves the start screen
    let input = TickInput {
        begin: true,
        ..Default::default()
    };

    let total_frames = (f64::from(settings.run_seconds) / FRAME_DT).ceil() as u64;
    let mut hits = 0u32;
    for frame in 0..=total_frames {
        let now = frame as f64 * FRAME_DT;
        for event in game.update(now, &input) {
            match event {
                GameEvent::Scored { .. } => hits += 1,
                GameEvent::Missed { id, lane } => {
                    log::info!("Missed arrow {id} in {lane} lane");
                }
                _ => {}
            }
        }

        sink.reset();
        game.render(&mut sink);

        if game.is_over() {
            break;
        }
    }

    log::debug!(
        "Last frame: {} vertices ({} bytes), {} text runs",
        sink.vertices.len(),
        sink.vertex_bytes().len(),
        sink.texts.len()
    );
    for run in &sink.texts {
        log::info!("{}", run.text);
    }
    log::info!(
        "Session {} finished after {:.1}s: {} hits, score {}, speed {:.2}",
        game.state.seed,
        game.clock.elapsed,
        hits,
        game.state.total_score,
        game.state.speed
    );
}
