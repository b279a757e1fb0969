//! Headless orrery runner.
//!
//! Builds a system (the built-in solar system, or one loaded from a
//! TOML spec), drives it for a bounded number of frames with the
//! tracing renderer, and reports timing. Useful for exercising the
//! model without a GPU; hosts with a real renderer embed
//! [`orrery::Driver`] directly instead.
//!
//! Usage: `orrery [system.toml] [frames]`

use std::path::Path;

use orrery::render::TraceRenderer;
use orrery::scene::SystemSpec;
use orrery::{Driver, OrreryEngine};

/// Default frame count when none is given (ten seconds at 60 Hz).
const DEFAULT_FRAMES: u64 = 600;

fn parse_args() -> Result<(SystemSpec, u64), String> {
    let mut spec = None;
    let mut frames = DEFAULT_FRAMES;

    for arg in std::env::args().skip(1) {
        if let Ok(n) = arg.parse::<u64>() {
            frames = n;
        } else if Path::new(&arg).exists() {
            let loaded = SystemSpec::load(Path::new(&arg))
                .map_err(|e| format!("failed to load '{arg}': {e}"))?;
            spec = Some(loaded);
        } else {
            return Err(format!(
                "unrecognized argument '{arg}' \
                 (usage: orrery [system.toml] [frames])"
            ));
        }
    }

    Ok((spec.unwrap_or_else(SystemSpec::solar_system), frames))
}

fn run() -> Result<(), String> {
    let (spec, frames) = parse_args()?;

    let mut engine = OrreryEngine::new(&spec).map_err(|e| e.to_string())?;
    engine.recenter_camera();

    let mut driver = Driver::new(engine, TraceRenderer::new(), 0);
    driver.run_frames(frames).map_err(|e| e.to_string())?;

    let ticks = driver.engine.animator.ticks();
    let fps = driver.fps();
    log::info!(
        "done: {ticks} ticks, {} frames rendered, {fps:.1} fps",
        driver.into_renderer().frames()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
