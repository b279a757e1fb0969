//! The explicit tick loop.
//!
//! One tick is: camera update → orbital advance → render →
//! `mark_rendered`. Strictly sequential and single-threaded — the
//! renderer reads positions only after the advance that produced them,
//! and the next advance starts only after the render returns.
//! Cancellation is simply not scheduling the next tick; there is no
//! in-flight work to abort.

use web_time::Instant;

use crate::engine::OrreryEngine;
use crate::error::OrreryError;
use crate::render::SceneRenderer;
use crate::util::FrameTiming;

/// Owns the engine and a renderer, and drives them tick by tick.
pub struct Driver<R> {
    /// The engine being driven.
    pub engine: OrreryEngine,
    renderer: R,
    timing: FrameTiming,
    last_tick: Instant,
}

impl<R: SceneRenderer> Driver<R> {
    /// Pair an engine with a renderer. `target_fps` of 0 means
    /// unlimited.
    #[must_use]
    pub fn new(engine: OrreryEngine, renderer: R, target_fps: u32) -> Self {
        Self {
            engine,
            renderer,
            timing: FrameTiming::new(target_fps),
            last_tick: Instant::now(),
        }
    }

    /// Run exactly one tick with an explicit `dt` (seconds). `dt` feeds
    /// only camera damping — orbital motion is per-tick fixed-increment.
    pub fn tick(&mut self, dt: f32) -> Result<(), OrreryError> {
        self.engine.update(dt);
        self.renderer
            .render(&self.engine.scene, self.engine.camera())?;
        self.engine.scene.mark_rendered();
        self.timing.end_frame();
        Ok(())
    }

    /// Run one tick with `dt` measured from the previous tick.
    pub fn tick_timed(&mut self) -> Result<(), OrreryError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.tick(dt)
    }

    /// Run a bounded number of ticks with a fixed nominal `dt`.
    pub fn run_frames(&mut self, frames: u64) -> Result<(), OrreryError> {
        const NOMINAL_DT: f32 = 1.0 / 60.0;
        for _ in 0..frames {
            self.tick(NOMINAL_DT)?;
        }
        log::info!(
            "ran {frames} frames, {:.1} fps (smoothed)",
            self.timing.fps()
        );
        Ok(())
    }

    /// Tick until `stop` returns true. The predicate is checked before
    /// each tick, so `|_| true` runs nothing.
    pub fn run_until<F>(&mut self, mut stop: F) -> Result<(), OrreryError>
    where
        F: FnMut(&OrreryEngine) -> bool,
    {
        while !stop(&self.engine) {
            self.tick_timed()?;
        }
        Ok(())
    }

    /// Forward a viewport resize to the camera and the renderer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
        self.renderer.resize(width, height);
    }

    /// Smoothed frames-per-second over recent ticks.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Give the renderer back, dropping the driver.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::render::TraceRenderer;
    use crate::scene::{Scene, SystemSpec};

    fn driver() -> Driver<TraceRenderer> {
        let engine =
            OrreryEngine::new(&SystemSpec::solar_system()).unwrap();
        Driver::new(engine, TraceRenderer::new(), 0)
    }

    #[test]
    fn run_frames_renders_once_per_tick() {
        let mut d = driver();
        d.run_frames(25).unwrap();
        assert_eq!(d.engine.animator.ticks(), 25);
        assert_eq!(d.into_renderer().frames(), 25);
    }

    #[test]
    fn renderer_sees_positions_from_the_same_tick() {
        /// Renderer that asserts the scene was advanced before render.
        struct PhaseCheck {
            expected_ticks: f32,
        }
        impl SceneRenderer for PhaseCheck {
            fn render(
                &mut self,
                scene: &Scene,
                _camera: &Camera,
            ) -> Result<(), OrreryError> {
                self.expected_ticks += 1.0;
                let earth = scene.body_by_name("Earth").unwrap();
                let phase = scene.body(earth).unwrap().phase;
                assert!(
                    (phase - self.expected_ticks * 0.005).abs() < 1e-4
                );
                Ok(())
            }
        }

        let engine =
            OrreryEngine::new(&SystemSpec::solar_system()).unwrap();
        let mut d = Driver::new(
            engine,
            PhaseCheck {
                expected_ticks: 0.0,
            },
            0,
        );
        d.run_frames(10).unwrap();
    }

    #[test]
    fn scene_is_clean_after_each_tick() {
        let mut d = driver();
        d.tick(1.0 / 60.0).unwrap();
        assert!(!d.engine.scene.is_dirty());
    }

    #[test]
    fn run_until_stops_on_predicate() {
        let mut d = driver();
        d.run_until(|engine| engine.animator.ticks() >= 7).unwrap();
        assert_eq!(d.engine.animator.ticks(), 7);
    }

    #[test]
    fn run_until_with_immediate_stop_runs_nothing() {
        let mut d = driver();
        d.run_until(|_| true).unwrap();
        assert_eq!(d.engine.animator.ticks(), 0);
    }

    #[test]
    fn render_failure_propagates() {
        /// Renderer that fails on the third frame.
        struct Flaky {
            frames: u64,
        }
        impl SceneRenderer for Flaky {
            fn render(
                &mut self,
                _scene: &Scene,
                _camera: &Camera,
            ) -> Result<(), OrreryError> {
                self.frames += 1;
                if self.frames == 3 {
                    return Err(OrreryError::Render(
                        "surface lost".into(),
                    ));
                }
                Ok(())
            }
        }

        let engine =
            OrreryEngine::new(&SystemSpec::solar_system()).unwrap();
        let mut d = Driver::new(engine, Flaky { frames: 0 }, 0);
        assert!(d.run_frames(10).is_err());
        // Two good ticks plus the failed one advanced the scene
        assert_eq!(d.engine.animator.ticks(), 3);
    }
}
