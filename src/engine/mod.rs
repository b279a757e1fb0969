//! The top-level context: one object owning scene, animator, camera,
//! and options, with an explicit construction lifecycle.
//!
//! Split across files the way the subsystems divide: input dispatch in
//! `input.rs`, option application in `options.rs`, the parameter-panel
//! surface in `tunables.rs`.

mod input;
mod options;
mod tunables;

pub use tunables::{Tunable, TunableField};

use crate::animation::OrbitAnimator;
use crate::camera::{Camera, CameraController};
use crate::error::OrreryError;
use crate::options::Options;
use crate::scene::{Scene, SystemSpec};

/// Default aspect ratio until the host reports a viewport size.
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// The orrery engine: owns the body arena and everything that mutates
/// it between frames. No module-level state — hosts construct one of
/// these, drive it from their tick loop, and drop it at teardown.
pub struct OrreryEngine {
    /// Authoritative scene (the body arena).
    pub scene: Scene,
    /// Orbital phase animator.
    pub animator: OrbitAnimator,
    /// Orbit camera controller.
    pub camera_controller: CameraController,
    /// Centralized runtime options.
    options: Options,
    /// Last cursor position, for drag deltas.
    last_cursor_pos: Option<(f32, f32)>,
}

impl OrreryEngine {
    /// Build an engine from a system spec with default options.
    pub fn new(spec: &SystemSpec) -> Result<Self, OrreryError> {
        Self::with_options(spec, Options::default())
    }

    /// Build an engine from a system spec and explicit options.
    pub fn with_options(
        spec: &SystemSpec,
        options: Options,
    ) -> Result<Self, OrreryError> {
        let scene = Scene::from_spec(spec)?;
        let camera_controller =
            CameraController::new(&options.camera, DEFAULT_ASPECT);

        let mut engine = Self {
            scene,
            animator: OrbitAnimator::new(),
            camera_controller,
            options,
            last_cursor_pos: None,
        };
        engine.apply_options();
        log::info!(
            "engine ready: {} bodies, animation {}",
            engine.scene.body_count(),
            if engine.animator.config.enabled {
                "running"
            } else {
                "paused"
            }
        );
        Ok(engine)
    }

    /// Per-tick update: damped camera motion first, then one orbital
    /// advance. `dt` feeds only the camera glide — orbital phase moves
    /// by a fixed increment per call regardless of wall-clock time.
    pub fn update(&mut self, dt: f32) {
        self.camera_controller.update(dt);
        self.animator.advance(&mut self.scene);
    }

    /// Viewport resize: updates the camera aspect ratio. The orbital
    /// model is unaffected.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_controller.resize(width, height);
    }

    /// Center the camera on the visible bodies.
    pub fn recenter_camera(&mut self) {
        let positions = self.scene.all_positions();
        self.camera_controller.fit_to_positions(&positions);
    }

    /// Current camera pose for the renderer.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera_controller.camera
    }

    /// Read access to the options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
