//! The renderer contract.
//!
//! Rasterization, materials, and texture decoding live outside this
//! crate. A host plugs its drawing backend in behind [`SceneRenderer`];
//! the driver hands it the scene and camera once per tick, after the
//! orbital advance and before the next one — the scene is never mutated
//! while a renderer is reading it.

use crate::camera::Camera;
use crate::error::OrreryError;
use crate::scene::Scene;

/// Consumes (scene, camera) each tick and paints a frame. Opaque beyond
/// that.
pub trait SceneRenderer {
    /// Draw one frame from the current scene and camera pose.
    fn render(
        &mut self,
        scene: &Scene,
        camera: &Camera,
    ) -> Result<(), OrreryError>;

    /// Viewport size changed. Default: ignore.
    fn resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }
}

/// Headless reference renderer: counts frames and logs body positions
/// at debug level. Used by the `orrery` binary and in tests.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    frames: u64,
}

impl TraceRenderer {
    /// Create a renderer that has drawn nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneRenderer for TraceRenderer {
    fn render(
        &mut self,
        scene: &Scene,
        camera: &Camera,
    ) -> Result<(), OrreryError> {
        self.frames += 1;
        if log::log_enabled!(log::Level::Debug) {
            for body in scene.visible_bodies() {
                let pos = body.world_position();
                log::debug!(
                    "frame {}: {} at ({:.3}, {:.3}, {:.3})",
                    self.frames,
                    body.name,
                    pos.x,
                    pos.y,
                    pos.z
                );
            }
            log::debug!(
                "frame {}: camera eye ({:.1}, {:.1}, {:.1})",
                self.frames,
                camera.eye.x,
                camera.eye.y,
                camera.eye.z
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;
    use crate::scene::SystemSpec;

    #[test]
    fn trace_renderer_counts_frames() {
        let scene = Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        let camera =
            crate::camera::CameraController::new(&CameraOptions::default(), 1.6)
                .camera;
        let mut renderer = TraceRenderer::new();
        for _ in 0..3 {
            renderer.render(&scene, &camera).unwrap();
        }
        assert_eq!(renderer.frames(), 3);
    }
}
