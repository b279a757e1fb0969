//! Options methods for `OrreryEngine`.

use super::OrreryEngine;
use crate::options::Options;

impl OrreryEngine {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to all subsystems (camera, animator).
    pub(super) fn apply_options(&mut self) {
        self.camera_controller.apply_options(&self.options.camera);
        self.animator.config.time_scale = self.options.animation.time_scale;
        self.animator.config.enabled = self.options.animation.enabled;
        // Display hints changed: the renderer needs a fresh look even
        // though body data didn't move.
        self.scene.force_dirty();
    }
}
