//! The per-tick orbital update.
//!
//! Each `advance` call adds `angular_speed × time_scale` to every
//! non-root body's phase and rebuilds positions in one
//! parent-before-child pass. There is no wall-clock input anywhere in
//! this path: trajectories are a pure function of call count, so a fixed
//! spec plus N calls is bit-for-bit reproducible.

use crate::scene::Scene;

/// Configuration for the orbital animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Multiplier applied to every body's angular speed per tick.
    /// Default: 1.0
    pub time_scale: f32,
    /// Whether advancement is enabled. When false, `advance` is a no-op
    /// — the scene holds its pose while the camera stays live.
    pub enabled: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            enabled: true,
        }
    }
}

/// Advances a scene's orbital phases, one fixed increment per call.
#[derive(Debug, Default)]
pub struct OrbitAnimator {
    /// Global animation configuration.
    pub config: AnimationConfig,
    /// Ticks applied since construction (diagnostics only).
    ticks: u64,
}

impl OrbitAnimator {
    /// Create an animator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every non-root body exactly once.
    ///
    /// For each body in parent-before-child order:
    /// 1. `phase += angular_speed * time_scale`
    /// 2. `local = (orbit_distance·sin(phase), 0, orbit_distance·cos(phase))`
    /// 3. `world = parent.world + local`
    ///
    /// The root's world position is pinned at the origin and never
    /// recomputed. Never fails on a well-formed scene; never changes the
    /// tree shape. External mutation of a body's `angular_speed` between
    /// calls is tolerated — the new speed simply applies from the next
    /// increment on.
    pub fn advance(&mut self, scene: &mut Scene) {
        if !self.config.enabled {
            return;
        }
        scene.step_phases(self.config.time_scale);
        self.ticks += 1;
    }

    /// Number of ticks applied so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
