use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Orbital animation parameters.
pub struct AnimationOptions {
    /// Multiplier applied to every body's angular speed per tick.
    #[schemars(title = "Time Scale", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub time_scale: f32,
    /// Whether orbital advancement runs. Off freezes the scene while
    /// the camera stays live.
    #[schemars(title = "Animate")]
    pub enabled: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            enabled: true,
        }
    }
}
