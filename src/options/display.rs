use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Renderer hints. The scene model never reads these; they ride along
/// for whatever [`SceneRenderer`](crate::render::SceneRenderer) the host
/// plugs in.
pub struct DisplayOptions {
    /// Whether to draw orbit path circles.
    #[schemars(title = "Show Orbit Paths")]
    pub show_orbit_paths: bool,
    /// Whether to draw body name labels.
    #[schemars(title = "Show Labels")]
    pub show_labels: bool,
    /// Sphere tessellation segments per axis.
    #[schemars(title = "Sphere Detail", range(min = 8, max = 64), extend("step" = 1))]
    pub sphere_segments: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_orbit_paths: true,
            show_labels: false,
            sphere_segments: 32,
        }
    }
}
