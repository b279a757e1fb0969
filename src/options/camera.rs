use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial orbit distance from the focus point.
    #[schemars(skip)]
    pub start_distance: f32,
    /// Smallest allowed orbit distance.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Largest allowed orbit distance.
    #[schemars(title = "Max Distance", range(min = 50.0, max = 400.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Per-second decay rate of the rotation glide (0 disables damping).
    #[schemars(title = "Damping", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub damping: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            znear: 0.1,
            zfar: 400.0,
            start_distance: 100.0,
            min_distance: 20.0,
            max_distance: 200.0,
            rotate_speed: 0.01,
            pan_speed: 0.1,
            zoom_speed: 0.05,
            damping: 6.0,
        }
    }
}
