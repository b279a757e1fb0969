use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Quaternion orbit controller: rotates around a focus point at a
/// clamped distance, with pan, zoom, and a damped glide after rotation
/// input stops.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    /// Residual rotation velocity for damping, in input units/second.
    rotate_velocity: Vec2,

    /// Current camera pose, rebuilt whenever the orbit state changes.
    pub camera: Camera,

    /// Whether the primary mouse button is held.
    pub mouse_pressed: bool,
    /// Whether shift is held (drag pans instead of rotating).
    pub shift_pressed: bool,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    /// Per-second decay factor for the rotation glide; 0 disables it.
    damping: f32,
    min_distance: f32,
    max_distance: f32,
}

impl CameraController {
    /// Create a controller looking at the origin from the options'
    /// default pose.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = options.start_distance;
        let orientation = Quat::IDENTITY;

        let camera = Camera {
            eye: focus_point + Vec3::new(0.0, 0.0, distance),
            target: focus_point,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut controller = Self {
            orientation,
            distance,
            focus_point,
            rotate_velocity: Vec2::ZERO,
            camera,
            mouse_pressed: false,
            shift_pressed: false,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            damping: options.damping,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        controller.update_camera_pos();
        controller
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Push new option values without disturbing the current pose.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.damping = options.damping;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
        self.distance =
            self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Apply the damped rotation glide. Call once per tick before
    /// rendering.
    pub fn update(&mut self, dt: f32) {
        if self.damping <= 0.0
            || self.rotate_velocity.length_squared() < 1e-8
        {
            self.rotate_velocity = Vec2::ZERO;
            return;
        }
        self.apply_rotation(self.rotate_velocity * dt);
        // Exponential decay toward rest
        let decay = (-self.damping * dt).exp();
        self.rotate_velocity *= decay;
    }

    fn apply_rotation(&mut self, delta: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around camera's right vector
        let right = self.orientation * Vec3::X;
        let vertical =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = vertical * self.orientation;

        self.update_camera_pos();
    }

    /// Rotate from a drag delta; feeds the damping glide.
    pub fn rotate(&mut self, delta: Vec2) {
        self.apply_rotation(delta);
        self.rotate_velocity = delta * 10.0;
    }

    /// Pan the focus point in the camera plane.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let translation = right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);
        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Zoom by scaling the orbit distance (positive delta = closer).
    /// Distance is clamped to the configured range.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance =
            self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current focus point.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Adjust camera to fit the given positions, centering on their
    /// centroid and setting distance so all points are visible.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 = positions.iter().copied().sum::<Vec3>()
            / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;

        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).tan();
        // 1.5x padding for a comfortable view, still inside the clamp
        self.distance = (fit_distance * 1.5)
            .clamp(self.min_distance, self.max_distance);

        self.update_camera_pos();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), 1.6)
    }

    #[test]
    fn starts_on_z_axis_at_start_distance() {
        let c = controller();
        let opts = CameraOptions::default();
        assert_eq!(c.camera.target, Vec3::ZERO);
        assert!((c.camera.eye.z - opts.start_distance).abs() < 1e-5);
    }

    #[test]
    fn zoom_clamps_to_distance_range() {
        let mut c = controller();
        for _ in 0..100 {
            c.zoom(1.0);
        }
        assert_eq!(c.distance(), CameraOptions::default().min_distance);

        for _ in 0..200 {
            c.zoom(-1.0);
        }
        assert_eq!(c.distance(), CameraOptions::default().max_distance);
    }

    #[test]
    fn rotation_preserves_distance() {
        let mut c = controller();
        let before = c.distance();
        c.rotate(Vec2::new(35.0, -12.0));
        let eye_dist = (c.camera.eye - c.camera.target).length();
        assert!((eye_dist - before).abs() < 1e-3);
    }

    #[test]
    fn damping_glide_decays_to_rest() {
        let mut c = controller();
        c.rotate(Vec2::new(10.0, 0.0));
        let eye_after_drag = c.camera.eye;

        // First tick keeps gliding
        c.update(0.016);
        assert!(c.camera.eye != eye_after_drag);

        // A few seconds of ticks should bleed the velocity off
        for _ in 0..600 {
            c.update(0.016);
        }
        let settled = c.camera.eye;
        c.update(0.016);
        assert!((c.camera.eye - settled).length() < 1e-4);
    }

    #[test]
    fn pan_moves_focus_point() {
        let mut c = controller();
        c.pan(Vec2::new(10.0, 0.0));
        assert!(c.focus_point() != Vec3::ZERO);
        assert_eq!(c.camera.target, c.focus_point());
    }

    #[test]
    fn fit_to_positions_centers_on_centroid() {
        let mut c = controller();
        let positions = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 30.0),
            Vec3::new(0.0, 0.0, -30.0),
        ];
        c.fit_to_positions(&positions);
        assert!((c.focus_point() - Vec3::ZERO).length() < 1e-5);
        assert!(c.distance() >= CameraOptions::default().min_distance);
        assert!(c.distance() <= CameraOptions::default().max_distance);
    }

    #[test]
    fn fit_to_empty_positions_is_noop() {
        let mut c = controller();
        let before = (c.focus_point(), c.distance());
        c.fit_to_positions(&[]);
        assert_eq!(before, (c.focus_point(), c.distance()));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut c = controller();
        c.resize(1920, 1080);
        assert!((c.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        // Degenerate height doesn't divide by zero
        c.resize(800, 0);
        assert!(c.camera.aspect.is_finite());
    }
}
