//! Orbit camera: pose, projection, and the damped orbit controller.

mod controller;
mod core;

pub use controller::CameraController;
pub use core::Camera;
