// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison against exact constants is routine in scene math
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
// Scene math casts (usize counts → f32) are intentional and safe
#![allow(clippy::cast_precision_loss)]

//! Animated solar-system orrery built on a retained scene graph.
//!
//! Orrery models a star, its planets, and their moons as an arena of
//! [`scene::Body`] records and advances their orbital phase once per tick
//! with a closed-form trigonometric update. Rendering is delegated to a
//! host-supplied [`render::SceneRenderer`]; the crate owns everything up
//! to that boundary: the scene graph, the orbit camera, options and
//! presets, and the tick-loop driver.
//!
//! # Key entry points
//!
//! - [`engine::OrreryEngine`] - the top-level context (scene, animator,
//!   camera, options)
//! - [`scene::Scene`] - the body arena built from a [`scene::SystemSpec`]
//! - [`driver::Driver`] - the explicit advance-then-render tick loop
//! - [`options::Options`] - runtime configuration (camera, animation,
//!   display)
//!
//! # Architecture
//!
//! The body arena stores parents before children, so a single in-order
//! pass is a valid parent-before-child traversal: each body's world
//! position is its parent's world position plus an offset of
//! `orbit_distance` rotated by the accumulated `phase` angle. Motion is a
//! pure function of tick count — wall-clock time feeds only camera
//! damping and FPS accounting, never orbital phase.

pub mod animation;
pub mod camera;
pub mod driver;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod util;

pub use driver::Driver;
pub use engine::OrreryEngine;
pub use error::OrreryError;
pub use input::{InputEvent, MouseButton};
