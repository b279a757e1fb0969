//! Orbital animation: deterministic per-tick phase advancement.
//!
//! The animator owns no bodies — it drives a [`Scene`](crate::scene::Scene)
//! forward one fixed increment per call. See [`OrbitAnimator`].

mod orbit;

pub use orbit::{AnimationConfig, OrbitAnimator};
