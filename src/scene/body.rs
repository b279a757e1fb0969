use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Handle into the [`Scene`](super::Scene) body arena.
///
/// Handles are created only during scene construction and stay valid for
/// the lifetime of the scene — bodies are never added or removed after
/// [`Scene::from_spec`](super::Scene::from_spec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    /// Arena index of this handle.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// Role / appearance
// ---------------------------------------------------------------------------

/// Role of a body in the hierarchy.
///
/// Roles are structurally identical; they only inform naming and renderer
/// hints (the root star is the one body with `orbit_distance == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    /// The root body at the global origin.
    Star,
    /// A direct child of the star.
    Planet,
    /// A child of a planet.
    Moon,
}

/// Opaque appearance reference, passed through to the renderer untouched.
///
/// The model never interprets these fields; a texture path is just a
/// string the host's material pipeline resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Appearance {
    /// Base color as linear RGB.
    pub color: [f32; 3],
    /// Optional texture asset path.
    pub texture: Option<String>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: [0.5, 0.5, 0.5],
            texture: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// One record in the body arena: static orbital parameters, the mutable
/// phase angle, tree links, and the positions derived from them.
#[derive(Debug, Clone)]
pub struct Body {
    /// Identifier, unique across the system.
    pub name: String,
    /// Star / planet / moon tag.
    pub role: BodyRole,
    /// Visual scale factor, positive.
    pub radius: f32,
    /// Distance from the parent's origin; 0 for the root star.
    pub orbit_distance: f32,
    /// Radians per tick; sign picks the direction, 0 parks the body.
    pub angular_speed: f32,
    /// Accumulated orbit angle in radians. Never reset or clamped —
    /// sine/cosine periodicity handles wrap-around.
    pub phase: f32,
    /// Opaque material reference for the renderer.
    pub appearance: Appearance,
    /// Whether the renderer should draw this body.
    pub visible: bool,
    pub(crate) parent: Option<BodyId>,
    pub(crate) children: Vec<BodyId>,
    pub(crate) local_position: Vec3,
    pub(crate) world_position: Vec3,
}

impl Body {
    pub(crate) fn new(
        name: String,
        role: BodyRole,
        radius: f32,
        orbit_distance: f32,
        angular_speed: f32,
        appearance: Appearance,
        parent: Option<BodyId>,
    ) -> Self {
        Self {
            name,
            role,
            radius,
            orbit_distance,
            angular_speed,
            phase: 0.0,
            appearance,
            visible: true,
            parent,
            children: Vec::new(),
            // Bodies start on the +Z axis of their parent (phase 0).
            local_position: Vec3::new(0.0, 0.0, orbit_distance),
            world_position: Vec3::ZERO,
        }
    }

    /// Parent handle, `None` for the root star.
    #[must_use]
    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// Child handles in table order.
    #[must_use]
    pub fn children(&self) -> &[BodyId] {
        &self.children
    }

    /// Whether this is the root body.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Offset from the parent's origin, derived from the current phase.
    #[must_use]
    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    /// Absolute position: parent's world position plus the local offset.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    /// Orbit offset for the current phase: `(d·sin φ, 0, d·cos φ)`.
    /// Orbits lie in the horizontal plane, centered on the parent.
    pub(crate) fn orbit_offset(&self) -> Vec3 {
        Vec3::new(
            self.orbit_distance * self.phase.sin(),
            0.0,
            self.orbit_distance * self.phase.cos(),
        )
    }
}
