//! Authoritative scene: the body arena, name index, and dirty tracking.
//!
//! Bodies live in a flat [`Vec`] in construction order — star first,
//! then each planet followed by its moons. Parents are always pushed
//! before their children, so iterating the arena in index order is a
//! valid parent-before-child traversal; the animator relies on this to
//! resolve world positions in a single pass.

mod body;
mod spec;

pub use body::{Appearance, Body, BodyId, BodyRole};
use glam::Vec3;
use rustc_hash::FxHashMap;
pub use spec::{MoonSpec, PlanetSpec, StarSpec, SystemSpec};

use crate::error::OrreryError;

/// The authoritative scene. Owns all bodies in a flat arena.
///
/// The tree shape is fixed at construction: no bodies are added or
/// removed afterwards, and `phase` (plus panel-driven tunables) are the
/// only fields that change during the animation loop.
pub struct Scene {
    /// Bodies in construction order (parents before children).
    bodies: Vec<Body>,
    /// Name → handle lookup for the tunables API.
    by_name: FxHashMap<String, BodyId>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Build the fully-linked arena from a validated spec.
    ///
    /// The star becomes the root at the global origin; each planet a
    /// child of the star; each moon a child of its planet. Fails fast
    /// with a descriptive error on a malformed spec; touches no
    /// rendering resources.
    pub fn from_spec(spec: &SystemSpec) -> Result<Self, OrreryError> {
        spec.validate()?;

        let mut scene = Self {
            bodies: Vec::with_capacity(spec.body_count()),
            by_name: FxHashMap::default(),
            generation: 0,
            rendered_generation: 0,
        };

        let root = scene.push_body(Body::new(
            spec.star.name.clone(),
            BodyRole::Star,
            spec.star.radius,
            0.0,
            0.0,
            spec.star.appearance.clone(),
            None,
        ));

        for planet in &spec.planets {
            let planet_id = scene.push_body(Body::new(
                planet.name.clone(),
                BodyRole::Planet,
                planet.radius,
                planet.orbit_distance,
                planet.angular_speed,
                planet.appearance.clone(),
                Some(root),
            ));
            for moon in &planet.moons {
                let _ = scene.push_body(Body::new(
                    moon.name.clone(),
                    BodyRole::Moon,
                    moon.radius,
                    moon.orbit_distance,
                    moon.angular_speed,
                    moon.appearance.clone(),
                    Some(planet_id),
                ));
            }
        }

        scene.propagate_transforms();
        log::debug!(
            "built scene '{}': {} bodies",
            scene.bodies[0].name,
            scene.bodies.len()
        );
        Ok(scene)
    }

    /// Push a body, wire it to its parent, index its name.
    fn push_body(&mut self, body: Body) -> BodyId {
        #[allow(clippy::cast_possible_truncation)]
        let id = BodyId(self.bodies.len() as u32);
        if let Some(parent) = body.parent {
            self.bodies[parent.index()].children.push(id);
        }
        let _ = self.by_name.insert(body.name.clone(), id);
        self.bodies.push(body);
        id
    }

    /// Recompute every body's local and world position from its current
    /// phase, in a single parent-before-child pass. The root stays
    /// pinned at the origin.
    pub(crate) fn propagate_transforms(&mut self) {
        for idx in 0..self.bodies.len() {
            let Some(parent) = self.bodies[idx].parent else {
                self.bodies[idx].local_position = Vec3::ZERO;
                self.bodies[idx].world_position = Vec3::ZERO;
                continue;
            };
            // Parent index < child index, so its world position is
            // already current within this pass.
            let parent_world = self.bodies[parent.index()].world_position;
            let local = self.bodies[idx].orbit_offset();
            self.bodies[idx].local_position = local;
            self.bodies[idx].world_position = parent_world + local;
        }
    }

    // -- Dirty tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Force the scene dirty (e.g. when display options change but body
    /// data hasn't).
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    /// Mark current generation as rendered (call after the renderer has
    /// consumed the frame).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Body access --

    /// Handle of the root star.
    #[must_use]
    pub fn root(&self) -> BodyId {
        BodyId(0)
    }

    /// Read access to a body.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Write access (invalidates the rendered generation).
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.invalidate();
        self.bodies.get_mut(id.index())
    }

    /// Look up a body handle by name.
    #[must_use]
    pub fn body_by_name(&self, name: &str) -> Option<BodyId> {
        self.by_name.get(name).copied()
    }

    /// Read access to all bodies (parent-before-child order).
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of bodies including the root.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Toggle visibility.
    pub fn set_visible(&mut self, id: BodyId, visible: bool) {
        if let Some(b) = self.bodies.get_mut(id.index()) {
            if b.visible != visible {
                b.visible = visible;
                self.invalidate();
            }
        }
    }

    /// Visible bodies only.
    #[must_use]
    pub fn visible_bodies(&self) -> Vec<&Body> {
        self.bodies.iter().filter(|b| b.visible).collect()
    }

    /// All world positions of visible bodies (for camera fitting).
    #[must_use]
    pub fn all_positions(&self) -> Vec<Vec3> {
        self.bodies
            .iter()
            .filter(|b| b.visible)
            .map(Body::world_position)
            .collect()
    }

    // -- Mutation used by the animator --

    /// Advance every non-root body's phase by `scale` times its angular
    /// speed and refresh all transforms in the same pass. Exactly one
    /// update per body per call; the tree shape never changes.
    pub(crate) fn step_phases(&mut self, scale: f32) {
        for idx in 0..self.bodies.len() {
            let Some(parent) = self.bodies[idx].parent else {
                continue;
            };
            let parent_world = self.bodies[parent.index()].world_position;
            let body = &mut self.bodies[idx];
            body.phase += body.angular_speed * scale;
            let local = body.orbit_offset();
            body.local_position = local;
            body.world_position = parent_world + local;
        }
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_full_arena_from_solar_system() {
        let scene = Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        assert_eq!(scene.body_count(), 8);

        let root = scene.body(scene.root()).unwrap();
        assert_eq!(root.name, "Sun");
        assert!(root.is_root());
        assert_eq!(root.orbit_distance, 0.0);
        assert_eq!(root.world_position(), Vec3::ZERO);
        // Four planets hang off the root
        assert_eq!(root.children().len(), 4);
    }

    #[test]
    fn parent_links_match_child_lists() {
        let scene = Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        for (idx, body) in scene.bodies().iter().enumerate() {
            for &child in body.children() {
                let child_body = scene.body(child).unwrap();
                assert_eq!(child_body.parent().map(BodyId::index), Some(idx));
                // Arena ordering: parents precede children
                assert!(child.index() > idx);
            }
        }
    }

    #[test]
    fn name_lookup_resolves_moons() {
        let scene = Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        let moon = scene.body_by_name("Moon").unwrap();
        let body = scene.body(moon).unwrap();
        assert_eq!(body.role, BodyRole::Moon);

        let earth = body.parent().unwrap();
        assert_eq!(scene.body(earth).unwrap().name, "Earth");
        assert!(scene.body_by_name("Pluto").is_none());
    }

    #[test]
    fn initial_transforms_respect_orbit_distance() {
        let scene = Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        let earth = scene.body_by_name("Earth").unwrap();
        // Phase 0 puts bodies on the parent's +Z axis
        assert_eq!(
            scene.body(earth).unwrap().world_position(),
            Vec3::new(0.0, 0.0, 20.0)
        );

        let moon = scene.body_by_name("Moon").unwrap();
        assert_eq!(
            scene.body(moon).unwrap().world_position(),
            Vec3::new(0.0, 0.0, 23.0)
        );
    }

    #[test]
    fn invalid_spec_is_rejected_at_build() {
        let mut spec = SystemSpec::solar_system();
        spec.planets[0].radius = 0.0;
        assert!(Scene::from_spec(&spec).is_err());
    }

    #[test]
    fn star_only_system_builds() {
        let spec = SystemSpec {
            star: StarSpec::default(),
            planets: vec![],
        };
        let scene = Scene::from_spec(&spec).unwrap();
        assert_eq!(scene.body_count(), 1);
        assert!(scene.body(scene.root()).unwrap().children().is_empty());
    }

    #[test]
    fn dirty_tracking_follows_mutation() {
        let mut scene =
            Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        scene.mark_rendered();
        assert!(!scene.is_dirty());

        let earth = scene.body_by_name("Earth").unwrap();
        scene.set_visible(earth, false);
        assert!(scene.is_dirty());
        scene.mark_rendered();

        // Toggling to the current value is not a mutation
        scene.set_visible(earth, false);
        assert!(!scene.is_dirty());

        scene.force_dirty();
        assert!(scene.is_dirty());
    }

    #[test]
    fn hidden_bodies_excluded_from_positions() {
        let mut scene =
            Scene::from_spec(&SystemSpec::solar_system()).unwrap();
        assert_eq!(scene.all_positions().len(), 8);

        let mercury = scene.body_by_name("Mercury").unwrap();
        scene.set_visible(mercury, false);
        assert_eq!(scene.all_positions().len(), 7);
        assert_eq!(scene.visible_bodies().len(), 7);
    }
}
