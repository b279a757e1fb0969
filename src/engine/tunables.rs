//! The parameter-panel contract: named per-body scalars.
//!
//! A panel reads the current set with [`OrreryEngine::tunables`], shows
//! a slider per entry, and writes changes back with
//! [`OrreryEngine::set_tunable`] between ticks. Writes are validated
//! with the same rules as spec construction, so external mutation can
//! never break a scene invariant.

use super::OrreryEngine;
use crate::error::OrreryError;
use crate::scene::{Body, BodyId, Scene};

/// Fields of a body a panel may read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunableField {
    /// Radians per tick.
    AngularSpeed,
    /// Visual scale factor.
    Radius,
    /// Distance from the parent's origin.
    OrbitDistance,
}

impl TunableField {
    const ALL: [Self; 3] =
        [Self::AngularSpeed, Self::Radius, Self::OrbitDistance];

    /// Stable name used by panel UIs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AngularSpeed => "angular_speed",
            Self::Radius => "radius",
            Self::OrbitDistance => "orbit_distance",
        }
    }
}

/// One exposed scalar: which body, which field, current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Tunable {
    /// Body name.
    pub body: String,
    /// Which field.
    pub field: TunableField,
    /// Current value.
    pub value: f32,
}

impl OrreryEngine {
    fn resolve(&self, body: &str) -> Result<BodyId, OrreryError> {
        self.scene.body_by_name(body).ok_or_else(|| {
            OrreryError::UnknownTunable(format!("no body named '{body}'"))
        })
    }

    /// List every exposed scalar with its current value, in body table
    /// order. The root star exposes only its radius.
    #[must_use]
    pub fn tunables(&self) -> Vec<Tunable> {
        let mut out = Vec::new();
        for body in self.scene.bodies() {
            for field in TunableField::ALL {
                if body.is_root() && field != TunableField::Radius {
                    continue;
                }
                out.push(Tunable {
                    body: body.name.clone(),
                    field,
                    value: read_field(body, field),
                });
            }
        }
        out
    }

    /// Read one scalar by body name.
    pub fn tunable(
        &self,
        body: &str,
        field: TunableField,
    ) -> Result<f32, OrreryError> {
        let id = self.resolve(body)?;
        self.scene
            .body(id)
            .map(|b| read_field(b, field))
            .ok_or_else(|| {
                OrreryError::UnknownTunable(format!("no body named '{body}'"))
            })
    }

    /// Write one scalar by body name, validated. Takes effect from the
    /// next tick; positions are refreshed immediately so the scene stays
    /// consistent even while paused.
    pub fn set_tunable(
        &mut self,
        body: &str,
        field: TunableField,
        value: f32,
    ) -> Result<(), OrreryError> {
        let id = self.resolve(body)?;
        validate_write(&self.scene, id, field, value)?;

        if let Some(b) = self.scene.body_mut(id) {
            match field {
                TunableField::AngularSpeed => b.angular_speed = value,
                TunableField::Radius => b.radius = value,
                TunableField::OrbitDistance => b.orbit_distance = value,
            }
            log::debug!("tunable {body}.{} = {value}", field.name());
        }
        self.scene.propagate_transforms();
        Ok(())
    }
}

fn read_field(body: &Body, field: TunableField) -> f32 {
    match field {
        TunableField::AngularSpeed => body.angular_speed,
        TunableField::Radius => body.radius,
        TunableField::OrbitDistance => body.orbit_distance,
    }
}

fn validate_write(
    scene: &Scene,
    id: BodyId,
    field: TunableField,
    value: f32,
) -> Result<(), OrreryError> {
    let Some(body) = scene.body(id) else {
        return Err(OrreryError::UnknownTunable("stale body handle".into()));
    };
    if !value.is_finite() {
        return Err(OrreryError::InvalidSpec(format!(
            "body '{}': {} must be finite, got {value}",
            body.name,
            field.name()
        )));
    }
    match field {
        TunableField::AngularSpeed => Ok(()),
        TunableField::Radius => {
            if value > 0.0 {
                Ok(())
            } else {
                Err(OrreryError::InvalidSpec(format!(
                    "body '{}': radius must be positive, got {value}",
                    body.name
                )))
            }
        }
        TunableField::OrbitDistance => {
            if body.is_root() {
                Err(OrreryError::InvalidSpec(
                    "the root star is fixed at the origin".into(),
                ))
            } else if value >= 0.0 {
                Ok(())
            } else {
                Err(OrreryError::InvalidSpec(format!(
                    "body '{}': orbit distance must be non-negative, \
                     got {value}",
                    body.name
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SystemSpec;

    fn engine() -> OrreryEngine {
        OrreryEngine::new(&SystemSpec::solar_system()).unwrap()
    }

    #[test]
    fn listing_covers_every_body() {
        let e = engine();
        let tunables = e.tunables();
        // Root exposes radius only; 7 orbiting bodies expose 3 fields
        assert_eq!(tunables.len(), 1 + 7 * 3);
        assert!(tunables
            .iter()
            .any(|t| t.body == "Earth" && t.field == TunableField::AngularSpeed));
    }

    #[test]
    fn read_matches_spec_table() {
        let e = engine();
        let speed = e.tunable("Earth", TunableField::AngularSpeed).unwrap();
        assert_eq!(speed, 0.005);
        let dist = e.tunable("Moon", TunableField::OrbitDistance).unwrap();
        assert_eq!(dist, 3.0);
    }

    #[test]
    fn write_changes_the_trajectory() {
        let mut e = engine();
        e.set_tunable("Earth", TunableField::AngularSpeed, 0.05)
            .unwrap();
        for _ in 0..10 {
            e.update(0.016);
        }
        let earth = e.scene.body_by_name("Earth").unwrap();
        assert!((e.scene.body(earth).unwrap().phase - 0.5).abs() < 1e-4);
    }

    #[test]
    fn orbit_distance_write_refreshes_positions() {
        let mut e = engine();
        e.set_tunable("Earth", TunableField::OrbitDistance, 40.0)
            .unwrap();
        let earth = e.scene.body_by_name("Earth").unwrap();
        let body = e.scene.body(earth).unwrap();
        assert!((body.world_position().length() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn invalid_writes_are_rejected() {
        let mut e = engine();
        assert!(e
            .set_tunable("Earth", TunableField::Radius, 0.0)
            .is_err());
        assert!(e
            .set_tunable("Earth", TunableField::OrbitDistance, -1.0)
            .is_err());
        assert!(e
            .set_tunable("Earth", TunableField::AngularSpeed, f32::NAN)
            .is_err());
        // Rejected writes leave the value untouched
        assert_eq!(
            e.tunable("Earth", TunableField::Radius).unwrap(),
            1.0
        );
    }

    #[test]
    fn root_orbit_distance_is_locked() {
        let mut e = engine();
        assert!(e
            .set_tunable("Sun", TunableField::OrbitDistance, 5.0)
            .is_err());
        // Radius is still tunable on the root
        e.set_tunable("Sun", TunableField::Radius, 6.0).unwrap();
    }

    #[test]
    fn unknown_body_is_an_error() {
        let mut e = engine();
        let err = e
            .set_tunable("Pluto", TunableField::Radius, 1.0)
            .unwrap_err();
        assert!(err.to_string().contains("Pluto"));
    }
}
