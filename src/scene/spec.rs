//! The body table: serializable system specs with fail-fast validation.
//!
//! A [`SystemSpec`] is the static configuration a [`Scene`](super::Scene)
//! is built from — one star, its planets, their moons. Specs serialize
//! to/from TOML so whole systems can be stored next to view presets.

use std::collections::HashSet;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::body::Appearance;
use crate::error::OrreryError;

// ---------------------------------------------------------------------------
// Spec types
// ---------------------------------------------------------------------------

/// The root star. Fixed at the global origin with zero orbit distance
/// and zero speed; only its name, size, and appearance are configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct StarSpec {
    /// Identifier, unique across the system.
    pub name: String,
    /// Visual scale factor, positive.
    pub radius: f32,
    /// Opaque material reference for the renderer.
    pub appearance: Appearance,
}

impl Default for StarSpec {
    fn default() -> Self {
        Self {
            name: "Sun".into(),
            radius: 5.0,
            appearance: Appearance {
                color: [1.0, 0.97, 0.0],
                texture: Some("textures/2k_sun.jpg".into()),
            },
        }
    }
}

/// A moon orbiting its planet.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct MoonSpec {
    /// Identifier, unique across the system.
    pub name: String,
    /// Visual scale factor, positive.
    pub radius: f32,
    /// Distance from the planet's origin, non-negative.
    pub orbit_distance: f32,
    /// Radians per tick; sign picks the direction.
    pub angular_speed: f32,
    /// Opaque material reference for the renderer.
    pub appearance: Appearance,
}

/// A planet orbiting the star, with any number of moons.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct PlanetSpec {
    /// Identifier, unique across the system.
    pub name: String,
    /// Visual scale factor, positive.
    pub radius: f32,
    /// Distance from the star's origin, non-negative.
    pub orbit_distance: f32,
    /// Radians per tick; sign picks the direction.
    pub angular_speed: f32,
    /// Opaque material reference for the renderer.
    pub appearance: Appearance,
    /// Moons in table order.
    pub moons: Vec<MoonSpec>,
}

/// A whole system: one star plus an ordered planet table.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct SystemSpec {
    /// The root star.
    pub star: StarSpec,
    /// Planets in table order.
    pub planets: Vec<PlanetSpec>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check one body's scalar parameters.
fn validate_scalars(
    name: &str,
    radius: f32,
    orbit_distance: f32,
    angular_speed: f32,
) -> Result<(), OrreryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(OrreryError::InvalidSpec(format!(
            "body '{name}': radius must be positive and finite, got {radius}"
        )));
    }
    if !(orbit_distance.is_finite() && orbit_distance >= 0.0) {
        return Err(OrreryError::InvalidSpec(format!(
            "body '{name}': orbit distance must be non-negative and finite, \
             got {orbit_distance}"
        )));
    }
    if !angular_speed.is_finite() {
        return Err(OrreryError::InvalidSpec(format!(
            "body '{name}': angular speed must be finite, got {angular_speed}"
        )));
    }
    Ok(())
}

/// Track a name, rejecting duplicates and empties.
fn claim_name<'a>(
    seen: &mut HashSet<&'a str>,
    name: &'a str,
) -> Result<(), OrreryError> {
    if name.is_empty() {
        return Err(OrreryError::InvalidSpec(
            "body names must be non-empty".into(),
        ));
    }
    if !seen.insert(name) {
        return Err(OrreryError::InvalidSpec(format!(
            "duplicate body name '{name}'"
        )));
    }
    Ok(())
}

impl SystemSpec {
    /// Fail-fast validation: positive radii, non-negative orbit
    /// distances, finite scalars, globally unique non-empty names.
    pub fn validate(&self) -> Result<(), OrreryError> {
        let mut seen = HashSet::new();

        claim_name(&mut seen, &self.star.name)?;
        validate_scalars(&self.star.name, self.star.radius, 0.0, 0.0)?;

        for planet in &self.planets {
            claim_name(&mut seen, &planet.name)?;
            validate_scalars(
                &planet.name,
                planet.radius,
                planet.orbit_distance,
                planet.angular_speed,
            )?;
            for moon in &planet.moons {
                claim_name(&mut seen, &moon.name)?;
                validate_scalars(
                    &moon.name,
                    moon.radius,
                    moon.orbit_distance,
                    moon.angular_speed,
                )?;
            }
        }
        Ok(())
    }

    /// Total body count including the star.
    #[must_use]
    pub fn body_count(&self) -> usize {
        1 + self
            .planets
            .iter()
            .map(|p| 1 + p.moons.len())
            .sum::<usize>()
    }

    /// Load a spec from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Save a spec to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// The built-in demo system: the inner planets with a handful of
    /// moons. Distances and speeds are tuned for a readable animation,
    /// not astronomical accuracy.
    #[must_use]
    pub fn solar_system() -> Self {
        let moon = |name: &str,
                    radius: f32,
                    orbit_distance: f32,
                    angular_speed: f32,
                    texture: &str| MoonSpec {
            name: name.into(),
            radius,
            orbit_distance,
            angular_speed,
            appearance: Appearance {
                color: [0.6, 0.6, 0.6],
                texture: Some(texture.into()),
            },
        };

        Self {
            star: StarSpec::default(),
            planets: vec![
                PlanetSpec {
                    name: "Mercury".into(),
                    radius: 0.4,
                    orbit_distance: 10.0,
                    angular_speed: 0.01,
                    appearance: Appearance {
                        color: [0.66, 0.66, 0.66],
                        texture: Some("textures/2k_mercury.jpg".into()),
                    },
                    moons: vec![],
                },
                PlanetSpec {
                    name: "Venus".into(),
                    radius: 0.8,
                    orbit_distance: 15.0,
                    angular_speed: 0.007,
                    appearance: Appearance {
                        color: [0.9, 0.75, 0.5],
                        texture: Some("textures/2k_venus_surface.jpg".into()),
                    },
                    moons: vec![],
                },
                PlanetSpec {
                    name: "Earth".into(),
                    radius: 1.0,
                    orbit_distance: 20.0,
                    angular_speed: 0.005,
                    appearance: Appearance {
                        color: [0.2, 0.4, 1.0],
                        texture: Some("textures/2k_earth_daymap.jpg".into()),
                    },
                    moons: vec![moon(
                        "Moon",
                        0.3,
                        3.0,
                        0.015,
                        "textures/2k_moon.jpg",
                    )],
                },
                PlanetSpec {
                    name: "Mars".into(),
                    radius: 0.7,
                    orbit_distance: 25.0,
                    angular_speed: 0.003,
                    appearance: Appearance {
                        color: [0.8, 0.35, 0.2],
                        texture: Some("textures/2k_mars.jpg".into()),
                    },
                    moons: vec![
                        moon("Phobos", 0.1, 2.0, 0.02, "textures/2k_moon.jpg"),
                        moon("Deimos", 0.2, 3.0, 0.015, "textures/2k_moon.jpg"),
                    ],
                },
            ],
        }
    }
}
