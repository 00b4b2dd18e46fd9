//! Ordered, validated catalog of celestial bodies.
//!
//! The catalog is built once at startup and never mutated. Every structural
//! problem (empty list, bad diameter, duplicate id, non-monotonic orbit index)
//! is rejected here so that layout and navigation can assume valid data.

pub mod body;

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::layout::STAR_DIAMETER_THRESHOLD_KM;
pub use body::{BodyId, CelestialBody, format_thousands, parse_diameter};

/// Bundled star + eight planets.
const SOLAR_SYSTEM_JSON: &str = include_str!("../../assets/solar_system.json");

/// Ordered sequence of bodies, star first.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<CelestialBody>,
}

impl Catalog {
    /// Validate and wrap an ordered list of bodies.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, CatalogError> {
        let first = bodies.first().ok_or(CatalogError::Empty)?;
        if first.orbit_index != 0 {
            return Err(CatalogError::StarNotFirst {
                id: first.id.to_string(),
                index: first.orbit_index,
            });
        }

        let mut seen = HashSet::with_capacity(bodies.len());
        let mut previous: Option<u32> = None;
        for body in &bodies {
            if !(body.diameter_km.is_finite() && body.diameter_km > 0.0) {
                return Err(CatalogError::NonPositiveDiameter {
                    id: body.id.to_string(),
                    value: body.diameter_km,
                });
            }
            if !(body.orbital_speed.is_finite() && body.orbital_speed > 0.0) {
                return Err(CatalogError::NonPositiveSpeed {
                    id: body.id.to_string(),
                    value: body.orbital_speed,
                });
            }
            let above = body.diameter_km > STAR_DIAMETER_THRESHOLD_KM;
            if body.is_star() && !above {
                return Err(CatalogError::StarTooSmall {
                    id: body.id.to_string(),
                    value: body.diameter_km,
                });
            }
            if !body.is_star() && above {
                return Err(CatalogError::PlanetTooLarge {
                    id: body.id.to_string(),
                    value: body.diameter_km,
                });
            }
            if !seen.insert(body.id.clone()) {
                return Err(CatalogError::DuplicateId(body.id.to_string()));
            }
            if let Some(prev) = previous {
                if body.orbit_index <= prev {
                    return Err(CatalogError::NonMonotonicOrbit {
                        id: body.id.to_string(),
                        index: body.orbit_index,
                        previous: prev,
                    });
                }
            }
            previous = Some(body.orbit_index);
        }

        log::debug!("catalog validated: {} bodies", bodies.len());
        Ok(Self { bodies })
    }

    /// Parse a JSON array of bodies and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let bodies: Vec<CelestialBody> = serde_json::from_str(json)?;
        Self::new(bodies)
    }

    /// The bundled solar system catalog.
    pub fn solar_system() -> Result<Self, CatalogError> {
        Self::from_json(SOLAR_SYSTEM_JSON)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The star (position 0).
    pub fn star(&self) -> &CelestialBody {
        &self.bodies[0]
    }

    pub fn get(&self, id: &BodyId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| &b.id == id)
    }

    /// Body at catalog position `index` (not orbit index).
    pub fn at(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    /// Catalog position of `id`.
    pub fn position(&self, id: &BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BodyId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Ids in traversal order.
    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.iter().map(|b| b.id.clone()).collect()
    }
}
