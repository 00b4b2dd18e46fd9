//! Layout Engine: stateless projection of catalog bodies into screen geometry.

pub mod projection;
pub mod spin;
pub mod transition;

pub use projection::{
    ProjectionMode, ViewportClass,
    display_size, orbit_radius, revolution_period, system_origin_offset,
    REFERENCE_DIAMETER_KM, STAR_DIAMETER_THRESHOLD_KM,
};
pub use spin::{SpinPeriod, self_rotation_period, DEFAULT_SPIN_SECS};
pub use transition::{Easing, ProjectionTransition, lerp};

use crate::catalog::CelestialBody;

/// Everything the renderer needs to place one body under one projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyGeometry {
    pub size_px: f32,
    pub orbit_radius_px: f32,
    pub period_secs: f32,
    pub spin: SpinPeriod,
}

impl BodyGeometry {
    /// Revolution angle in radians at `t` seconds. Zero for the star.
    pub fn orbit_angle_at(&self, t: f64, is_star: bool) -> f32 {
        if is_star {
            return 0.0;
        }
        let turns = (t / self.period_secs as f64).fract();
        turns as f32 * std::f32::consts::TAU
    }
}

/// Geometry of `body` under `mode` and `viewport`.
pub fn body_geometry(body: &CelestialBody, mode: ProjectionMode, viewport: ViewportClass) -> BodyGeometry {
    BodyGeometry {
        size_px: display_size(body.diameter_km, mode, viewport),
        orbit_radius_px: orbit_radius(body.orbit_index, mode, viewport),
        period_secs: revolution_period(body.orbital_speed, mode),
        spin: self_rotation_period(&body.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn geometry_is_deterministic() {
        let catalog = Catalog::solar_system().unwrap();
        let earth = catalog.at(3).unwrap();
        let a = body_geometry(earth, ProjectionMode::Schematic, ViewportClass::Regular);
        let b = body_geometry(earth, ProjectionMode::Schematic, ViewportClass::Regular);
        assert_eq!(a, b);
        assert_eq!(a.orbit_radius_px, 140.0 + 3.0 * 90.0);
        assert_eq!(a.period_secs, 80.0 / 2.5);
    }

    #[test]
    fn star_does_not_revolve() {
        let catalog = Catalog::solar_system().unwrap();
        let geo = body_geometry(catalog.star(), ProjectionMode::Schematic, ViewportClass::Regular);
        assert_eq!(geo.orbit_angle_at(123.0, true), 0.0);
    }

    #[test]
    fn orbit_angle_quarter_turn() {
        let geo = BodyGeometry {
            size_px: 10.0,
            orbit_radius_px: 100.0,
            period_secs: 40.0,
            spin: SpinPeriod::from_secs(DEFAULT_SPIN_SECS),
        };
        let angle = geo.orbit_angle_at(10.0, false);
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }
}
