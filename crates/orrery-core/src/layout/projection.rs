//! Scale projection: pure mapping from physical attributes to screen geometry.
//!
//! Neither mode is physically proportional. Schematic compresses size ratios
//! so every body stays legible; true-scale keeps body sizes linear in
//! diameter but still caps the star and spaces orbits on a fixed ladder,
//! because real orbital distances span orders of magnitude no viewport can hold.

use serde::{Deserialize, Serialize};

// ── Reference body ───────────────────────────────────────────────────

/// Earth's diameter, the unit of true-scale sizing.
pub const REFERENCE_DIAMETER_KM: f64 = 12_742.0;

/// Anything larger than this is drawn with the star footprint.
pub const STAR_DIAMETER_THRESHOLD_KM: f64 = 1_000_000.0;

// ── Schematic sizing ─────────────────────────────────────────────────

pub const SCHEMATIC_MIN_PX: f32 = 16.0;
pub const SCHEMATIC_MAX_PX: f32 = 60.0;
/// Pixels per sqrt(km). Jupiter lands just under the max.
const SCHEMATIC_SQRT_SCALE: f64 = 0.16;
const SCHEMATIC_STAR_COMPACT_PX: f32 = 90.0;
const SCHEMATIC_STAR_REGULAR_PX: f32 = 150.0;

// ── True-scale sizing ────────────────────────────────────────────────

/// Pixels per reference diameter.
pub const TRUE_SCALE_UNIT_PX: f32 = 5.0;
/// Floor so sub-pixel bodies stay clickable.
pub const TRUE_SCALE_MIN_PX: f32 = 3.0;
/// Star caps. The Sun is ~109x Earth (546 px uncapped): regular keeps the
/// true ratio, compact shows it at 70x.
const TRUE_SCALE_STAR_COMPACT_MAX_PX: f32 = 350.0;
const TRUE_SCALE_STAR_REGULAR_MAX_PX: f32 = 650.0;

// ── Orbit ladder (base, step) ────────────────────────────────────────

const SCHEMATIC_ORBIT_COMPACT: (f32, f32) = (80.0, 45.0);
const SCHEMATIC_ORBIT_REGULAR: (f32, f32) = (140.0, 90.0);
const TRUE_SCALE_ORBIT: (f32, f32) = (500.0, 180.0);

// ── Revolution ───────────────────────────────────────────────────────

/// Seconds per revolution at orbital speed 1.0.
const SCHEMATIC_REVOLUTION_K: f32 = 80.0;
const TRUE_SCALE_REVOLUTION_K: f32 = 160.0;

/// True-scale shifts the star left by this fraction of its size.
const TRUE_SCALE_ORIGIN_SHIFT: f32 = 0.75;

/// Display projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectionMode {
    /// Compressed sizes and distances for legibility.
    #[default]
    Schematic,
    /// Proportional sizes, bounded by the viewport.
    TrueScale,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Schematic => ProjectionMode::TrueScale,
            ProjectionMode::TrueScale => ProjectionMode::Schematic,
        }
    }
}

/// Coarse responsive hint, computed once per layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewportClass {
    Compact,
    #[default]
    Regular,
}

impl ViewportClass {
    /// Widths strictly below `breakpoint_px` are compact.
    pub fn from_width(width_px: f32, breakpoint_px: f32) -> Self {
        if width_px < breakpoint_px {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }
}

/// On-screen diameter in pixels for a body of `diameter_km`.
///
/// Catalog validation guarantees `diameter_km > 0`.
pub fn display_size(diameter_km: f64, mode: ProjectionMode, viewport: ViewportClass) -> f32 {
    debug_assert!(diameter_km > 0.0, "diameter must be validated at load time");
    let is_star = diameter_km > STAR_DIAMETER_THRESHOLD_KM;

    match mode {
        ProjectionMode::Schematic => {
            if is_star {
                return match viewport {
                    ViewportClass::Compact => SCHEMATIC_STAR_COMPACT_PX,
                    ViewportClass::Regular => SCHEMATIC_STAR_REGULAR_PX,
                };
            }
            let size = (diameter_km.sqrt() * SCHEMATIC_SQRT_SCALE) as f32;
            size.clamp(SCHEMATIC_MIN_PX, SCHEMATIC_MAX_PX)
        }
        ProjectionMode::TrueScale => {
            let ratio = (diameter_km / REFERENCE_DIAMETER_KM) as f32;
            let size = (ratio * TRUE_SCALE_UNIT_PX).max(TRUE_SCALE_MIN_PX);
            if is_star {
                let cap = match viewport {
                    ViewportClass::Compact => TRUE_SCALE_STAR_COMPACT_MAX_PX,
                    ViewportClass::Regular => TRUE_SCALE_STAR_REGULAR_MAX_PX,
                };
                size.min(cap)
            } else {
                size
            }
        }
    }
}

/// Orbit radius in pixels. Strictly increasing in `orbit_index` for both modes.
pub fn orbit_radius(orbit_index: u32, mode: ProjectionMode, viewport: ViewportClass) -> f32 {
    let (base, step) = match (mode, viewport) {
        (ProjectionMode::Schematic, ViewportClass::Compact) => SCHEMATIC_ORBIT_COMPACT,
        (ProjectionMode::Schematic, ViewportClass::Regular) => SCHEMATIC_ORBIT_REGULAR,
        (ProjectionMode::TrueScale, _) => TRUE_SCALE_ORBIT,
    };
    base + orbit_index as f32 * step
}

/// Seconds per revolution: `K / orbital_speed`, K fixed per mode.
pub fn revolution_period(orbital_speed: f64, mode: ProjectionMode) -> f32 {
    debug_assert!(orbital_speed > 0.0, "orbital speed must be validated at load time");
    let k = match mode {
        ProjectionMode::Schematic => SCHEMATIC_REVOLUTION_K,
        ProjectionMode::TrueScale => TRUE_SCALE_REVOLUTION_K,
    };
    k / orbital_speed as f32
}

/// Horizontal shift of the star (and every orbit centre) in pixels.
pub fn system_origin_offset(mode: ProjectionMode, star_size_px: f32) -> f32 {
    match mode {
        ProjectionMode::Schematic => 0.0,
        ProjectionMode::TrueScale => -star_size_px * TRUE_SCALE_ORIGIN_SHIFT,
    }
}
