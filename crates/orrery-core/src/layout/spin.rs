//! Decorative self-rotation periods.
//!
//! A fixed lookup table, unrelated to any physical attribute. The period is
//! signed: a negative value means the renderer spins the body backwards.

use std::f32::consts::TAU;

use crate::catalog::BodyId;

/// Period for any body missing from the table.
pub const DEFAULT_SPIN_SECS: f32 = 40.0;

const SPIN_TABLE: [(&str, f32); 9] = [
    ("sun", 60.0),
    ("mercury", 58.0),
    ("venus", -90.0), // retrograde
    ("earth", 24.0),
    ("mars", 25.0),
    ("jupiter", 10.0),
    ("saturn", 11.0),
    ("uranus", 17.0),
    ("neptune", 16.0),
];

/// Signed spin duration in seconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPeriod(f32);

impl SpinPeriod {
    pub fn from_secs(secs: f32) -> Self {
        debug_assert!(secs != 0.0);
        Self(secs)
    }

    /// Signed seconds; negative means reversed.
    pub fn secs(self) -> f32 {
        self.0
    }

    pub fn is_reversed(self) -> bool {
        self.0 < 0.0
    }

    /// Unsigned duration of one turn.
    pub fn duration_secs(self) -> f32 {
        self.0.abs()
    }

    /// Rotation angle in radians at `t` seconds, wrapped to one turn.
    /// Negative for reversed bodies.
    pub fn angle_at(self, t: f64) -> f32 {
        let turns = (t / self.0 as f64).fract();
        turns as f32 * TAU
    }
}

/// Look up the decorative spin period of `id`.
pub fn self_rotation_period(id: &BodyId) -> SpinPeriod {
    SPIN_TABLE
        .iter()
        .find(|(key, _)| *key == id.as_str())
        .map(|(_, secs)| SpinPeriod::from_secs(*secs))
        .unwrap_or(SpinPeriod::from_secs(DEFAULT_SPIN_SECS))
}
