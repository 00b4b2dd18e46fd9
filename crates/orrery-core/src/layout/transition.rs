// layout/transition.rs
//
// Eased blend between two projections. The layout functions stay pure;
// this only interpolates between their results while a mode switch settles.

use super::projection::ProjectionMode;

/// Easing curve for the blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow end.
    CubicOut,
    /// Very strong slow end. Closest to the page's `cubic-bezier(0.22, 1, 0.36, 1)`.
    #[default]
    QuintOut,
}

impl Easing {
    /// Apply to a normalized time `t` in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuintOut => 1.0 - (1.0 - t).powi(5),
        }
    }

    /// Normalized time at which the curve reaches `p` in [0, 1].
    pub fn invert(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::CubicOut => 1.0 - (1.0 - p).powf(1.0 / 3.0),
            Easing::QuintOut => 1.0 - (1.0 - p).powf(1.0 / 5.0),
        }
    }
}

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Tracks an in-progress switch from one projection to another.
#[derive(Debug, Clone)]
pub struct ProjectionTransition {
    from: ProjectionMode,
    to: ProjectionMode,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl ProjectionTransition {
    /// A settled transition resting on `mode`.
    pub fn settled(mode: ProjectionMode, duration: f32) -> Self {
        Self {
            from: mode,
            to: mode,
            elapsed: duration,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start moving toward `target`. Reversing mid-flight continues from the
    /// current blend instead of jumping to the abandoned target.
    pub fn retarget(&mut self, target: ProjectionMode) {
        if target == self.to {
            return;
        }
        if !self.is_settled() && target == self.from {
            let remaining = 1.0 - self.progress();
            self.from = self.to;
            self.to = target;
            self.elapsed = self.easing.invert(remaining) * self.duration;
            return;
        }
        self.from = self.to;
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn is_settled(&self) -> bool {
        self.from == self.to || self.elapsed >= self.duration
    }

    pub fn from(&self) -> ProjectionMode {
        self.from
    }

    pub fn target(&self) -> ProjectionMode {
        self.to
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.is_settled() || self.duration <= 0.0 {
            1.0
        } else {
            self.easing.apply(self.elapsed / self.duration)
        }
    }

    /// Blend a value computed under the source and target projections.
    pub fn blend(&self, from_value: f32, to_value: f32) -> f32 {
        lerp(from_value, to_value, self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for e in [Easing::Linear, Easing::CubicOut, Easing::QuintOut] {
            assert!((e.apply(0.0)).abs() < 1e-6, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
        }
    }

    #[test]
    fn ease_out_front_loads() {
        assert!(Easing::QuintOut.apply(0.3) > Easing::CubicOut.apply(0.3));
        assert!(Easing::CubicOut.apply(0.3) > Easing::Linear.apply(0.3));
    }

    #[test]
    fn settled_blend_returns_target() {
        let t = ProjectionTransition::settled(ProjectionMode::Schematic, 1.5);
        assert!(t.is_settled());
        assert_eq!(t.blend(10.0, 20.0), 20.0);
    }

    #[test]
    fn retarget_then_settle() {
        let mut t = ProjectionTransition::settled(ProjectionMode::Schematic, 1.0)
            .with_easing(Easing::Linear);
        t.retarget(ProjectionMode::TrueScale);
        assert!(!t.is_settled());
        assert_eq!(t.from(), ProjectionMode::Schematic);
        assert_eq!(t.blend(0.0, 100.0), 0.0);

        t.tick(0.5);
        assert!((t.blend(0.0, 100.0) - 50.0).abs() < 1e-4);

        t.tick(10.0);
        assert!(t.is_settled());
        assert_eq!(t.blend(0.0, 100.0), 100.0);
    }

    #[test]
    fn invert_undoes_apply() {
        for e in [Easing::Linear, Easing::CubicOut, Easing::QuintOut] {
            for t in [0.0, 0.1, 0.37, 0.8, 1.0] {
                assert!((e.invert(e.apply(t)) - t).abs() < 1e-3, "{e:?} at {t}");
            }
        }
    }

    #[test]
    fn reversal_mid_flight_is_continuous() {
        for easing in [Easing::Linear, Easing::QuintOut] {
            let mut t = ProjectionTransition::settled(ProjectionMode::Schematic, 1.5)
                .with_easing(easing);
            t.retarget(ProjectionMode::TrueScale);
            t.tick(0.3);
            // Schematic value 0, true-scale value 100.
            let before = t.blend(0.0, 100.0);

            t.retarget(ProjectionMode::Schematic);
            assert_eq!(t.from(), ProjectionMode::TrueScale);
            assert!(!t.is_settled());
            let after = t.blend(100.0, 0.0);
            assert!((before - after).abs() < 0.1, "{easing:?}: {before} -> {after}");

            t.tick(10.0);
            assert_eq!(t.blend(100.0, 0.0), 0.0);
        }
    }

    #[test]
    fn retarget_same_mode_is_noop() {
        let mut t = ProjectionTransition::settled(ProjectionMode::TrueScale, 1.0);
        t.retarget(ProjectionMode::TrueScale);
        assert!(t.is_settled());
    }
}
