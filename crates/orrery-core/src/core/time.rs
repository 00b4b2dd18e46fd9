/// Wall-clock driver for orbital and spin animation.
/// Only advances while running, so pausing freezes every body in place.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    /// Seconds of animated time elapsed.
    elapsed: f64,
    /// Whether frame deltas are being accumulated.
    running: bool,
    /// Largest frame delta accepted, in seconds.
    max_frame_dt: f32,
}

impl AnimationClock {
    /// Cap a single frame at a quarter second so a backgrounded tab does not
    /// make planets jump half an orbit on return.
    pub const DEFAULT_MAX_FRAME_DT: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            running: true,
            max_frame_dt: Self::DEFAULT_MAX_FRAME_DT,
        }
    }

    pub fn with_max_frame_dt(mut self, max_frame_dt: f32) -> Self {
        self.max_frame_dt = max_frame_dt.max(0.0);
        self
    }

    /// Add a frame delta. Returns the delta actually applied.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        if !self.running || !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0.0;
        }
        let dt = frame_dt.min(self.max_frame_dt);
        self.elapsed += dt as f64;
        dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            log::debug!("clock: {}", if running { "resumed" } else { "paused" });
        }
        self.running = running;
    }

    /// Flip running state; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
