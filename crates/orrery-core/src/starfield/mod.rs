//! Decorative background stars. Generated once; nothing else reads them.

pub mod rng;

use bytemuck::{Pod, Zeroable};

pub use rng::Rng;

/// One background star, laid out as 5 floats for the host renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Star {
    /// Horizontal position as a fraction of viewport width.
    pub x_frac: f32,
    /// Vertical position as a fraction of viewport height.
    pub y_frac: f32,
    pub size_px: f32,
    pub opacity: f32,
    /// Twinkle animation offset.
    pub delay_secs: f32,
}

impl Star {
    pub const FLOATS: usize = 5;
}

pub const MIN_STAR_PX: f32 = 1.0;
pub const MAX_STAR_PX: f32 = 3.0;
pub const MAX_TWINKLE_DELAY_SECS: f32 = 5.0;

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..count)
            .map(|_| Star {
                x_frac: rng.next_f32(),
                y_frac: rng.next_f32(),
                size_px: rng.range(MIN_STAR_PX, MAX_STAR_PX),
                opacity: rng.next_f32(),
                delay_secs: rng.range(0.0, MAX_TWINKLE_DELAY_SECS),
            })
            .collect();
        log::debug!("starfield: {count} stars from seed {seed}");
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.stars.as_ptr() as *const f32
    }
}
