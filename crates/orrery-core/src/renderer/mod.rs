pub mod body_instance;
pub mod color;
#[cfg(feature = "vectors")]
pub mod orbits;

pub use body_instance::{BodyBuffer, BodyInstance};
pub use color::Color;
#[cfg(feature = "vectors")]
pub use orbits::{OrbitRings, RingVertex};
