pub mod catalog;
pub mod chat;
pub mod config;
pub mod core;
pub mod detail;
pub mod error;
pub mod explorer;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod renderer;
pub mod starfield;

// Re-export key types at crate root for convenience
pub use catalog::{BodyId, Catalog, CelestialBody};
pub use chat::{
    ChatMessage, ChatSession, HttpTransport, PendingQuestion, QuestionService, RequestId, Role,
};
pub use config::ExplorerConfig;
pub use crate::core::time::AnimationClock;
pub use detail::{DetailView, SizeComparison};
pub use error::{AskError, CatalogError, SubmitError};
pub use explorer::Explorer;
pub use input::queue::{InputEvent, InputQueue, UiCommand};
pub use layout::{
    body_geometry, display_size, orbit_radius, revolution_period, self_rotation_period,
    system_origin_offset, BodyGeometry, ProjectionMode, ProjectionTransition, SpinPeriod,
    ViewportClass,
};
pub use navigation::{NavKey, NavigationController, Selection};
pub use renderer::{BodyBuffer, BodyInstance, Color};
pub use starfield::{Star, Starfield};

#[cfg(feature = "vectors")]
pub use renderer::{OrbitRings, RingVertex};
