pub mod controller;
pub mod keys;

pub use controller::{NavigationController, Selection};
pub use keys::NavKey;
