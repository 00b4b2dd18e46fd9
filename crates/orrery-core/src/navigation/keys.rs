//! Keyboard mapping for body navigation.

use super::controller::NavigationController;

/// DOM `keyCode` values the explorer reacts to.
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// A navigation intent derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    Dismiss,
}

impl NavKey {
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_RIGHT | KEY_UP => Some(NavKey::Next),
            KEY_LEFT | KEY_DOWN => Some(NavKey::Previous),
            KEY_ESCAPE => Some(NavKey::Dismiss),
            _ => None,
        }
    }

    /// Map a `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" | "ArrowUp" => Some(NavKey::Next),
            "ArrowLeft" | "ArrowDown" => Some(NavKey::Previous),
            "Escape" => Some(NavKey::Dismiss),
            _ => None,
        }
    }

    /// Canonical DOM `keyCode` for this intent.
    pub fn key_code(self) -> u32 {
        match self {
            NavKey::Next => KEY_RIGHT,
            NavKey::Previous => KEY_LEFT,
            NavKey::Dismiss => KEY_ESCAPE,
        }
    }

    pub fn apply(self, nav: &mut NavigationController) {
        match self {
            NavKey::Next => nav.next(),
            NavKey::Previous => nav.previous(),
            NavKey::Dismiss => nav.clear(),
        }
    }
}
