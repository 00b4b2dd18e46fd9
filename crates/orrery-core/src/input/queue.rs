/// Custom event kinds sent by the UI layer.
pub mod kind {
    /// `a` = catalog position.
    pub const SELECT_INDEX: u32 = 1;
    /// `a` = catalog position, or negative to clear hover.
    pub const HOVER: u32 = 2;
    pub const TOGGLE_PROJECTION: u32 = 3;
    pub const TOGGLE_ANIMATION: u32 = 4;
    pub const DISMISS: u32 = 5;
    pub const LAUNCH: u32 = 6;
    pub const NEXT: u32 = 7;
    pub const PREVIOUS: u32 = 8;
    /// `a` = width, `b` = height.
    pub const RESIZE: u32 = 99;
}

/// Input events the explorer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at viewport coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/cursor moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A custom event from the UI layer (overlay buttons, thumbnails, etc.).
    /// `kind` is one of [`kind`]; `a` and `b` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32 },
}

/// Decoded form of a `Custom` event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCommand {
    SelectIndex(usize),
    Hover(Option<usize>),
    ToggleProjection,
    ToggleAnimation,
    Dismiss,
    Launch,
    Next,
    Previous,
    Resize { width: f32, height: f32 },
}

impl UiCommand {
    /// None for unknown kinds or malformed payloads.
    pub fn decode(kind: u32, a: f32, b: f32) -> Option<Self> {
        let index = || (a.is_finite() && a >= 0.0).then_some(a as usize);
        match kind {
            kind::SELECT_INDEX => index().map(UiCommand::SelectIndex),
            kind::HOVER => Some(UiCommand::Hover(index())),
            kind::TOGGLE_PROJECTION => Some(UiCommand::ToggleProjection),
            kind::TOGGLE_ANIMATION => Some(UiCommand::ToggleAnimation),
            kind::DISMISS => Some(UiCommand::Dismiss),
            kind::LAUNCH => Some(UiCommand::Launch),
            kind::NEXT => Some(UiCommand::Next),
            kind::PREVIOUS => Some(UiCommand::Previous),
            kind::RESIZE if a > 0.0 && b > 0.0 => Some(UiCommand::Resize { width: a, height: b }),
            _ => None,
        }
    }
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains it once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
