//! Window-level keydown listener, removed when the guard drops.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{KeyboardEvent, Window};

use orrery_core::NavKey;

pub struct KeyboardListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyboardListener {
    /// Listen for navigation keys and hand their canonical codes to `on_key`.
    /// Other keys are left to the page.
    pub fn attach(mut on_key: impl FnMut(u32) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = NavKey::from_key_code(event.key_code())
                .or_else(|| NavKey::from_key_name(&event.key()));
            if let Some(key) = key {
                on_key(key.key_code());
            }
        });
        window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
        log::debug!("keyboard: listener attached");
        Ok(Self { window, callback })
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
        if removed.is_err() {
            log::warn!("keyboard: failed to remove listener");
        } else {
            log::debug!("keyboard: listener removed");
        }
    }
}
