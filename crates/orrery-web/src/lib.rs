pub mod fetch;
pub mod keyboard;
pub mod runner;

pub use fetch::FetchTransport;
pub use keyboard::KeyboardListener;
pub use runner::{ExplorerRunner, InitError};

use std::cell::RefCell;

use orrery_core::{InputEvent, ProjectionMode};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ExplorerRunner>> = const { RefCell::new(None) };
    static KEYBOARD: RefCell<Option<KeyboardListener>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut ExplorerRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Explorer not initialized. Call orrery_init() first.");
        f(runner)
    })
}

/// Like `with_runner`, but tolerates a missing runner (shutdown raced a callback).
fn try_with_runner<R>(f: impl FnOnce(&mut ExplorerRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn random_seed() -> u64 {
    // One double has 53 random bits at most; two draws fill 64.
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen]
pub fn orrery_init(config_json: &str, width: f32, height: f32) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = ExplorerRunner::new(config_json, width, height, random_seed()).map_err(|e| {
        log::error!("orrery: {e}");
        JsValue::from_str(&e.to_string())
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn orrery_custom_event(kind: u32, a: f32, b: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b }));
}

#[wasm_bindgen]
pub fn orrery_launch() {
    with_runner(|r| r.launch());
}

/// Route window keydown events into the explorer until detached.
#[wasm_bindgen]
pub fn orrery_attach_keyboard() -> Result<(), JsValue> {
    let listener = KeyboardListener::attach(|key_code| {
        let _ = try_with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
    })?;
    KEYBOARD.with(|cell| {
        // Replacing an existing guard drops it, which removes the old listener.
        *cell.borrow_mut() = Some(listener);
    });
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_detach_keyboard() {
    KEYBOARD.with(|cell| cell.borrow_mut().take());
}

/// Detach listeners and drop all explorer state.
#[wasm_bindgen]
pub fn orrery_shutdown() {
    orrery_detach_keyboard();
    RUNNER.with(|cell| cell.borrow_mut().take());
    log::info!("orrery: shut down");
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_bodies_ptr() -> *const f32 {
    with_runner(|r| r.bodies_ptr())
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.body_count())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_orbit_vertices_ptr() -> *const f32 {
    with_runner(|r| r.orbit_vertices_ptr())
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_orbit_vertex_count() -> u32 {
    with_runner(|r| r.orbit_vertex_count())
}

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner(|r| r.stars_ptr())
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.star_count())
}

#[wasm_bindgen]
pub fn get_selected_index() -> i32 {
    with_runner(|r| r.selected_index())
}

/// 0 = schematic, 1 = true scale.
#[wasm_bindgen]
pub fn get_projection_mode() -> u32 {
    with_runner(|r| match r.explorer().mode() {
        ProjectionMode::Schematic => 0,
        ProjectionMode::TrueScale => 1,
    })
}

#[wasm_bindgen]
pub fn is_animating() -> bool {
    with_runner(|r| r.explorer().is_animating())
}

#[wasm_bindgen]
pub fn is_launched() -> bool {
    with_runner(|r| r.explorer().is_launched())
}

// ---- Overlay and chat ----

#[wasm_bindgen]
pub fn get_detail_json() -> String {
    with_runner(|r| r.detail_json())
}

#[wasm_bindgen]
pub fn get_chat_json() -> String {
    with_runner(|r| r.chat_json())
}

#[wasm_bindgen]
pub fn is_chat_loading() -> bool {
    with_runner(|r| r.chat_loading())
}

/// Ask about the focused body. Resolves to the appended answer text (which
/// may be a fallback message); rejects if the question was not accepted.
#[wasm_bindgen]
pub async fn orrery_ask_question(question: String) -> Result<JsValue, JsValue> {
    let (pending, service) = with_runner(|r| r.submit_question(&question))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let answer = service
        .ask(&FetchTransport, &pending.body_name, &pending.question)
        .await;

    if try_with_runner(|r| r.resolve_answer(pending.id, answer.clone())).is_none() {
        log::warn!("orrery: answer arrived after shutdown");
    }
    Ok(JsValue::from_str(&answer))
}
