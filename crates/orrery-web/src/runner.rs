use orrery_core::{
    CatalogError, ChatMessage, Explorer, ExplorerConfig, InputEvent, InputQueue,
    PendingQuestion, QuestionService, RequestId, SubmitError,
};
use thiserror::Error;

/// Owns the explorer and its input queue between animation frames.
///
/// The exported functions in `lib.rs` keep one `ExplorerRunner` in
/// `thread_local!` storage, because wasm-bindgen cannot export it directly.
pub struct ExplorerRunner {
    explorer: Explorer,
    input: InputQueue,
}

/// Why the runner could not start.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl ExplorerRunner {
    /// Parse `config_json` and load the bundled catalog.
    /// `fallback_seed` is used when the config does not pin a starfield seed.
    pub fn new(config_json: &str, width: f32, height: f32, fallback_seed: u64) -> Result<Self, InitError> {
        let mut config = ExplorerConfig::from_json(config_json)?;
        if config.star_seed.is_none() {
            config.star_seed = Some(fallback_seed);
        }
        let explorer = Explorer::with_solar_system(config, width, height)?;
        Ok(Self {
            explorer,
            input: InputQueue::new(),
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, advance time, rebuild buffers.
    pub fn tick(&mut self, dt: f32) {
        self.explorer.update(dt, &mut self.input);
    }

    /// Leave the welcome gate immediately, without waiting for a tick.
    pub fn launch(&mut self) {
        self.explorer.launch();
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.explorer.bodies().instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.explorer.bodies().instance_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn orbit_vertices_ptr(&self) -> *const f32 {
        self.explorer.orbits().buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn orbit_vertex_count(&self) -> u32 {
        self.explorer.orbits().vertex_count() as u32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.explorer.starfield().as_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.explorer.starfield().len() as u32
    }

    /// Catalog position of the focused body, or -1.
    pub fn selected_index(&self) -> i32 {
        self.explorer
            .navigation()
            .selected_index()
            .map_or(-1, |i| i as i32)
    }

    // ---- JSON views ----

    /// Overlay data for the focused body, or `null`.
    pub fn detail_json(&self) -> String {
        serde_json::to_string(&self.explorer.detail()).unwrap_or_else(|e| {
            log::error!("detail: {e}");
            "null".to_string()
        })
    }

    pub fn chat_json(&self) -> String {
        let history: &[ChatMessage] = self.explorer.chat().history();
        serde_json::to_string(history).unwrap_or_else(|e| {
            log::error!("chat: {e}");
            "[]".to_string()
        })
    }

    pub fn chat_loading(&self) -> bool {
        self.explorer.chat().is_loading()
    }

    // ---- Question flow, split so no borrow is held across an await ----

    pub fn submit_question(&mut self, question: &str) -> Result<(PendingQuestion, QuestionService), SubmitError> {
        let pending = self.explorer.submit_question(question)?;
        Ok((pending, self.explorer.service().clone()))
    }

    pub fn resolve_answer(&mut self, id: RequestId, answer: String) -> bool {
        self.explorer.resolve_answer(id, answer)
    }
}
