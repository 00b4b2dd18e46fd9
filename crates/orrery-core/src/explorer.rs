//! Explorer: owns every piece of view state and turns input into frames.

use glam::Vec2;

use crate::catalog::{BodyId, Catalog};
use crate::chat::{ChatSession, HttpTransport, PendingQuestion, QuestionService, RequestId};
use crate::config::ExplorerConfig;
use crate::core::AnimationClock;
use crate::detail::DetailView;
use crate::error::{CatalogError, SubmitError};
use crate::input::{InputEvent, InputQueue, UiCommand};
use crate::layout::{
    body_geometry, system_origin_offset, ProjectionMode, ProjectionTransition, ViewportClass,
};
use crate::navigation::{NavKey, NavigationController, Selection};
use crate::renderer::{BodyBuffer, BodyInstance, Color};
#[cfg(feature = "vectors")]
use crate::renderer::OrbitRings;
use crate::starfield::Starfield;

/// Extra pixels around each body that still count as a hit.
pub const HIT_SLACK_PX: f32 = 12.0;
/// Seed used when the host does not supply one.
pub const DEFAULT_STAR_SEED: u64 = 0x5EED_0F_5A7;

const HIGHLIGHT_SELECTED: f32 = 1.0;
const HIGHLIGHT_HOVERED: f32 = 0.5;

pub struct Explorer {
    catalog: Catalog,
    nav: NavigationController,
    config: ExplorerConfig,
    viewport: Vec2,
    viewport_class: ViewportClass,
    transition: ProjectionTransition,
    clock: AnimationClock,
    launched: bool,
    hovered: Option<BodyId>,
    chat: ChatSession,
    /// Body the chat history belongs to.
    chat_body: Option<BodyId>,
    service: QuestionService,
    starfield: Starfield,
    bodies: BodyBuffer,
    #[cfg(feature = "vectors")]
    orbits: OrbitRings,
}

impl Explorer {
    pub fn new(catalog: Catalog, config: ExplorerConfig, width: f32, height: f32) -> Self {
        let nav = NavigationController::new(&catalog);
        let starfield = Starfield::generate(
            config.star_count,
            config.star_seed.unwrap_or(DEFAULT_STAR_SEED),
        );
        let mut explorer = Self {
            nav,
            viewport: Vec2::new(width, height),
            viewport_class: ViewportClass::from_width(width, config.compact_breakpoint_px),
            transition: ProjectionTransition::settled(config.initial_mode, config.transition_secs),
            clock: AnimationClock::new(),
            launched: !config.show_welcome,
            hovered: None,
            chat: ChatSession::new(),
            chat_body: None,
            service: QuestionService::from_config(&config),
            starfield,
            bodies: BodyBuffer::with_capacity(catalog.len()),
            #[cfg(feature = "vectors")]
            orbits: OrbitRings::new(),
            catalog,
            config,
        };
        explorer.build_frame();
        log::info!(
            "explorer: {} bodies, {}x{} ({:?})",
            explorer.catalog.len(),
            width,
            height,
            explorer.viewport_class
        );
        explorer
    }

    /// Explorer over the bundled solar system.
    pub fn with_solar_system(config: ExplorerConfig, width: f32, height: f32) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::solar_system()?, config, width, height))
    }

    // -- Accessors --

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn selection(&self) -> &Selection {
        self.nav.selection()
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Projection the view is showing or moving toward.
    pub fn mode(&self) -> ProjectionMode {
        self.transition.target()
    }

    pub fn transition(&self) -> &ProjectionTransition {
        &self.transition
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_running()
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn hovered(&self) -> Option<&BodyId> {
        self.hovered.as_ref()
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn service(&self) -> &QuestionService {
        &self.service
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn bodies(&self) -> &BodyBuffer {
        &self.bodies
    }

    #[cfg(feature = "vectors")]
    pub fn orbits(&self) -> &OrbitRings {
        &self.orbits
    }

    pub fn detail(&self) -> Option<DetailView> {
        DetailView::for_selection(&self.catalog, &self.nav)
    }

    // -- Commands --

    /// Leave the welcome gate. Keyboard navigation is ignored until then.
    pub fn launch(&mut self) {
        if !self.launched {
            log::info!("explorer: launched");
        }
        self.launched = true;
    }

    pub fn toggle_projection(&mut self) {
        let target = self.transition.target().toggled();
        log::debug!("projection -> {target:?}");
        self.transition.retarget(target);
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.clock.toggle()
    }

    pub fn hover(&mut self, id: Option<BodyId>) {
        self.hovered = id.filter(|id| self.catalog.contains(id));
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        let class = ViewportClass::from_width(width, self.config.compact_breakpoint_px);
        if class != self.viewport_class {
            log::debug!("viewport class -> {class:?}");
        }
        self.viewport_class = class;
    }

    pub fn select(&mut self, id: &BodyId) -> bool {
        let changed = self.nav.select(id);
        self.sync_chat();
        changed
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        let changed = self.nav.select_index(index);
        self.sync_chat();
        changed
    }

    pub fn next(&mut self) {
        self.nav.next();
        self.sync_chat();
    }

    pub fn previous(&mut self) {
        self.nav.previous();
        self.sync_chat();
    }

    pub fn dismiss(&mut self) {
        self.nav.dismiss_overlay();
        self.sync_chat();
    }

    /// Select the body under the pointer. Misses leave the selection alone,
    /// and nothing is clickable behind the welcome gate.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        if !self.launched {
            return false;
        }
        match self.bodies.hit_test(x, y, HIT_SLACK_PX) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.launched {
            return;
        }
        self.hovered = self
            .bodies
            .hit_test(x, y, HIT_SLACK_PX)
            .and_then(|i| self.catalog.at(i))
            .map(|b| b.id.clone());
    }

    /// Returns true if the key was consumed.
    pub fn key_down(&mut self, key_code: u32) -> bool {
        let Some(key) = NavKey::from_key_code(key_code) else {
            return false;
        };
        if !self.launched {
            log::debug!("key {key_code} ignored behind welcome gate");
            return false;
        }
        key.apply(&mut self.nav);
        self.sync_chat();
        true
    }

    pub fn apply_command(&mut self, command: UiCommand) {
        match command {
            UiCommand::SelectIndex(i) => {
                self.select_index(i);
            }
            UiCommand::Hover(i) => {
                let id = i.and_then(|i| self.catalog.at(i)).map(|b| b.id.clone());
                self.hover(id);
            }
            UiCommand::ToggleProjection => self.toggle_projection(),
            UiCommand::ToggleAnimation => {
                self.toggle_animation();
            }
            UiCommand::Dismiss => self.dismiss(),
            UiCommand::Launch => self.launch(),
            UiCommand::Next => self.next(),
            UiCommand::Previous => self.previous(),
            UiCommand::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down(x, y);
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::KeyDown { key_code } => {
                self.key_down(key_code);
            }
            InputEvent::Custom { kind, a, b } => match UiCommand::decode(kind, a, b) {
                Some(command) => self.apply_command(command),
                None => log::warn!("unknown custom event kind={kind} a={a} b={b}"),
            },
        }
    }

    /// One frame: drain input, advance time, rebuild render buffers.
    pub fn update(&mut self, dt: f32, input: &mut InputQueue) {
        for event in input.drain() {
            self.handle(event);
        }
        self.clock.advance(dt);
        if dt.is_finite() && dt > 0.0 {
            self.transition.tick(dt);
        }
        self.build_frame();
    }

    // -- Chat --

    /// Accept a question about the focused body.
    pub fn submit_question(&mut self, question: &str) -> Result<PendingQuestion, SubmitError> {
        let body = self
            .nav
            .selected_id()
            .and_then(|id| self.catalog.get(id))
            .ok_or(SubmitError::NoSelection)?;
        self.chat.submit(&body.name, question)
    }

    pub fn resolve_answer(&mut self, id: RequestId, answer: String) -> bool {
        self.chat.resolve(id, answer)
    }

    /// Submit, wait for the service and append the answer.
    /// Returns the answer text (possibly a fallback message).
    pub async fn ask<T: HttpTransport>(&mut self, transport: &T, question: &str) -> Result<String, SubmitError> {
        let pending = self.submit_question(question)?;
        let answer = self
            .service
            .ask(transport, &pending.body_name, &pending.question)
            .await;
        self.resolve_answer(pending.id, answer.clone());
        Ok(answer)
    }

    fn sync_chat(&mut self) {
        let current = self.nav.selected_id();
        if current != self.chat_body.as_ref() {
            self.chat.reset();
            self.chat_body = current.cloned();
        }
    }

    // -- Frame --

    fn build_frame(&mut self) {
        let from = self.transition.from();
        let to = self.transition.target();
        let vp = self.viewport_class;
        let t = self.clock.elapsed();

        let star = self.catalog.star();
        let star_from = body_geometry(star, from, vp).size_px;
        let star_to = body_geometry(star, to, vp).size_px;
        let offset = self.transition.blend(
            system_origin_offset(from, star_from),
            system_origin_offset(to, star_to),
        );
        let origin = self.viewport * 0.5 + Vec2::new(offset, 0.0);

        let selected = self.nav.selected_id();
        self.bodies.clear();
        #[cfg(feature = "vectors")]
        self.orbits.clear();

        for body in self.catalog.iter() {
            let is_star = body.is_star();
            let a = body_geometry(body, from, vp);
            let b = body_geometry(body, to, vp);
            let size = self.transition.blend(a.size_px, b.size_px);
            let radius = self.transition.blend(a.orbit_radius_px, b.orbit_radius_px);
            let angle = blend_angle(
                a.orbit_angle_at(t, is_star),
                b.orbit_angle_at(t, is_star),
                self.transition.progress(),
            );

            let center = if is_star {
                origin
            } else {
                origin + Vec2::from_angle(angle) * radius
            };

            let is_selected = selected == Some(&body.id);
            let highlight = if is_selected {
                HIGHLIGHT_SELECTED
            } else if self.hovered.as_ref() == Some(&body.id) {
                HIGHLIGHT_HOVERED
            } else {
                0.0
            };

            let color = Color::from_hex_or_grey(&body.color);
            self.bodies.push(BodyInstance {
                x: center.x,
                y: center.y,
                radius: size * 0.5,
                spin: b.spin.angle_at(t),
                r: color.r,
                g: color.g,
                b: color.b,
                highlight,
            });

            #[cfg(feature = "vectors")]
            if !is_star {
                self.orbits.push_ring(origin, radius, is_selected);
            }
        }
    }
}

/// Interpolate between two angles along the shorter arc.
fn blend_angle(from: f32, to: f32, t: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let delta = (to - from + PI).rem_euclid(TAU) - PI;
    from + delta * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Role, FALLBACK_MISSING_KEY};
    use crate::error::AskError;
    use crate::input::queue::kind;
    use crate::navigation::keys::{KEY_ESCAPE, KEY_LEFT, KEY_RIGHT};
    use futures::executor::block_on;

    const W: f32 = 1280.0;
    const H: f32 = 800.0;

    fn launched() -> Explorer {
        let config = ExplorerConfig {
            show_welcome: false,
            star_seed: Some(1),
            ..Default::default()
        };
        Explorer::with_solar_system(config, W, H).unwrap()
    }

    fn selected(ex: &Explorer) -> Option<&str> {
        ex.selection().id().map(|id| id.as_str())
    }

    struct Canned(&'static str);

    impl HttpTransport for Canned {
        async fn post_json(&self, _url: &str, _headers: &[(&str, &str)], _body: String) -> Result<String, AskError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn builds_one_instance_per_body() {
        let ex = launched();
        assert_eq!(ex.bodies().instance_count(), 9);
        let sun = ex.bodies().instances()[0];
        assert_eq!((sun.x, sun.y), (W / 2.0, H / 2.0));
        assert_eq!(sun.radius, 75.0);
        assert_eq!(ex.starfield().len(), 200);
    }

    #[test]
    fn planets_sit_on_their_orbits() {
        let ex = launched();
        let earth = ex.bodies().instances()[3];
        let d = Vec2::new(earth.x - W / 2.0, earth.y - H / 2.0).length();
        assert!((d - (140.0 + 3.0 * 90.0)).abs() < 1e-3);
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn one_ring_per_planet() {
        let ex = launched();
        assert!(ex.orbits().vertex_count() > 0);
    }

    #[test]
    fn welcome_gate_blocks_keys() {
        let mut ex = Explorer::with_solar_system(ExplorerConfig::default(), W, H).unwrap();
        assert!(!ex.is_launched());
        assert!(!ex.key_down(KEY_RIGHT));
        assert_eq!(selected(&ex), None);

        ex.launch();
        assert!(ex.key_down(KEY_RIGHT));
        assert_eq!(selected(&ex), Some("sun"));
    }

    #[test]
    fn welcome_gate_blocks_pointer() {
        let mut ex = Explorer::with_solar_system(ExplorerConfig::default(), W, H).unwrap();
        let mars = ex.bodies().instances()[4];
        assert!(!ex.pointer_down(mars.x, mars.y));
        ex.pointer_move(mars.x, mars.y);
        assert_eq!(selected(&ex), None);
        assert!(ex.hovered().is_none());

        ex.launch();
        assert!(ex.pointer_down(mars.x, mars.y));
        assert_eq!(selected(&ex), Some("mars"));
    }

    #[test]
    fn keys_and_custom_events_navigate() {
        let mut ex = launched();
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: KEY_LEFT });
        ex.update(0.016, &mut q);
        assert_eq!(selected(&ex), Some("neptune"));

        q.push(InputEvent::Custom { kind: kind::SELECT_INDEX, a: 3.0, b: 0.0 });
        q.push(InputEvent::Custom { kind: kind::NEXT, a: 0.0, b: 0.0 });
        ex.update(0.016, &mut q);
        assert_eq!(selected(&ex), Some("mars"));

        q.push(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        ex.update(0.016, &mut q);
        assert_eq!(selected(&ex), None);
    }

    #[test]
    fn click_selects_body_under_pointer() {
        let mut ex = launched();
        let mars = ex.bodies().instances()[4];
        assert!(ex.pointer_down(mars.x + 1.0, mars.y));
        assert_eq!(selected(&ex), Some("mars"));
        assert_eq!(ex.bodies().instances().len(), 9);

        let mut q = InputQueue::new();
        ex.update(0.0, &mut q);
        assert_eq!(ex.bodies().instances()[4].highlight, HIGHLIGHT_SELECTED);
    }

    #[test]
    fn click_on_empty_space_keeps_selection() {
        let mut ex = launched();
        ex.select(&BodyId::from("earth"));
        assert!(!ex.pointer_down(1.0, 1.0));
        assert_eq!(selected(&ex), Some("earth"));
    }

    #[test]
    fn hover_highlights_without_selecting() {
        let mut ex = launched();
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: kind::HOVER, a: 2.0, b: 0.0 });
        ex.update(0.0, &mut q);
        assert_eq!(ex.hovered().map(|id| id.as_str()), Some("venus"));
        assert_eq!(selected(&ex), None);
        assert_eq!(ex.bodies().instances()[2].highlight, HIGHLIGHT_HOVERED);

        q.push(InputEvent::Custom { kind: kind::HOVER, a: -1.0, b: 0.0 });
        ex.update(0.0, &mut q);
        assert!(ex.hovered().is_none());
    }

    #[test]
    fn paused_animation_freezes_planets() {
        let mut ex = launched();
        let mut q = InputQueue::new();
        ex.update(0.1, &mut q);
        assert!(!ex.toggle_animation());
        let before = ex.bodies().instances()[3];
        ex.update(0.2, &mut q);
        ex.update(0.2, &mut q);
        assert_eq!(ex.bodies().instances()[3], before);
        assert!(ex.elapsed() > 0.0);
    }

    #[test]
    fn projection_toggle_eases_to_true_scale() {
        let mut ex = launched();
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: kind::TOGGLE_PROJECTION, a: 0.0, b: 0.0 });
        ex.update(0.0, &mut q);
        assert_eq!(ex.mode(), ProjectionMode::TrueScale);
        // Not moved yet.
        assert_eq!(ex.bodies().instances()[0].radius, 75.0);

        for _ in 0..10 {
            ex.update(0.2, &mut q);
        }
        assert!(ex.transition().is_settled());
        let sun = ex.bodies().instances()[0];
        let star_px = 1_392_700.0 / 12_742.0 * 5.0;
        assert!((sun.radius - star_px / 2.0).abs() < 1e-2);
        assert!((sun.x - (W / 2.0 - 0.75 * star_px)).abs() < 1e-2);
        let earth = ex.bodies().instances()[3];
        assert!((earth.radius - 2.5).abs() < 1e-4);
    }

    #[test]
    fn compact_viewport_uses_compact_layout() {
        let mut ex = launched();
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: kind::RESIZE, a: 400.0, b: 700.0 });
        ex.update(0.0, &mut q);
        assert_eq!(ex.viewport_class(), ViewportClass::Compact);
        assert_eq!(ex.bodies().instances()[0].radius, 45.0);
    }

    #[test]
    fn chat_needs_a_focused_body() {
        let mut ex = launched();
        assert_eq!(ex.submit_question("hi"), Err(SubmitError::NoSelection));
    }

    #[test]
    fn chat_resets_when_body_changes() {
        let mut ex = launched();
        ex.select(&BodyId::from("mars"));
        let p = ex.submit_question("red?").unwrap();
        assert_eq!(p.body_name, ex.catalog().get(&"mars".into()).unwrap().name);
        ex.resolve_answer(p.id, "rust".into());
        assert_eq!(ex.chat().history().len(), 2);

        ex.select(&BodyId::from("mars"));
        assert_eq!(ex.chat().history().len(), 2);

        ex.next();
        assert!(ex.chat().history().is_empty());
    }

    #[test]
    fn answer_pending_across_body_switch_lands_in_new_history() {
        let mut ex = launched();
        ex.select(&BodyId::from("venus"));
        let p = ex.submit_question("hot?").unwrap();
        ex.next();
        assert!(ex.chat().history().is_empty());
        assert_eq!(ex.submit_question("blue?"), Err(SubmitError::Busy));

        assert!(ex.resolve_answer(p.id, "yes".into()));
        assert_eq!(ex.chat().history().len(), 1);
        assert_eq!(ex.chat().history()[0].role, Role::Model);
        assert!(ex.submit_question("blue?").is_ok());
    }

    #[test]
    fn ask_without_key_appends_fallback() {
        let mut ex = launched();
        ex.select(&BodyId::from("earth"));
        let answer = block_on(ex.ask(&Canned("unused"), "why blue?")).unwrap();
        assert_eq!(answer, FALLBACK_MISSING_KEY);
        let history = ex.chat().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, Role::Model);
        assert!(!ex.chat().is_loading());
    }

    #[test]
    fn ask_with_key_appends_answer() {
        let config = ExplorerConfig {
            show_welcome: false,
            api_key: Some("k".into()),
            ..Default::default()
        };
        let mut ex = Explorer::with_solar_system(config, W, H).unwrap();
        ex.select(&BodyId::from("saturn"));
        let transport = Canned(r#"{"candidates":[{"content":{"parts":[{"text":"Ice."}]}}]}"#);
        let answer = block_on(ex.ask(&transport, "rings?")).unwrap();
        assert_eq!(answer, "Ice.");
        assert_eq!(ex.chat().history()[1].text, "Ice.");
    }

    #[test]
    fn blend_angle_takes_short_arc() {
        use std::f32::consts::TAU;
        let mid = blend_angle(TAU - 0.1, 0.1, 0.5);
        assert!(mid.rem_euclid(TAU) < 1e-4 || (TAU - mid.rem_euclid(TAU)) < 1e-4);
        assert!((blend_angle(1.0, 2.0, 1.0) - 2.0).abs() < 1e-5);
    }
}
