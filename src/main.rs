//! Aim Trainer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, MouseEvent};

    use aim_trainer::HudText;
    use aim_trainer::platform::{PointerEvent, element_to_playfield};
    use aim_trainer::renderer::RenderState;
    use aim_trainer::sim::{FixedTimestep, SessionState};

    /// Statistic labels next to the canvas
    struct HudLabels {
        score: Element,
        error: Element,
        accuracy: Element,
        targets: Element,
    }

    impl HudLabels {
        fn lookup(document: &Document) -> Result<Self, JsValue> {
            Ok(Self {
                score: element(document, "score")?,
                error: element(document, "error")?,
                accuracy: element(document, "accuracy")?,
                targets: element(document, "target_count")?,
            })
        }

        fn update(&self, hud: &HudText) {
            self.score.set_text_content(Some(&hud.score));
            self.error.set_text_content(Some(&hud.error));
            self.accuracy.set_text_content(Some(&hud.accuracy));
            self.targets.set_text_content(Some(&hud.targets));
        }
    }

    /// Game instance holding all state
    struct Game {
        session: SessionState,
        timestep: FixedTimestep,
        render_state: Option<RenderState>,
        labels: HudLabels,
    }

    impl Game {
        /// Run due ticks, then draw once
        fn frame(&mut self, time: f64) {
            let session = &mut self.session;
            self.timestep.advance(time, || {
                session.tick();
            });

            self.render();
            self.labels.update(&HudText::from_stats(&self.session.stats));
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.session.targets) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_error)?;

        log::info!("Aim Trainer starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = element(&document, "canvas")?.dyn_into()?;

        // Match the backing store to the displayed size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        log::info!("Session seeded with: {}", seed);

        let render_state = match init_renderer(&canvas, width, height).await {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("Rendering unavailable: {:?}", e);
                None
            }
        };

        let game = Rc::new(RefCell::new(Game {
            session: SessionState::new(seed),
            timestep: FixedTimestep::default(),
            render_state,
            labels: HudLabels::lookup(&document)?,
        }));

        setup_pointer_handlers(&canvas, game.clone());
        setup_controls(&document, game.clone())?;

        request_animation_frame(game);

        log::info!("Aim Trainer running!");
        Ok(())
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, JsValue> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_error)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_error)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_error)
    }

    /// Element-local mouse position rescaled to the playfield
    fn playfield_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        element_to_playfield(
            Vec2::new(event.offset_x() as f32, event.offset_y() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        )
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let handlers: [(&str, fn(Vec2) -> PointerEvent); 2] = [
            ("mousedown", PointerEvent::Press),
            ("mousemove", PointerEvent::Move),
        ];

        for (name, to_event) in handlers {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = playfield_pos(&canvas_clone, &event);
                to_event(pos).apply(&mut game.borrow_mut().session.input);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                PointerEvent::Release.apply(&mut game.borrow_mut().session.input);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_controls(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Reset button
        {
            let game = game.clone();
            let btn = element(document, "reset")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.reset();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tracking mode checkbox
        {
            let checkbox: HtmlInputElement = element(document, "tracking")?.dyn_into()?;
            let checkbox_clone = checkbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let enabled = checkbox_clone.checked();
                game.borrow_mut().session.input.set_tracking_mode(enabled);
                log::info!("Tracking mode: {}", enabled);
            });
            checkbox.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Seed for the headless run unless `AIM_TRAINER_SEED` is set
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 0x5eed;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use aim_trainer::HudText;
    use aim_trainer::sim::{FixedTimestep, SessionState};

    env_logger::init();
    log::info!("Aim Trainer (native) starting...");
    log::info!("Native mode runs a scripted session - run with `trunk serve` for the web version");

    let seed = std::env::var("AIM_TRAINER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    log::info!("Session seeded with: {}", seed);

    let mut session = SessionState::new(seed);
    let mut timestep = FixedTimestep::default();

    // Ten seconds of slightly uneven frames
    for frame in 0..600u32 {
        let time = f64::from(frame) * 16.7 + f64::from(frame % 3);
        scripted_input(&mut session, frame);
        timestep.advance(time, || {
            session.tick();
        });

        if frame % 60 == 0 {
            log::info!("{}", HudText::from_stats(&session.stats).lines().join(" | "));
        }
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

/// Clicks on targets, a few deliberate misses, then a tracking drag
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(session: &mut aim_trainer::sim::SessionState, frame: u32) {
    use aim_trainer::consts::TARGET_COUNT;
    use aim_trainer::platform::PointerEvent;
    use glam::Vec2;

    let slot = (frame as usize / 45) % TARGET_COUNT;
    let event = match frame {
        300 => {
            session.input.set_tracking_mode(true);
            Some(PointerEvent::Press(session.targets[0].pos))
        }
        301..=359 => Some(PointerEvent::Move(session.targets[0].pos)),
        360 => {
            session.input.set_tracking_mode(false);
            Some(PointerEvent::Release)
        }
        f if f % 150 == 75 => Some(PointerEvent::Press(Vec2::new(1.0, 1.0))),
        f if f % 45 == 0 => Some(PointerEvent::Press(session.targets[slot].pos)),
        f if f % 45 == 1 => Some(PointerEvent::Release),
        _ => None,
    };

    if let Some(event) = event {
        event.apply(&mut session.input);
    }
}
