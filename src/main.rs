//! Sprite Catch entry point
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
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent};

    use sprite_catch::platform::{CanvasPainter, MusicPlayer, load_assets};
    use sprite_catch::sim::{GameState, click_at, tick};
    use sprite_catch::{GameConfig, SetupError};

    const CANVAS_ID: &str = "gameCanvas";
    const SCORE_ID: &str = "score";
    const MUSIC_BUTTON_ID: &str = "toggleMusic";
    const CONFIG_ID: &str = "game-config";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        painter: CanvasPainter,
        last_time: f64,
    }

    impl Game {
        /// Run one simulation tick and paint it
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            let commands = tick(&mut self.state, dt);
            self.painter.paint(&commands);
        }
    }

    fn missing(id: &str) -> SetupError {
        SetupError::MissingElement { id: id.to_string() }
    }

    /// Optional inline `<script id="game-config" type="application/json">`
    fn read_config(document: &Document) -> Result<GameConfig, SetupError> {
        let json = document
            .get_element_by_id(CONFIG_ID)
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());
        match json {
            Some(json) => {
                log::info!("Using page config");
                Ok(GameConfig::from_json(&json)?)
            }
            None => Ok(GameConfig::default()),
        }
    }

    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (w as u32, h as u32)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("Sprite Catch starting...");

        if let Err(e) = start().await {
            log::error!("Startup failed: {}", e);
            show_fault(&e);
        }
    }

    async fn start() -> Result<(), SetupError> {
        let window = web_sys::window().ok_or_else(|| missing("window"))?;
        let document = window.document().ok_or_else(|| missing("document"))?;
        let config = read_config(&document)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| missing(CANVAS_ID))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
            .ok_or_else(|| missing(CANVAS_ID))?;

        let _ = canvas.style().set_property("cursor", &config.cursor);
        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        // Music is independent of the simulation and works even while loading
        setup_music_toggle(&document, &config);

        // Nothing starts until every image is ready
        let assets = load_assets(&config.assets).await?;
        let catalog = assets.catalog()?;

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(
            seed,
            catalog,
            config.tuning.clone(),
            Vec2::new(width as f32, height as f32),
        );
        let game = Rc::new(RefCell::new(Game {
            state,
            painter: CanvasPainter::new(ctx, assets),
            last_time: 0.0,
        }));

        let score_el = document.get_element_by_id(SCORE_ID);
        if score_el.is_none() {
            log::warn!("No #{} element - score will not be displayed", SCORE_ID);
        }
        setup_click_handler(&canvas, game.clone(), score_el);
        setup_resize_handler(&window, &canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Sprite Catch running with seed: {}", seed);
        Ok(())
    }

    /// Put the startup fault on the page; the game stays stopped
    fn show_fault(error: &SetupError) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else { return };
        if let Ok(el) = document.create_element("p") {
            el.set_class_name("startup-error");
            el.set_text_content(Some(&format!("The game could not start: {}", error)));
            let _ = body.append_child(&el);
        }
    }

    fn setup_click_handler(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
        score_el: Option<Element>,
    ) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let point = Vec2::new(
                event.client_x() as f32 - rect.left() as f32,
                event.client_y() as f32 - rect.top() as f32,
            );

            let mut g = game.borrow_mut();
            // Event and rAF timestamps share the page clock
            let since_tick = if g.last_time > 0.0 {
                event.time_stamp() - g.last_time
            } else {
                0.0
            };
            click_at(&mut g.state, point, since_tick);
            if let Some(el) = &score_el {
                el.set_text_content(Some(&g.state.score.to_string()));
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize_handler(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else { return };
            let (width, height) = window_size(&window);
            canvas_clone.set_width(width);
            canvas_clone.set_height(height);
            game.borrow_mut().state.resize(width as f32, height as f32);
            log::debug!("Canvas resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_music_toggle(document: &Document, config: &GameConfig) {
        let Some(btn) = document.get_element_by_id(MUSIC_BUTTON_ID) else {
            log::warn!("No #{} button - music disabled", MUSIC_BUTTON_ID);
            return;
        };

        let player = MusicPlayer::new(&config.assets.music, config.music_volume);
        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let label = if player.toggle() { "Pause" } else { "Play" };
            btn_clone.set_text_content(Some(label));
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
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
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sprite Catch (native) starting...");
    log::info!("Native mode runs a headless simulation - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Seeded, display-less session with scripted clicks
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;

    use glam::Vec2;
    use sprite_catch::sim::{ClickOutcome, GameState, click, tick};
    use sprite_catch::{GameConfig, SpriteCatalog};

    /// Natural sizes of the four stock sprites
    const SPRITE_SIZES: [(f32, f32); 4] = [(256.0, 256.0), (240.0, 260.0), (220.0, 200.0), (200.0, 240.0)];
    const CANVAS: Vec2 = Vec2::new(1280.0, 720.0);
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const RUN_SECONDS: u32 = 60;
    /// Frames between scripted clicks
    const CLICK_EVERY: u32 = 45;

    /// `sprite-catch [seed] [config.json]`
    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(s) => s.parse::<u64>()?,
            None => 42,
        };
        let config = match args.next() {
            Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };

        let sizes = SPRITE_SIZES.iter().map(|&(w, h)| Vec2::new(w, h)).collect();
        let catalog = SpriteCatalog::new(sizes)?;
        let mut state = GameState::new(config.seed.unwrap_or(seed), catalog, config.tuning, CANVAS);

        let (mut hits, mut misses) = (0u32, 0u32);
        let mut peak_live = state.entities.len();
        for frame in 1..=RUN_SECONDS * 60 {
            tick(&mut state, FRAME_MS);
            peak_live = peak_live.max(state.entities.len());

            if frame % CLICK_EVERY == 0 {
                // Alternate: aim at the topmost sprite, then at an empty corner
                let point = if (frame / CLICK_EVERY) % 2 == 0 {
                    state.entities.last().map(|e| e.pos + e.size * 0.5)
                } else {
                    None
                };
                match click(&mut state, point.unwrap_or(Vec2::ZERO)) {
                    ClickOutcome::Hit { .. } => hits += 1,
                    ClickOutcome::Miss { .. } => misses += 1,
                }
            }
        }

        log::info!(
            "{}s simulated ({} ticks): score={} hits={} misses={} live={} peak={}",
            RUN_SECONDS,
            state.time_ticks,
            state.score,
            hits,
            misses,
            state.entities.len(),
            peak_live
        );
        println!("score: {}", state.score);
        Ok(())
    }
}
