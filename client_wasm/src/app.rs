//! Browser host: owns the game and drives it from `requestAnimationFrame`

use crate::batch::FrameBatch;
use crate::error::ClientError;
use crate::input::KeyboardState;
use crate::overlay::TextOverlay;
use crate::renderer::Renderer;
use game_core::{Config, DrawList, Game, GameRng, Outcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

/// Main client state
#[wasm_bindgen]
pub struct PongApp {
    game: Game,
    keyboard: KeyboardState,
    renderer: Renderer,
    overlay: TextOverlay,
    draw_list: DrawList,
    stopped: bool,
}

#[wasm_bindgen]
impl PongApp {
    /// Size the canvas, set the title and initialise WebGPU
    pub async fn create(canvas: HtmlCanvasElement) -> Result<PongApp, JsValue> {
        Ok(Self::init(canvas).await?)
    }

    /// Key down event from JS (`KeyboardEvent.key`)
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keyboard.handle_key_down(key)
    }

    /// Key up event from JS
    pub fn key_up(&mut self, key: &str) -> bool {
        self.keyboard.handle_key_up(key)
    }

    /// Release every held key, e.g. on window blur
    pub fn release_all(&mut self) {
        self.keyboard.clear();
    }

    /// Run update then draw. Returns false once the loop should stop.
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        Ok(self.step_frame()? == Outcome::Continue)
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Logical resolution as `[width, height]`
    pub fn layout(&self, outside_width: u32, outside_height: u32) -> Vec<u32> {
        let (w, h) = self.game.layout(outside_width, outside_height);
        vec![w, h]
    }

    #[wasm_bindgen(getter)]
    pub fn score_left(&self) -> u32 {
        self.game.state.score.left
    }

    #[wasm_bindgen(getter)]
    pub fn score_right(&self) -> u32 {
        self.game.state.score.right
    }
}

impl PongApp {
    async fn init(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let config = Config::new();
        let window = web_window()?;
        let document = window
            .document()
            .ok_or_else(|| ClientError::Dom("no document".into()))?;

        let (width, height) = config.layout(canvas.width(), canvas.height());
        canvas.set_width(width);
        canvas.set_height(height);
        document.set_title(&config.window_title);

        let overlay = TextOverlay::new(document, &canvas)?;
        let renderer = Renderer::new(canvas, config.screen_width, config.screen_height).await?;

        log::info!("{} started at {}x{}", config.window_title, width, height);

        Ok(Self {
            game: Game::new(config, GameRng::from_entropy()),
            keyboard: KeyboardState::new(),
            renderer,
            overlay,
            draw_list: DrawList::new(),
            stopped: false,
        })
    }

    fn step_frame(&mut self) -> Result<Outcome, ClientError> {
        if self.stopped {
            return Ok(Outcome::Quit);
        }

        self.keyboard.advance_tick();
        self.draw_list.clear();
        let outcome = self.game.frame(&self.keyboard, &mut self.draw_list);

        let batch = FrameBatch::from_draw_list(&self.draw_list);
        self.renderer.draw(&batch)?;
        self.overlay.update(&batch.texts)?;

        if outcome != Outcome::Continue {
            self.stopped = true;
        }
        Ok(outcome)
    }
}

fn web_window() -> Result<Window, ClientError> {
    web_sys::window().ok_or_else(|| ClientError::Dom("no window".into()))
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, ClientError> {
    window
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(format!("{:?}", e)))
}

fn add_key_listener(
    window: &Window,
    event: &str,
    app: Rc<RefCell<PongApp>>,
    handler: fn(&mut PongApp, &str) -> bool,
) -> Result<(), ClientError> {
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if handler(&mut app.borrow_mut(), &event.key()) {
            event.prevent_default();
        }
    });
    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(format!("{:?}", e)))?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Create the game on `canvas`, hook up the keyboard and start the frame loop.
/// The loop stops when the quit key is held or a frame fails.
#[wasm_bindgen]
pub fn run(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let app = PongApp::init(canvas).await?;
        start_loop(app)?;
        Ok(JsValue::UNDEFINED)
    })
}

fn start_loop(app: PongApp) -> Result<(), ClientError> {
    let window = web_window()?;
    let app = Rc::new(RefCell::new(app));

    add_key_listener(&window, "keydown", app.clone(), PongApp::key_down)?;
    add_key_listener(&window, "keyup", app.clone(), PongApp::key_up)?;

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = tick.clone();
    let loop_window = window.clone();

    *tick.borrow_mut() = Some(Closure::new(move || {
        let outcome = app.borrow_mut().step_frame();
        match outcome {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => {
                log::info!("frame loop stopped");
                return;
            }
            Err(e) => {
                log::error!("frame failed: {}", e);
                return;
            }
        }
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&loop_window, cb) {
                log::error!("{}", e);
            }
        }
    }));

    if let Some(cb) = tick.borrow().as_ref() {
        request_animation_frame(&window, cb)?;
    }
    Ok(())
}
