//! WebGPU browser client for Pong
//!
//! Engine-free rendering using wgpu for the WebGPU API. The game logic lives
//! in `game_core`; this crate only polls the keyboard, draws, and runs the
//! frame loop.

pub mod batch;
pub mod camera;
pub mod error;
pub mod input;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::{run, PongApp};
pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging(log::Level::Info);
}

/// Route `log` output to the browser console. Returns false if a logger was
/// already installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) -> bool {
    console_log::init_with_level(level).is_ok()
}
