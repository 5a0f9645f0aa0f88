//! Ripple Engine - interactive particle-grid background effect in WASM
//!
//! Particles sit on a fixed grid, get pushed away by pointer proximity,
//! spring back to their rest positions, and can be blown up in a radius by a
//! click. The JS host owns the canvas and the requestAnimationFrame loop and
//! forwards pointer/click/resize events; all simulation state and drawing
//! live on this side of the boundary.
//!
//! Layout:
//! - particle.rs  - per-particle state and tick physics
//! - pointer.rs   - pointer position + influence radius
//! - surface.rs   - abstract drawing surface
//! - effect/      - the grid aggregate, settings, canvas rendering, wasm facade
//! - random.rs    - xorshift32

pub mod effect;
pub mod particle;
pub mod pointer;
pub mod random;
pub mod surface;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Ripple WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use effect::{CanvasSurface, Effect, EffectCore, EffectSettings};
pub use particle::Particle;
pub use pointer::Pointer;
pub use surface::Surface;
