//! WASM facade over the effect core

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::render::CanvasSurface;
use super::settings::EffectSettings;
use super::EffectCore;

#[wasm_bindgen]
pub struct Effect {
    core: EffectCore,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl Effect {
    /// Create the effect over a canvas context with the given extent in
    /// device pixels, using default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Result<Effect, JsValue> {
        let core = EffectCore::with_defaults(width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core,
            surface: CanvasSurface::new(ctx),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Apply settings from the host property panel as JSON. Missing fields
    /// keep their defaults; the grid is rebuilt.
    pub fn apply_settings(&mut self, json: String) -> Result<(), JsValue> {
        let settings = EffectSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.core
            .apply_settings(settings)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Current settings as JSON (for the host property panel).
    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Pointer-move event, coordinates in device pixels.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(x, y);
    }

    pub fn set_pointer_radius(&mut self, radius: f32) {
        self.core.set_pointer_radius(radius);
    }

    /// Pointer-activate (click) event: radial explosion at the configured
    /// explosion radius.
    pub fn pointer_activate(&mut self, x: f32, y: f32) {
        self.core.pointer_activate(x, y);
    }

    /// Explosion with an explicit radius.
    pub fn explode_within(&mut self, x: f32, y: f32, radius: f32) {
        self.core.explode_within(x, y, radius);
    }

    /// Surface-resized event: forces a full grid rebuild.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.core
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Change the grid spacing; rebuilds the grid.
    pub fn set_gap(&mut self, gap: u32) -> Result<(), JsValue> {
        self.core.set_gap(gap).map_err(|e| JsValue::from_str(&e))
    }

    /// Advance one frame: clear the canvas, tick and draw every particle.
    /// The host calls this from its requestAnimationFrame loop.
    pub fn update(&mut self) {
        self.core.update(&mut self.surface);
    }
}
