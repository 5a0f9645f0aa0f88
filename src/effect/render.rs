//! Canvas-backed surface implementation

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::surface::Surface;

/// `Surface` over a browser 2D canvas context. The host owns the canvas
/// element and its device-pixel sizing; this only issues draw calls.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        // arc only errors on a negative radius; particle sizes are >= 0.5.
        let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
