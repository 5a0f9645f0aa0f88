//! Drawing surface abstraction
//!
//! The core never touches the canvas API directly; it draws through this
//! trait so the simulation can be exercised natively with a recording
//! implementation. The production implementation over
//! `CanvasRenderingContext2d` lives in `effect::render`.

/// Abstract 2D raster surface, extent in device pixels.
pub trait Surface {
    /// Clear the axis-aligned rectangle to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Paint a filled circle. `color` is any CSS color string.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
}
