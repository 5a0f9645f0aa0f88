//! Effect - the particle grid aggregate
//!
//! `EffectCore` owns the whole simulation: the particle collection, extent,
//! settings, pointer state, and the per-frame lifecycle. It draws through
//! the `Surface` trait and is exercised natively by the tests; the
//! `#[wasm_bindgen]` wrapper in `facade` is the only browser-facing layer.
//!
//! The host contract is frame-driven and single-threaded: event callbacks
//! (pointer-move, pointer-activate, resize) and the per-frame `update` are
//! serialized onto one execution context, so no field here needs
//! synchronization.

use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::Surface;

mod facade;
mod render;
mod settings;

pub use facade::Effect;
pub use render::CanvasSurface;
pub use settings::EffectSettings;

const RNG_SEED: u32 = 12345;

/// The simulation core.
pub struct EffectCore {
    width: u32,
    height: u32,
    settings: EffectSettings,

    /// Row-major scan order; order only matters for painter's draw order.
    particles: Vec<Particle>,
    pointer: Pointer,

    frame: u64,
    rng_state: u32,
}

impl EffectCore {
    /// Create an effect over a surface of the given extent (device pixels).
    /// Fails fast on a zero-sized surface or invalid settings; those are
    /// host preconditions, not recoverable states.
    pub fn new(width: u32, height: u32, settings: EffectSettings) -> Result<Self, String> {
        validate_extent(width, height)?;
        settings.validate()?;
        let mut core = Self {
            width,
            height,
            pointer: Pointer::idle(settings.pointer_radius),
            settings,
            particles: Vec::new(),
            frame: 0,
            rng_state: RNG_SEED,
        };
        core.rebuild();
        Ok(core)
    }

    pub fn with_defaults(width: u32, height: u32) -> Result<Self, String> {
        Self::new(width, height, EffectSettings::default())
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn particle_count(&self) -> u32 { self.particles.len() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn settings(&self) -> &EffectSettings { &self.settings }

    pub fn pointer(&self) -> &Pointer { &self.pointer }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Particle count implied by the current `(width, height, gap)` triple.
    pub fn expected_particle_count(&self) -> u32 {
        let gap = self.settings.gap;
        let cols = (self.width + gap - 1) / gap;
        let rows = (self.height + gap - 1) / gap;
        cols * rows
    }

    /// Replace the whole particle collection for the current
    /// `(width, height, gap)`. Row-major: `y` outer, `x` inner, both
    /// stepping `gap` from zero while inside the extent. No diffing; prior
    /// particles are discarded outright.
    fn rebuild(&mut self) {
        self.particles.clear();
        let gap = self.settings.gap;
        let ease = self.settings.ease;
        let friction = self.settings.friction;
        let strength = self.settings.particle_ripple_strength();

        let mut y = 0;
        while y < self.height {
            let mut x = 0;
            while x < self.width {
                self.particles.push(Particle::new(
                    x as f32,
                    y as f32,
                    ease,
                    friction,
                    strength,
                    &mut self.rng_state,
                ));
                x += gap;
            }
            y += gap;
        }
    }

    /// Surface-resized event: store the new extent and rebuild.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        validate_extent(width, height)?;
        self.width = width;
        self.height = height;
        self.rebuild();
        Ok(())
    }

    /// Change the grid spacing and rebuild.
    pub fn set_gap(&mut self, gap: u32) -> Result<(), String> {
        let mut settings = self.settings.clone();
        settings.gap = gap;
        self.apply_settings(settings)
    }

    /// Swap in a full settings object (host property panel). Rebuilds, since
    /// particles copy their constants at creation.
    pub fn apply_settings(&mut self, settings: EffectSettings) -> Result<(), String> {
        settings.validate()?;
        self.pointer.radius = settings.pointer_radius;
        self.settings = settings;
        self.rebuild();
        Ok(())
    }

    /// Advance one frame: clear the surface, then tick and draw every
    /// particle in stored order against the current pointer state.
    pub fn update(&mut self, surface: &mut dyn Surface) {
        surface.clear_rect(0.0, 0.0, self.width as f32, self.height as f32);
        for particle in &mut self.particles {
            particle.update(&self.pointer);
            particle.draw(surface);
        }
        self.frame += 1;
    }

    /// Trigger an explosion on every particle whose current position lies
    /// strictly within `radius` of `(x, y)`. Plain O(n) scan; the grid is
    /// hundreds to low thousands of particles.
    pub fn explode_within(&mut self, x: f32, y: f32, radius: f32) {
        for particle in &mut self.particles {
            let dx = particle.x - x;
            let dy = particle.y - y;
            if (dx * dx + dy * dy).sqrt() < radius {
                particle.explode(&mut self.rng_state);
            }
        }
    }

    /// Pointer-activate (click) event: explode at the configured radius.
    pub fn pointer_activate(&mut self, x: f32, y: f32) {
        self.explode_within(x, y, self.settings.explosion_radius);
    }

    /// Pointer-move event.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn set_pointer_radius(&mut self, radius: f32) {
        self.pointer.radius = radius;
        self.settings.pointer_radius = radius;
    }
}

fn validate_extent(width: u32, height: u32) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("surface extent must be non-zero, got {}x{}", width, height));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
