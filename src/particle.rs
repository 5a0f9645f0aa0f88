//! Particle - a point-mass on the decorative grid
//!
//! Each particle owns its rest position, current position/velocity, drawn
//! size/color, and the physical constants copied from the effect settings at
//! creation. The per-tick update is a pure function of the particle and the
//! pointer state; drawing goes through the `Surface` trait and never mutates.

use crate::pointer::Pointer;
use crate::random;
use crate::surface::Surface;

/// Floor for the repulsion divisor. A pointer sitting exactly on a particle
/// center would otherwise divide by zero and poison the velocity with a
/// non-finite value.
pub const MIN_POINTER_DISTANCE: f32 = 1.0;

/// Explosion kick: each velocity component lands in [-KICK, KICK).
const EXPLOSION_KICK: f32 = 5.0;

/// Drawn radius range, uniform per particle.
const SIZE_MIN: f32 = 0.5;
const SIZE_MAX: f32 = 2.0;

const DEFAULT_COLOR: &str = "gray";

/// One grid slot. Created during rebuild, replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Rest position, fixed at creation.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Current position.
    pub x: f32,
    pub y: f32,
    /// Velocity.
    pub vx: f32,
    pub vy: f32,
    /// Drawn radius, fixed at creation.
    pub size: f32,
    /// CSS color; mutated only by `explode`.
    pub color: String,

    // Physical constants, copied from settings at creation.
    pub ease: f32,
    pub friction: f32,
    pub ripple_strength: f32,
}

impl Particle {
    pub fn new(
        x: f32,
        y: f32,
        ease: f32,
        friction: f32,
        ripple_strength: f32,
        rng: &mut u32,
    ) -> Self {
        let origin_x = x.floor();
        let origin_y = y.floor();
        Self {
            origin_x,
            origin_y,
            x: origin_x,
            y: origin_y,
            vx: 0.0,
            vy: 0.0,
            size: random::range_f32(rng, SIZE_MIN, SIZE_MAX),
            color: DEFAULT_COLOR.to_string(),
            ease,
            friction,
            ripple_strength,
        }
    }

    /// Advance one tick. Order matters: impulse, integrate, friction, then
    /// spring return against the new position. Friction damps an impulse
    /// applied in the same tick.
    pub fn update(&mut self, pointer: &Pointer) {
        let dx = pointer.x - self.x;
        let dy = pointer.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < pointer.radius {
            let force = (pointer.radius - distance).max(0.0);
            let angle = dy.atan2(dx);
            let divisor = distance.max(MIN_POINTER_DISTANCE);
            self.vx -= angle.cos() * force / divisor * self.ripple_strength;
            self.vy -= angle.sin() * force / divisor * self.ripple_strength;
        }

        self.x += self.vx;
        self.y += self.vy;

        self.vx *= self.friction;
        self.vy *= self.friction;

        // Return to rest position
        self.x += (self.origin_x - self.x) * self.ease;
        self.y += (self.origin_y - self.y) * self.ease;
    }

    /// Paint a filled circle at the current position. No state mutation.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.x, self.y, self.size, &self.color);
    }

    /// Kick the particle with a random velocity and a random saturated hue.
    /// Re-randomizes on every call; there is no guard against re-triggering
    /// a particle already in flight.
    pub fn explode(&mut self, rng: &mut u32) {
        self.vx = random::range_f32(rng, -EXPLOSION_KICK, EXPLOSION_KICK);
        self.vy = random::range_f32(rng, -EXPLOSION_KICK, EXPLOSION_KICK);
        let hue = random::unit_f32(rng) * 360.0;
        self.color = format!("hsl({}, 100%, 50%)", hue as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_particle(x: f32, y: f32) -> Particle {
        let mut rng = 12345;
        Particle::new(x, y, 0.03, 0.98, 0.005, &mut rng)
    }

    fn out_of_range_pointer() -> Pointer {
        Pointer { x: 10_000.0, y: 10_000.0, radius: 1.0 }
    }

    #[test]
    fn new_particle_rests_at_floored_origin_with_zero_velocity() {
        let p = test_particle(20.7, 40.2);
        assert_eq!(p.origin_x, 20.0);
        assert_eq!(p.origin_y, 40.0);
        assert_eq!((p.x, p.y), (p.origin_x, p.origin_y));
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
        assert!(p.size >= 0.5 && p.size < 2.0);
        assert_eq!(p.color, "gray");
    }

    #[test]
    fn pointer_out_of_range_applies_no_impulse() {
        let mut p = test_particle(20.0, 20.0);
        p.update(&out_of_range_pointer());
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
        assert_eq!((p.x, p.y), (20.0, 20.0));
    }

    #[test]
    fn pointer_in_range_pushes_particle_away() {
        let mut p = test_particle(20.0, 20.0);
        // Pointer to the right of the particle pushes it left.
        let pointer = Pointer { x: 30.0, y: 20.0, radius: 100.0 };
        p.update(&pointer);
        assert!(p.x < 20.0);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn zero_distance_pointer_keeps_velocity_finite() {
        let mut p = test_particle(40.0, 40.0);
        let pointer = Pointer { x: 40.0, y: 40.0, radius: 50.0 };
        p.update(&pointer);
        assert!(p.vx.is_finite());
        assert!(p.vy.is_finite());
        assert!(p.x.is_finite());
        assert!(p.y.is_finite());
        // Impulse is bounded by radius / MIN_POINTER_DISTANCE * strength.
        assert!(p.vx.abs() <= 50.0 * 0.005);
        assert!(p.vy.abs() <= 50.0 * 0.005);
    }

    #[test]
    fn displaced_particle_converges_back_to_origin() {
        let mut p = test_particle(100.0, 100.0);
        p.x = 150.0;
        p.y = 60.0;
        p.vx = 4.0;
        p.vy = -3.0;
        let pointer = out_of_range_pointer();
        for _ in 0..2000 {
            p.update(&pointer);
        }
        assert!((p.x - p.origin_x).abs() < 0.01);
        assert!((p.y - p.origin_y).abs() < 0.01);
        assert!(p.vx.abs() < 0.01);
        assert!(p.vy.abs() < 0.01);
    }

    #[test]
    fn update_applies_friction_then_spring() {
        // One hand-computed tick, pointer out of range: integrate, decay,
        // then ease against the new position.
        let mut p = test_particle(0.0, 0.0);
        p.x = 10.0;
        p.vx = 2.0;
        p.update(&out_of_range_pointer());
        let x_after_integrate = 10.0 + 2.0;
        let expected_x = x_after_integrate + (0.0 - x_after_integrate) * 0.03;
        assert!((p.x - expected_x).abs() < 1e-5);
        assert!((p.vx - 2.0 * 0.98).abs() < 1e-5);
    }

    #[test]
    fn draw_leaves_every_field_unchanged() {
        struct NullSurface;
        impl Surface for NullSurface {
            fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
            fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: &str) {}
        }

        let mut p = test_particle(10.0, 10.0);
        p.vx = 1.5;
        p.color = "hsl(120, 100%, 50%)".to_string();
        let before = p.clone();

        p.draw(&mut NullSurface);
        assert_eq!(p, before);
    }

    #[test]
    fn explode_randomizes_velocity_and_color_in_range() {
        let mut p = test_particle(0.0, 0.0);
        let mut rng = 777;
        p.explode(&mut rng);
        assert!(p.vx >= -5.0 && p.vx < 5.0);
        assert!(p.vy >= -5.0 && p.vy < 5.0);
        assert!(p.color.starts_with("hsl("));
        assert!(p.color.ends_with(", 100%, 50%)"));
        assert_ne!(p.color, "gray");
    }

    #[test]
    fn explode_rerandomizes_on_repeat_calls() {
        let mut p = test_particle(0.0, 0.0);
        let mut rng = 424242;
        p.explode(&mut rng);
        let first = (p.vx, p.vy);
        p.explode(&mut rng);
        assert_ne!(first, (p.vx, p.vy));
    }
}
