//! Pointer state - position and influence radius
//!
//! Written by host events (mousemove), read by every particle update in the
//! same frame. Passed into `Particle::update` explicitly so the tick stays a
//! pure function of its inputs.

/// Pointer position in device pixels plus influence radius.
///
/// The idle value is the origin with the configured radius, so with the
/// large default radius particles near (0, 0) may react before the first
/// pointer event. Intentional; the host can lower the radius if unwanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Pointer {
    pub fn idle(radius: f32) -> Self {
        Self { x: 0.0, y: 0.0, radius }
    }
}
