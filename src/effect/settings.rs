//! Effect settings - host-supplied configuration
//!
//! The host property panel hands these over as JSON; every field is
//! defaulted so a partial object works. Validation happens before any value
//! reaches the simulation.

use serde::{Deserialize, Serialize};

/// Scale between the host-facing ripple strength (1..=20, default 5) and the
/// per-particle impulse factor: the default maps to an effective 0.005.
pub const RIPPLE_STRENGTH_SCALE: f32 = 0.001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Grid spacing in device pixels. Recommended range 10..=50.
    pub gap: u32,
    /// Pointer influence radius. Recommended range 1000..=5000.
    pub pointer_radius: f32,
    /// Repulsion strength. Recommended range 1..=20.
    pub ripple_strength: f32,
    /// Radius of the click-triggered explosion.
    pub explosion_radius: f32,
    /// Per-tick fractional pull back toward the rest position, in (0, 1).
    pub ease: f32,
    /// Per-tick multiplicative velocity decay, in (0, 1).
    pub friction: f32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            gap: 20,
            pointer_radius: 3000.0,
            ripple_strength: 5.0,
            explosion_radius: 150.0,
            ease: 0.03,
            friction: 0.98,
        }
    }
}

impl EffectSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Serialization of a plain struct of numbers cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.gap == 0 {
            return Err("gap must be at least 1".to_string());
        }
        if !(self.pointer_radius > 0.0) {
            return Err("pointer_radius must be positive".to_string());
        }
        if !(self.ripple_strength > 0.0) {
            return Err("ripple_strength must be positive".to_string());
        }
        if !(self.explosion_radius > 0.0) {
            return Err("explosion_radius must be positive".to_string());
        }
        if !(self.ease > 0.0 && self.ease < 1.0) {
            return Err("ease must be in (0, 1)".to_string());
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err("friction must be in (0, 1)".to_string());
        }
        Ok(())
    }

    /// The unified impulse factor copied into each particle.
    pub fn particle_ripple_strength(&self) -> f32 {
        self.ripple_strength * RIPPLE_STRENGTH_SCALE
    }
}
