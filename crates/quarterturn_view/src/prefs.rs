//! Tunable parameters for drag input and turn animation.

use serde::{Deserialize, Serialize};

/// Speeds and thresholds governing interactive turning.
///
/// Speeds are in degrees per simulation tick; pointer distances are in
/// whatever units the frontend reports, typically normalized screen space.
/// Speeds at or below zero are clamped to a small positive floor when the
/// simulation consumes them, so a degenerate stored config cannot stall a
/// queued turn.
/// Unknown fields in a stored config are ignored and missing fields fall
/// back to the defaults, so configs survive version changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TurnPreferences {
    /// Degrees of layer rotation per unit of pointer travel.
    pub drag_sensitivity: f32,
    /// Fastest a released layer moves toward its rest angle.
    pub settle_speed: f32,
    /// Animation speed for undone and redone turns.
    pub undo_speed: f32,
    /// Animation speed for scramble turns.
    pub scramble_speed: f32,
    /// Number of random moves in a scramble.
    pub scramble_length: usize,
    /// Pointer travel per tick below which a press is not yet a drag.
    pub drag_threshold: f32,
}

impl Default for TurnPreferences {
    fn default() -> Self {
        Self {
            drag_sensitivity: 30.0,
            settle_speed: 15.0,
            undo_speed: 10.0,
            scramble_speed: 30.0,
            scramble_length: 20,
            drag_threshold: 0.3,
        }
    }
}
