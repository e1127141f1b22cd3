//! Per-tick input snapshot handed in by the frontend.

use cgmath::Vector2;
use quarterturn_core::Facelet;

/// Everything the simulation needs to know about one tick of user input.
///
/// The frontend owns the event loop, the camera, and hit testing; it reduces
/// all of that to this snapshot once per tick. Pointer edges (press and
/// release) are derived by the simulation from `pointer_pressed` across
/// consecutive ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// Whether the primary pointer button is down this tick.
    pub pointer_pressed: bool,
    /// Pointer travel since the previous tick, in screen units. `x` runs
    /// rightward and `y` runs upward.
    pub pointer_delta: Vector2<f32>,
    /// The sticker under the pointer, if any.
    pub hover: Option<Facelet>,
    /// Camera position along the world X axis.
    pub camera_x: f32,
    /// Camera position along the world Z axis.
    pub camera_z: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer_pressed: false,
            pointer_delta: Vector2::new(0.0, 0.0),
            hover: None,
            camera_x: 0.0,
            camera_z: 1.0,
        }
    }
}
