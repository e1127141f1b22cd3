//! Queued per-layer work items.

use quarterturn_core::Layer;

/// One queued unit of work, always touching a single layer.
///
/// Jobs run strictly in order, one execution per tick, and an unfinished job
/// stays at the front of the queue, so at most one layer is ever mid-turn.
/// A turn is always a chain: a rotation job, then `Stabilize`, then
/// `Commit`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Job {
    /// Follow the pointer, converting travel along the dominant axis into
    /// rotation. Finishes when the pointer is released.
    DragRotate {
        /// The layer being dragged.
        layer: Layer,
        /// Whether positive travel reads as clockwise.
        clockwise: bool,
        /// Whether travel is read from the x axis rather than y.
        horizontal: bool,
    },
    /// Rotate by a fixed total angle at a fixed speed per tick.
    AnimateTo {
        /// The layer being animated.
        layer: Layer,
        /// Signed degrees still to apply.
        degrees_left: f32,
        /// Unsigned degrees applied per tick.
        speed: f32,
    },
    /// Step the layer's angle onto the nearest quarter-turn multiple.
    Stabilize {
        /// The layer being settled.
        layer: Layer,
    },
    /// Quantize the settled angle, apply the resulting discrete turn (if
    /// any), and reset the angle. Always finishes in one tick.
    Commit {
        /// The layer being committed.
        layer: Layer,
        /// Whether a resulting move is recorded in the undo history.
        push_history: bool,
    },
}
