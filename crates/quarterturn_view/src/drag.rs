//! Drag gesture interpretation.

use quarterturn_core::{CubeState, Facelet, Layer};

use crate::camera::CameraFrame;

/// The outcome of interpreting a drag start: which layer to turn and which
/// way positive pointer travel reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DragTarget {
    /// The layer the gesture turns.
    pub layer: Layer,
    /// Whether positive travel along the dominant axis turns the layer
    /// clockwise.
    pub clockwise: bool,
}

/// Decides which layer a drag starting on `facelet` turns.
///
/// `horizontal` is the drag's dominant screen axis. The clicked surface is
/// classified by its camera-relative role; the clicked piece's membership in
/// the bordering layers then picks between the two outer layers and the
/// cutting slice. A face hidden behind the cube classifies with the bottom.
///
/// Picks on a slice view are not turnable surfaces and resolve to `None`.
pub fn resolve_drag(
    state: &CubeState,
    frame: &CameraFrame,
    facelet: Facelet,
    horizontal: bool,
) -> Option<DragTarget> {
    if facelet.face.is_slice() {
        log::warn!("ignoring drag on slice view {}", facelet.face);
        return None;
    }
    let piece = state.face(facelet.face).grid()[facelet.slot];
    let on = |layer: Layer| state.face(layer).contains(piece);
    let in_top = on(Layer::Top);
    let in_bottom = on(Layer::Bottom);
    let in_front = on(frame.front);
    let in_back = on(frame.back);
    let in_left = on(frame.left);
    let in_right = on(frame.right);

    // A horizontal drag on any band face reads the same: top layer, bottom
    // layer, or the equator between them.
    let band_horizontal = if in_top {
        (Layer::Top, false)
    } else if in_bottom {
        (Layer::Bottom, true)
    } else {
        (Layer::CenterHorizontal, false)
    };

    let (layer, clockwise) = if facelet.face == Layer::Top {
        if horizontal {
            if in_back {
                (frame.back, false)
            } else if in_front {
                (frame.front, true)
            } else {
                (frame.sideways_slice, !frame.sideways_flipped)
            }
        } else if in_left {
            (frame.left, false)
        } else if in_right {
            (frame.right, true)
        } else {
            (frame.vertical_slice, !frame.vertical_flipped)
        }
    } else if facelet.face == frame.front {
        if horizontal {
            band_horizontal
        } else if in_left {
            (frame.left, false)
        } else if in_right {
            (frame.right, true)
        } else {
            (frame.vertical_slice, !frame.vertical_flipped)
        }
    } else if facelet.face == frame.left {
        if horizontal {
            band_horizontal
        } else if in_front {
            (frame.front, true)
        } else if in_back {
            (frame.back, false)
        } else {
            (frame.sideways_slice, !frame.sideways_flipped)
        }
    } else if facelet.face == frame.right {
        if horizontal {
            band_horizontal
        } else if in_front {
            (frame.front, false)
        } else if in_back {
            (frame.back, true)
        } else {
            (frame.sideways_slice, frame.sideways_flipped)
        }
    } else {
        // Bottom, or the band face currently facing away.
        if horizontal {
            if in_back {
                (frame.back, true)
            } else if in_front {
                (frame.front, false)
            } else {
                (frame.sideways_slice, frame.sideways_flipped)
            }
        } else if in_left {
            (frame.left, false)
        } else if in_right {
            (frame.right, true)
        } else {
            (frame.vertical_slice, !frame.vertical_flipped)
        }
    };
    Some(DragTarget { layer, clockwise })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarterturn_core::Slot;

    use super::*;

    fn resolve(frame: &CameraFrame, face: Layer, slot: Slot, horizontal: bool) -> DragTarget {
        let state = CubeState::new();
        let facelet = Facelet { face, slot };
        match resolve_drag(&state, frame, facelet, horizontal) {
            Some(target) => target,
            None => panic!("expected a drag target for {face} {slot}"),
        }
    }

    fn target(layer: Layer, clockwise: bool) -> DragTarget {
        DragTarget { layer, clockwise }
    }

    fn facing_front() -> CameraFrame {
        CameraFrame::resolve(0.0, 5.0)
    }

    #[test]
    fn test_front_face_horizontal_rows() {
        let frame = facing_front();
        assert_eq!(
            target(Layer::Top, false),
            resolve(&frame, Layer::Front, Slot::TopLeft, true),
        );
        assert_eq!(
            target(Layer::Bottom, true),
            resolve(&frame, Layer::Front, Slot::BottomRight, true),
        );
        assert_eq!(
            target(Layer::CenterHorizontal, false),
            resolve(&frame, Layer::Front, Slot::CenterLeft, true),
        );
    }

    #[test]
    fn test_front_face_vertical_columns() {
        let frame = facing_front();
        assert_eq!(
            target(Layer::Left, false),
            resolve(&frame, Layer::Front, Slot::TopLeft, false),
        );
        assert_eq!(
            target(Layer::Right, true),
            resolve(&frame, Layer::Front, Slot::CenterRight, false),
        );
        assert_eq!(
            target(Layer::CenterVertical, true),
            resolve(&frame, Layer::Front, Slot::TopCenter, false),
        );
    }

    #[test]
    fn test_top_face_picks() {
        let frame = facing_front();
        assert_eq!(
            target(Layer::Back, false),
            resolve(&frame, Layer::Top, Slot::TopLeft, true),
        );
        assert_eq!(
            target(Layer::Front, true),
            resolve(&frame, Layer::Top, Slot::BottomCenter, true),
        );
        assert_eq!(
            target(Layer::CenterSideways, true),
            resolve(&frame, Layer::Top, Slot::CenterLeft, true),
        );
        assert_eq!(
            target(Layer::Left, false),
            resolve(&frame, Layer::Top, Slot::CenterLeft, false),
        );
        assert_eq!(
            target(Layer::CenterVertical, true),
            resolve(&frame, Layer::Top, Slot::BottomCenter, false),
        );
    }

    #[test]
    fn test_bottom_face_reverses_the_sideways_read() {
        let frame = facing_front();
        assert_eq!(
            target(Layer::Front, false),
            resolve(&frame, Layer::Bottom, Slot::TopCenter, true),
        );
        assert_eq!(
            target(Layer::CenterSideways, false),
            resolve(&frame, Layer::Bottom, Slot::CenterRight, true),
        );
    }

    #[test]
    fn test_rotated_camera_keeps_gesture_meaning() {
        // Camera on the +x side: green plays the front role.
        let frame = CameraFrame::resolve(5.0, 0.0);
        assert_eq!(Layer::Left, frame.front);
        assert_eq!(
            target(Layer::Top, false),
            resolve(&frame, Layer::Left, Slot::TopCenter, true),
        );
        // The screen-vertical slice is now the sideways one, read unflipped.
        assert_eq!(
            target(Layer::CenterSideways, true),
            resolve(&frame, Layer::Left, Slot::TopCenter, false),
        );
        // The top face's middle row cuts along the now-sideways vertical
        // slice, read flipped.
        assert_eq!(
            target(Layer::CenterVertical, false),
            resolve(&frame, Layer::Top, Slot::Center, true),
        );
    }

    #[test]
    fn test_slice_views_are_not_draggable() {
        let state = CubeState::new();
        let frame = facing_front();
        let facelet = Facelet {
            face: Layer::CenterVertical,
            slot: Slot::Center,
        };
        assert_eq!(None, resolve_drag(&state, &frame, facelet, true));
    }
}
