//! Camera-relative reading of the cube.

use quarterturn_core::Layer;

/// Which physical face currently plays each on-screen role, and how the two
/// non-horizontal slices read from the camera's side.
///
/// The cube never reorients; only the camera moves around it. A drag on "the
/// face toward the camera" must resolve to whichever physical face that is
/// right now, so all drag interpretation goes through this frame. Top and
/// Bottom keep their roles from every camera position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CameraFrame {
    /// The physical face toward the camera.
    pub front: Layer,
    /// The physical face on the camera's right.
    pub right: Layer,
    /// The physical face away from the camera.
    pub back: Layer,
    /// The physical face on the camera's left.
    pub left: Layer,
    /// The slice that runs top-to-bottom across the frame's front face.
    pub vertical_slice: Layer,
    /// The slice that runs top-to-bottom across the frame's side faces.
    pub sideways_slice: Layer,
    /// Whether `vertical_slice` turns read reversed from this side.
    pub vertical_flipped: bool,
    /// Whether `sideways_slice` turns read reversed from this side.
    pub sideways_flipped: bool,
}

impl CameraFrame {
    /// Resolves the frame from the camera's position on the horizontal
    /// plane, by quadrant around the cube.
    ///
    /// On the diagonals the side quadrants win, and a camera at the origin
    /// resolves as if looking at the blue face.
    pub fn resolve(camera_x: f32, camera_z: f32) -> Self {
        if camera_z > 0.0 && camera_z.abs() > camera_x.abs() {
            Self {
                front: Layer::Front,
                right: Layer::Right,
                back: Layer::Back,
                left: Layer::Left,
                vertical_slice: Layer::CenterVertical,
                sideways_slice: Layer::CenterSideways,
                vertical_flipped: false,
                sideways_flipped: false,
            }
        } else if camera_z < 0.0 && camera_z.abs() > camera_x.abs() {
            Self {
                front: Layer::Back,
                right: Layer::Left,
                back: Layer::Front,
                left: Layer::Right,
                vertical_slice: Layer::CenterVertical,
                sideways_slice: Layer::CenterSideways,
                vertical_flipped: true,
                sideways_flipped: true,
            }
        } else if camera_x > 0.0 {
            Self {
                front: Layer::Left,
                right: Layer::Front,
                back: Layer::Right,
                left: Layer::Back,
                vertical_slice: Layer::CenterSideways,
                sideways_slice: Layer::CenterVertical,
                vertical_flipped: false,
                sideways_flipped: true,
            }
        } else {
            Self {
                front: Layer::Right,
                right: Layer::Back,
                back: Layer::Left,
                left: Layer::Front,
                vertical_slice: Layer::CenterSideways,
                sideways_slice: Layer::CenterVertical,
                vertical_flipped: true,
                sideways_flipped: false,
            }
        }
    }
}
