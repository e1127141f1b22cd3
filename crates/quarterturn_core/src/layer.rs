//! The nine turnable layers of the cube.

use cgmath::Vector3;
use strum::{Display, VariantArray};

/// A turnable layer: one of the six physical faces or one of the three
/// center slices.
///
/// Layer identifiers are deliberately distinct from [`crate::Slot`]: a layer
/// names a set of nine pieces on the whole cube, a slot names a position
/// inside one face grid.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum Layer {
    /// The white face (up).
    Top,
    /// The red face.
    Front,
    /// The blue face.
    Right,
    /// The orange face.
    Back,
    /// The green face.
    Left,
    /// The yellow face (down).
    Bottom,
    /// The center slice between top and bottom.
    CenterHorizontal,
    /// The center slice between left and right.
    CenterVertical,
    /// The center slice between front and back.
    CenterSideways,
}

impl Layer {
    /// Whether this layer is a derived center slice rather than a physical
    /// face.
    pub fn is_slice(self) -> bool {
        matches!(
            self,
            Layer::CenterHorizontal | Layer::CenterVertical | Layer::CenterSideways,
        )
    }

    /// The axis this layer turns around, as a unit vector in cube space
    /// (right-handed, Y up, Z toward the default camera).
    ///
    /// Positive continuous angles turn clockwise as seen looking at the
    /// layer from outside along the axis.
    pub fn axis(self) -> Vector3<f32> {
        match self {
            Layer::Top | Layer::CenterHorizontal => Vector3::new(0.0, 1.0, 0.0),
            Layer::Front | Layer::CenterSideways => Vector3::new(0.0, 0.0, 1.0),
            Layer::Right | Layer::CenterVertical => Vector3::new(-1.0, 0.0, 0.0),
            Layer::Back => Vector3::new(0.0, 0.0, -1.0),
            Layer::Left => Vector3::new(1.0, 0.0, 0.0),
            Layer::Bottom => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    /// The point the layer turns around, in cube units (one unit per piece).
    ///
    /// Physical faces turn around their center piece; slices turn around the
    /// core.
    pub fn origin(self) -> Vector3<f32> {
        match self {
            Layer::Top => Vector3::new(0.0, 1.0, 0.0),
            Layer::Front => Vector3::new(0.0, 0.0, 1.0),
            Layer::Right => Vector3::new(-1.0, 0.0, 0.0),
            Layer::Back => Vector3::new(0.0, 0.0, -1.0),
            Layer::Left => Vector3::new(1.0, 0.0, 0.0),
            Layer::Bottom => Vector3::new(0.0, -1.0, 0.0),
            Layer::CenterHorizontal | Layer::CenterVertical | Layer::CenterSideways => {
                Vector3::new(0.0, 0.0, 0.0)
            }
        }
    }
}
