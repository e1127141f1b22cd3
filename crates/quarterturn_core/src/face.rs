//! A face: one facelet grid plus its continuous rotation state.

use cgmath::Vector3;

use crate::grid::{FaceGrid, Row, Slot};
use crate::piece::Piece;
use crate::turn::TurnMethod;

/// One addressable face of the cube: a 3×3 piece grid, an accumulated
/// continuous rotation angle, and the fixed axis/origin the face turns
/// around.
///
/// The angle is purely presentational until it is quantized and committed;
/// the grid only ever changes through discrete row and quarter-turn
/// operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    grid: FaceGrid,
    /// Accumulated rotation in degrees. Zero whenever no turn is in flight.
    angle: f32,
    axis: Vector3<f32>,
    origin: Vector3<f32>,
}

impl Face {
    /// Constructs a face at rest with the given grid and geometry.
    pub fn new(grid: FaceGrid, axis: Vector3<f32>, origin: Vector3<f32>) -> Self {
        Self {
            grid,
            angle: 0.0,
            axis,
            origin,
        }
    }

    /// Read access to the face's grid.
    pub fn grid(&self) -> &FaceGrid {
        &self.grid
    }

    /// The pieces of `row`, in slot order.
    pub fn row(&self, row: Row) -> [Piece; 3] {
        self.grid.row(row)
    }

    /// Overwrites `row`, returning its previous contents. See
    /// [`FaceGrid::replace_row`].
    pub fn replace_row(&mut self, row: Row, pieces: [Piece; 3], reversed: bool) -> [Piece; 3] {
        self.grid.replace_row(row, pieces, reversed)
    }

    /// Overwrites a single slot.
    pub fn set_piece(&mut self, slot: Slot, piece: Piece) {
        self.grid[slot] = piece;
    }

    /// Whether this face currently holds `piece` in any slot.
    pub fn contains(&self, piece: Piece) -> bool {
        self.grid.contains(piece)
    }

    /// Iterates over the face's nine pieces in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.pieces()
    }

    /// The axis this face turns around.
    pub fn axis(&self) -> Vector3<f32> {
        self.axis
    }

    /// The point this face turns around.
    pub fn origin(&self) -> Vector3<f32> {
        self.origin
    }

    /// Permutes the grid for one clockwise quarter turn of this face:
    /// corners cycle TL→TR→BR→BL and edges cycle TC→CR→BC→CL.
    pub fn rotate_pieces_clockwise(&mut self) {
        let grid = &mut self.grid;
        let corner = grid[Slot::TopLeft];
        grid[Slot::TopLeft] = grid[Slot::BottomLeft];
        grid[Slot::BottomLeft] = grid[Slot::BottomRight];
        grid[Slot::BottomRight] = grid[Slot::TopRight];
        grid[Slot::TopRight] = corner;

        let edge = grid[Slot::TopCenter];
        grid[Slot::TopCenter] = grid[Slot::CenterLeft];
        grid[Slot::CenterLeft] = grid[Slot::BottomCenter];
        grid[Slot::BottomCenter] = grid[Slot::CenterRight];
        grid[Slot::CenterRight] = edge;
    }

    /// Exact inverse of [`Face::rotate_pieces_clockwise`].
    pub fn rotate_pieces_counterclockwise(&mut self) {
        let grid = &mut self.grid;
        let corner = grid[Slot::TopLeft];
        grid[Slot::TopLeft] = grid[Slot::TopRight];
        grid[Slot::TopRight] = grid[Slot::BottomRight];
        grid[Slot::BottomRight] = grid[Slot::BottomLeft];
        grid[Slot::BottomLeft] = corner;

        let edge = grid[Slot::TopCenter];
        grid[Slot::TopCenter] = grid[Slot::CenterRight];
        grid[Slot::CenterRight] = grid[Slot::BottomCenter];
        grid[Slot::BottomCenter] = grid[Slot::CenterLeft];
        grid[Slot::CenterLeft] = edge;
    }

    /// The accumulated continuous angle, in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Accumulates `delta` degrees of continuous rotation.
    pub fn rotate_continuous(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// Whether the accumulated angle is an exact multiple of 90°.
    pub fn is_quantized(&self) -> bool {
        self.angle % 90.0 == 0.0
    }

    /// Buckets the accumulated angle into a discrete turn method.
    ///
    /// The angle is normalized into [0°, 360°); [45°, 135°) reads as
    /// clockwise, [135°, 225°) as a half circle, [225°, 315°) as
    /// counter-clockwise, and the rest as no turn.
    pub fn quantize_method(&self) -> Option<TurnMethod> {
        let angle = self.angle.rem_euclid(360.0);
        if (45.0..135.0).contains(&angle) {
            Some(TurnMethod::Clockwise)
        } else if (135.0..225.0).contains(&angle) {
            Some(TurnMethod::HalfCircle)
        } else if (225.0..315.0).contains(&angle) {
            Some(TurnMethod::Counterclockwise)
        } else {
            None
        }
    }

    /// Moves the angle one step toward the nearest multiple of 90°.
    ///
    /// The signed distance to the nearest multiple lies in (−45°, 45°]; if
    /// its magnitude is within `max_velocity` the angle snaps exactly onto
    /// the multiple, otherwise it moves by `max_velocity`.
    pub fn stabilize_step(&mut self, max_velocity: f32) {
        debug_assert!(max_velocity > 0.0, "stabilize velocity must be positive");
        if self.is_quantized() {
            return;
        }
        let mut distance = self.angle.rem_euclid(90.0);
        if distance > 45.0 {
            distance -= 90.0;
        }
        if distance.abs() <= max_velocity {
            // `angle - distance` is float-exact here, so `is_quantized`
            // holds afterwards.
            self.angle -= distance;
        } else {
            self.angle -= distance.signum() * max_velocity;
        }
    }

    /// Resets the angle to zero after a committed turn.
    ///
    /// # Panics
    ///
    /// Panics if the angle is not quantized; clearing an unsettled angle
    /// would silently discard part of a turn.
    pub fn clear_angle(&mut self) {
        assert!(
            self.is_quantized(),
            "cleared a rotation angle of {}°, which is not a multiple of 90°",
            self.angle,
        );
        self.angle = 0.0;
    }
}
