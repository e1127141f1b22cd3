//! 3×3 facelet grids and the slot/row addressing scheme.

use std::ops::{Index, IndexMut};

use strum::{Display, VariantArray};

use crate::Layer;
use crate::piece::Piece;

/// One of the nine positions in a face grid.
///
/// Slots read left to right, top to bottom, as seen looking straight at the
/// face from outside the cube.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum Slot {
    /// Top-left position.
    TopLeft,
    /// Top-center position.
    TopCenter,
    /// Top-right position.
    TopRight,
    /// Center-left position.
    CenterLeft,
    /// Center position.
    Center,
    /// Center-right position.
    CenterRight,
    /// Bottom-left position.
    BottomLeft,
    /// Bottom-center position.
    BottomCenter,
    /// Bottom-right position.
    BottomRight,
}

/// One of the six extractable rows of a face grid.
///
/// "Row" here covers both horizontal and vertical triples; a triple is always
/// listed in slot order (left to right, or top to bottom).
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum Row {
    /// The top three slots.
    Top,
    /// The left column.
    Left,
    /// The right column.
    Right,
    /// The bottom three slots.
    Bottom,
    /// The middle horizontal triple.
    CenterHorizontal,
    /// The middle vertical triple.
    CenterVertical,
}

impl Row {
    /// The three slots making up this row, in slot order.
    pub fn slots(self) -> [Slot; 3] {
        match self {
            Row::Top => [Slot::TopLeft, Slot::TopCenter, Slot::TopRight],
            Row::Left => [Slot::TopLeft, Slot::CenterLeft, Slot::BottomLeft],
            Row::Right => [Slot::TopRight, Slot::CenterRight, Slot::BottomRight],
            Row::Bottom => [Slot::BottomLeft, Slot::BottomCenter, Slot::BottomRight],
            Row::CenterHorizontal => [Slot::CenterLeft, Slot::Center, Slot::CenterRight],
            Row::CenterVertical => [Slot::TopCenter, Slot::Center, Slot::BottomCenter],
        }
    }
}

/// A 3×3 mapping from slot to piece.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid([Piece; 9]);

impl FaceGrid {
    /// Constructs a grid from pieces listed in slot order.
    pub fn new(pieces: [Piece; 9]) -> Self {
        Self(pieces)
    }

    /// Returns the pieces of `row`, in slot order.
    pub fn row(&self, row: Row) -> [Piece; 3] {
        row.slots().map(|slot| self[slot])
    }

    /// Overwrites `row` with `pieces` and returns the row's previous
    /// contents.
    ///
    /// If `reversed` is set, the first and last incoming pieces swap before
    /// writing; this reconciles rows whose slot order runs opposite ways on
    /// adjacent faces. The returned triple is never reversed.
    pub fn replace_row(&mut self, row: Row, mut pieces: [Piece; 3], reversed: bool) -> [Piece; 3] {
        if reversed {
            pieces.swap(0, 2);
        }
        let old = self.row(row);
        for (slot, piece) in std::iter::zip(row.slots(), pieces) {
            self[slot] = piece;
        }
        old
    }

    /// Whether any slot holds `piece`.
    pub fn contains(&self, piece: Piece) -> bool {
        self.0.contains(&piece)
    }

    /// Iterates over all nine pieces in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.0.iter().copied()
    }
}

impl Index<Slot> for FaceGrid {
    type Output = Piece;

    fn index(&self, slot: Slot) -> &Piece {
        &self.0[slot as usize]
    }
}
impl IndexMut<Slot> for FaceGrid {
    fn index_mut(&mut self, slot: Slot) -> &mut Piece {
        &mut self.0[slot as usize]
    }
}

/// One sticker position on the cube, addressed as a face and a slot within
/// that face's grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    /// Which face's grid the sticker belongs to.
    pub face: Layer,
    /// The position within that grid.
    pub slot: Slot,
}
