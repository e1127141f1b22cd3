//! Identity of the 26 cubelets and the hidden core.

use strum::{Display, VariantArray};

/// One cubelet of the 3×3×3 cube, named by its sticker colors in the solved
/// state, plus the unstickered core at the very center.
///
/// A piece is an opaque token: it never changes identity, only the slot it
/// occupies in each face grid. Color convention: white is up, red is front,
/// blue is right, orange is back, green is left, yellow is down.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
pub enum Piece {
    /// UBL corner.
    CornerWhiteOrangeGreen,
    /// URB corner.
    CornerWhiteBlueOrange,
    /// ULF corner.
    CornerWhiteGreenRed,
    /// UFR corner.
    CornerWhiteRedBlue,
    /// DBL corner.
    CornerYellowOrangeGreen,
    /// DRB corner.
    CornerYellowBlueOrange,
    /// DLF corner.
    CornerYellowGreenRed,
    /// DFR corner.
    CornerYellowRedBlue,

    /// UB edge.
    EdgeWhiteOrange,
    /// UR edge.
    EdgeWhiteBlue,
    /// UF edge.
    EdgeWhiteRed,
    /// UL edge.
    EdgeWhiteGreen,
    /// RB edge.
    EdgeBlueOrange,
    /// BL edge.
    EdgeOrangeGreen,
    /// LF edge.
    EdgeGreenRed,
    /// FR edge.
    EdgeRedBlue,
    /// DB edge.
    EdgeYellowOrange,
    /// DR edge.
    EdgeYellowBlue,
    /// DF edge.
    EdgeYellowRed,
    /// DL edge.
    EdgeYellowGreen,

    /// Up center.
    CenterWhite,
    /// Front center.
    CenterRed,
    /// Right center.
    CenterBlue,
    /// Back center.
    CenterOrange,
    /// Left center.
    CenterGreen,
    /// Down center.
    CenterYellow,

    /// Innermost piece; visible on no physical face.
    Core,
}

impl Piece {
    /// Returns which kind of cubelet this is.
    pub fn kind(self) -> PieceKind {
        use Piece::*;
        match self {
            CornerWhiteOrangeGreen | CornerWhiteBlueOrange | CornerWhiteGreenRed
            | CornerWhiteRedBlue | CornerYellowOrangeGreen | CornerYellowBlueOrange
            | CornerYellowGreenRed | CornerYellowRedBlue => PieceKind::Corner,

            EdgeWhiteOrange | EdgeWhiteBlue | EdgeWhiteRed | EdgeWhiteGreen | EdgeBlueOrange
            | EdgeOrangeGreen | EdgeGreenRed | EdgeRedBlue | EdgeYellowOrange | EdgeYellowBlue
            | EdgeYellowRed | EdgeYellowGreen => PieceKind::Edge,

            CenterWhite | CenterRed | CenterBlue | CenterOrange | CenterGreen | CenterYellow => {
                PieceKind::Center
            }

            Core => PieceKind::Core,
        }
    }
}

/// Kind of cubelet, which determines how many physical faces show it.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum PieceKind {
    /// Three stickers.
    Corner,
    /// Two stickers.
    Edge,
    /// One sticker.
    Center,
    /// No stickers.
    Core,
}

impl PieceKind {
    /// Number of physical face grids that contain a piece of this kind at
    /// any time.
    pub fn sticker_count(self) -> usize {
        match self {
            PieceKind::Corner => 3,
            PieceKind::Edge => 2,
            PieceKind::Center => 1,
            PieceKind::Core => 0,
        }
    }
}
