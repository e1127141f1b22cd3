//! Facelet-level model of the 3×3×3 cube and its turn transition engine.
//!
//! The cube is represented as nine addressable [`Face`]s: the six physical
//! faces plus three derived center-slice views. Discrete turns rewrite rows
//! between adjacent faces according to a fixed [rule table](crate::rules);
//! continuous per-layer rotation angles accumulate separately and only touch
//! the grids once quantized and committed.

mod face;
mod grid;
mod layer;
mod piece;
pub mod rules;
mod state;
mod turn;

pub use crate::face::Face;
pub use crate::grid::{FaceGrid, Facelet, Row, Slot};
pub use crate::layer::Layer;
pub use crate::piece::{Piece, PieceKind};
pub use crate::state::CubeState;
pub use crate::turn::{Move, TurnMethod};
