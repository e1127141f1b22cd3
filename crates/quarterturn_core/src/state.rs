//! The cube engine: nine faces and the turn transition logic.

use crate::face::Face;
use crate::grid::{FaceGrid, Row, Slot};
use crate::layer::Layer;
use crate::piece::Piece;
use crate::rules::{self, Handoff};
use crate::turn::{Move, TurnMethod};

/// Full logical state of the cube: the six physical face grids, the three
/// derived slice views, and each face's continuous rotation angle.
///
/// All facelet mutation goes through [`CubeState::apply_turn`]; callers only
/// ever see `&Face`, which is what keeps a turn atomic and the slice views
/// consistent with the physical faces.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    /// Indexed by `Layer` discriminant.
    faces: [Face; 9],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Constructs the solved cube.
    pub fn new() -> Self {
        let faces = [
            Layer::Top,
            Layer::Front,
            Layer::Right,
            Layer::Back,
            Layer::Left,
            Layer::Bottom,
            Layer::CenterHorizontal,
            Layer::CenterVertical,
            Layer::CenterSideways,
        ]
        .map(|layer| Face::new(solved_grid(layer), layer.axis(), layer.origin()));
        Self { faces }
    }

    /// Read access to one face.
    pub fn face(&self, layer: Layer) -> &Face {
        &self.faces[layer as usize]
    }

    /// Whether every face grid matches the solved configuration.
    ///
    /// Transient rotation angles are ignored; a cube mid-animation over the
    /// solved permutation still counts as solved.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .zip(Self::new().faces.iter())
            .all(|(face, solved)| face.grid() == solved.grid())
    }

    /// Applies one discrete turn and recomputes the slice views.
    pub fn apply_turn(&mut self, mov: Move) {
        match mov.method {
            TurnMethod::Clockwise => self.quarter_turn_clockwise(mov.layer),
            TurnMethod::Counterclockwise => self.quarter_turn_counterclockwise(mov.layer),
            TurnMethod::HalfCircle => {
                self.quarter_turn_clockwise(mov.layer);
                self.quarter_turn_clockwise(mov.layer);
            }
        }
    }

    fn quarter_turn_clockwise(&mut self, layer: Layer) {
        self.faces[layer as usize].rotate_pieces_clockwise();
        let rule = rules::rule(layer);
        let mut carried = self.row_of(&rule.chain[3]);
        for entry in &rule.chain {
            carried = self.faces[entry.face as usize].replace_row(entry.row, carried, entry.flip);
        }
        self.refresh_slices();
    }

    fn quarter_turn_counterclockwise(&mut self, layer: Layer) {
        self.faces[layer as usize].rotate_pieces_counterclockwise();
        let rule = rules::rule(layer);
        // Walking the chain backwards undoes the clockwise walk exactly,
        // provided each step borrows its successor's flip flag.
        let mut carried = self.row_of(&rule.chain[0]);
        for i in (0..4).rev() {
            let entry = &rule.chain[i];
            let flip = rule.chain[(i + 1) % 4].flip;
            carried = self.faces[entry.face as usize].replace_row(entry.row, carried, flip);
        }
        self.refresh_slices();
    }

    fn row_of(&self, entry: &Handoff) -> [Piece; 3] {
        self.faces[entry.face as usize].row(entry.row)
    }

    /// Rebuilds the three slice views from the physical faces.
    ///
    /// The source rows and flip flags are fixed by the solved layout, so on
    /// a solved cube this is the identity. A slice's center slot is the
    /// core and is never reassigned.
    fn refresh_slices(&mut self) {
        let back_middle = self.face(Layer::Back).row(Row::CenterHorizontal);
        let front_middle = self.face(Layer::Front).row(Row::CenterHorizontal);
        let top_column = self.face(Layer::Top).row(Row::CenterVertical);
        let bottom_column = self.face(Layer::Bottom).row(Row::CenterVertical);
        let top_middle = self.face(Layer::Top).row(Row::CenterHorizontal);
        let bottom_middle = self.face(Layer::Bottom).row(Row::CenterHorizontal);
        let left_center = self.face(Layer::Left).grid()[Slot::Center];
        let right_center = self.face(Layer::Right).grid()[Slot::Center];
        let front_center = self.face(Layer::Front).grid()[Slot::Center];
        let back_center = self.face(Layer::Back).grid()[Slot::Center];

        let slice = &mut self.faces[Layer::CenterHorizontal as usize];
        slice.replace_row(Row::Top, back_middle, true);
        slice.replace_row(Row::Bottom, front_middle, false);
        slice.set_piece(Slot::CenterLeft, left_center);
        slice.set_piece(Slot::CenterRight, right_center);

        let slice = &mut self.faces[Layer::CenterVertical as usize];
        slice.replace_row(Row::Top, top_column, false);
        slice.replace_row(Row::Bottom, bottom_column, true);
        slice.set_piece(Slot::CenterLeft, back_center);
        slice.set_piece(Slot::CenterRight, front_center);

        let slice = &mut self.faces[Layer::CenterSideways as usize];
        slice.replace_row(Row::Top, top_middle, false);
        slice.replace_row(Row::Bottom, bottom_middle, false);
        slice.set_piece(Slot::CenterLeft, left_center);
        slice.set_piece(Slot::CenterRight, right_center);
    }

    /// Accumulates continuous rotation on one layer's face.
    pub fn rotate_layer(&mut self, layer: Layer, delta: f32) {
        self.faces[layer as usize].rotate_continuous(delta);
    }

    /// Runs one stabilization step on one layer's face.
    pub fn stabilize_layer(&mut self, layer: Layer, max_velocity: f32) {
        self.faces[layer as usize].stabilize_step(max_velocity);
    }

    /// Whether `layer`'s angle is an exact multiple of 90°.
    pub fn is_layer_quantized(&self, layer: Layer) -> bool {
        self.face(layer).is_quantized()
    }

    /// Buckets `layer`'s accumulated angle into a discrete method.
    pub fn quantized_method(&self, layer: Layer) -> Option<TurnMethod> {
        self.face(layer).quantize_method()
    }

    /// Clears `layer`'s angle after a commit. Panics if the angle is not
    /// quantized.
    pub fn clear_layer_angle(&mut self, layer: Layer) {
        self.faces[layer as usize].clear_angle();
    }
}

/// The solved-state grid for each face, as the cube comes out of the box:
/// white up, red front, blue right.
fn solved_grid(layer: Layer) -> FaceGrid {
    use Piece::*;
    match layer {
        Layer::Top => FaceGrid::new([
            CornerWhiteOrangeGreen, EdgeWhiteOrange, CornerWhiteBlueOrange,
            EdgeWhiteGreen,         CenterWhite,     EdgeWhiteBlue,
            CornerWhiteGreenRed,    EdgeWhiteRed,    CornerWhiteRedBlue,
        ]),
        Layer::Front => FaceGrid::new([
            CornerWhiteGreenRed,  EdgeWhiteRed,  CornerWhiteRedBlue,
            EdgeGreenRed,         CenterRed,     EdgeRedBlue,
            CornerYellowGreenRed, EdgeYellowRed, CornerYellowRedBlue,
        ]),
        Layer::Right => FaceGrid::new([
            CornerWhiteRedBlue,  EdgeWhiteBlue,  CornerWhiteBlueOrange,
            EdgeRedBlue,         CenterBlue,     EdgeBlueOrange,
            CornerYellowRedBlue, EdgeYellowBlue, CornerYellowBlueOrange,
        ]),
        Layer::Back => FaceGrid::new([
            CornerWhiteBlueOrange,  EdgeWhiteOrange,  CornerWhiteOrangeGreen,
            EdgeBlueOrange,         CenterOrange,     EdgeOrangeGreen,
            CornerYellowBlueOrange, EdgeYellowOrange, CornerYellowOrangeGreen,
        ]),
        Layer::Left => FaceGrid::new([
            CornerWhiteOrangeGreen,  EdgeWhiteGreen,  CornerWhiteGreenRed,
            EdgeOrangeGreen,         CenterGreen,     EdgeGreenRed,
            CornerYellowOrangeGreen, EdgeYellowGreen, CornerYellowGreenRed,
        ]),
        Layer::Bottom => FaceGrid::new([
            CornerYellowGreenRed,    EdgeYellowRed,    CornerYellowRedBlue,
            EdgeYellowGreen,         CenterYellow,     EdgeYellowBlue,
            CornerYellowOrangeGreen, EdgeYellowOrange, CornerYellowBlueOrange,
        ]),
        Layer::CenterHorizontal => FaceGrid::new([
            EdgeOrangeGreen, CenterOrange, EdgeBlueOrange,
            CenterGreen,     Core,         CenterBlue,
            EdgeGreenRed,    CenterRed,    EdgeRedBlue,
        ]),
        Layer::CenterVertical => FaceGrid::new([
            EdgeWhiteOrange,  CenterWhite,  EdgeWhiteRed,
            CenterOrange,     Core,         CenterRed,
            EdgeYellowOrange, CenterYellow, EdgeYellowRed,
        ]),
        Layer::CenterSideways => FaceGrid::new([
            EdgeWhiteGreen,  CenterWhite,  EdgeWhiteBlue,
            CenterGreen,     Core,         CenterBlue,
            EdgeYellowGreen, CenterYellow, EdgeYellowBlue,
        ]),
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use strum::VariantArray;

    use super::*;
    use crate::piece::Piece::*;

    fn turned(moves: &[(Layer, TurnMethod)]) -> CubeState {
        let mut state = CubeState::new();
        for &(layer, method) in moves {
            state.apply_turn(Move { layer, method });
        }
        state
    }

    #[test]
    fn test_solved_construction_is_internally_consistent() {
        // Rebuilding the slice views from the physical faces must be the
        // identity on the solved cube.
        let solved = CubeState::new();
        let mut refreshed = solved.clone();
        refreshed.refresh_slices();
        assert_eq!(solved, refreshed);
    }

    #[test]
    fn test_four_quarter_turns_are_the_identity() {
        for &layer in Layer::VARIANTS {
            let state = turned(&[(layer, TurnMethod::Clockwise); 4]);
            assert_eq!(CubeState::new(), state, "turning {layer}");
        }
    }

    #[test]
    fn test_counterclockwise_inverts_clockwise() {
        for &layer in Layer::VARIANTS {
            let state = turned(&[
                (layer, TurnMethod::Clockwise),
                (layer, TurnMethod::Counterclockwise),
            ]);
            assert_eq!(CubeState::new(), state, "turning {layer}");
            let state = turned(&[
                (layer, TurnMethod::Counterclockwise),
                (layer, TurnMethod::Clockwise),
            ]);
            assert_eq!(CubeState::new(), state, "turning {layer}");
        }
    }

    #[test]
    fn test_half_circle_is_two_quarter_turns() {
        for &layer in Layer::VARIANTS {
            let half = turned(&[(layer, TurnMethod::HalfCircle)]);
            let two_quarters = turned(&[(layer, TurnMethod::Clockwise); 2]);
            assert_eq!(two_quarters, half, "turning {layer}");
        }
    }

    #[test]
    fn test_piece_conservation_across_physical_faces() {
        let state = turned(&[
            (Layer::Top, TurnMethod::Clockwise),
            (Layer::Front, TurnMethod::Counterclockwise),
            (Layer::CenterHorizontal, TurnMethod::HalfCircle),
            (Layer::Right, TurnMethod::Clockwise),
            (Layer::CenterVertical, TurnMethod::Counterclockwise),
            (Layer::Back, TurnMethod::HalfCircle),
            (Layer::Left, TurnMethod::Clockwise),
            (Layer::Bottom, TurnMethod::Counterclockwise),
            (Layer::CenterSideways, TurnMethod::Clockwise),
        ]);
        let census = Layer::VARIANTS
            .iter()
            .filter(|layer| !layer.is_slice())
            .flat_map(|&layer| state.face(layer).pieces())
            .counts();
        for &piece in Piece::VARIANTS {
            let expected = piece.kind().sticker_count();
            let actual = census.get(&piece).copied().unwrap_or(0);
            assert_eq!(expected, actual, "occurrences of {piece}");
        }
    }

    #[test]
    fn test_reversed_inverse_sequence_restores_solved() {
        let sequence = [
            (Layer::Front, TurnMethod::Clockwise),
            (Layer::Top, TurnMethod::HalfCircle),
            (Layer::CenterSideways, TurnMethod::Counterclockwise),
            (Layer::Bottom, TurnMethod::Clockwise),
            (Layer::Left, TurnMethod::Counterclockwise),
        ];
        let mut state = turned(&sequence);
        assert!(!state.is_solved());
        for &(layer, method) in sequence.iter().rev() {
            state.apply_turn(Move {
                layer,
                method: method.inverse(),
            });
        }
        assert!(state.is_solved());
    }

    #[test]
    fn test_top_turn_hands_rows_around_the_band() {
        let state = turned(&[(Layer::Top, TurnMethod::Clockwise)]);

        // Each band face's top row arrives from its clockwise predecessor in
        // the chain; white itself rotates in place.
        assert_eq!(
            [CornerWhiteRedBlue, EdgeWhiteBlue, CornerWhiteBlueOrange],
            state.face(Layer::Front).row(Row::Top),
        );
        assert_eq!(
            [CornerWhiteGreenRed, EdgeWhiteRed, CornerWhiteRedBlue],
            state.face(Layer::Left).row(Row::Top),
        );
        assert_eq!(
            [CornerWhiteOrangeGreen, EdgeWhiteGreen, CornerWhiteGreenRed],
            state.face(Layer::Back).row(Row::Top),
        );
        assert_eq!(
            [CornerWhiteBlueOrange, EdgeWhiteOrange, CornerWhiteOrangeGreen],
            state.face(Layer::Right).row(Row::Top),
        );
        assert_eq!(
            &FaceGrid::new([
                CornerWhiteGreenRed, EdgeWhiteGreen, CornerWhiteOrangeGreen,
                EdgeWhiteRed,        CenterWhite,    EdgeWhiteOrange,
                CornerWhiteRedBlue,  EdgeWhiteBlue,  CornerWhiteBlueOrange,
            ]),
            state.face(Layer::Top).grid(),
        );

        // Everything below the top band is untouched.
        let solved = CubeState::new();
        for layer in [Layer::Front, Layer::Right, Layer::Back, Layer::Left] {
            assert_eq!(
                solved.face(layer).row(Row::Bottom),
                state.face(layer).row(Row::Bottom),
            );
            assert_eq!(
                solved.face(layer).row(Row::CenterHorizontal),
                state.face(layer).row(Row::CenterHorizontal),
            );
        }
        assert_eq!(solved.face(Layer::Bottom), state.face(Layer::Bottom));

        // The inverse restores solved exactly.
        let mut state = state;
        state.apply_turn(Move {
            layer: Layer::Top,
            method: TurnMethod::Counterclockwise,
        });
        assert_eq!(CubeState::new(), state);
    }

    #[test]
    fn test_top_turn_updates_the_slice_views() {
        let state = turned(&[(Layer::Top, TurnMethod::Clockwise)]);
        // The slice views' top rows mirror white's middle column and middle
        // row, which the turn just rotated.
        assert_eq!(
            [EdgeWhiteGreen, CenterWhite, EdgeWhiteBlue],
            state.face(Layer::CenterVertical).row(Row::Top),
        );
        assert_eq!(
            [EdgeWhiteRed, CenterWhite, EdgeWhiteOrange],
            state.face(Layer::CenterSideways).row(Row::Top),
        );
    }

    #[test]
    fn test_slice_views_always_hold_the_core() {
        let state = turned(&[
            (Layer::CenterVertical, TurnMethod::Clockwise),
            (Layer::Top, TurnMethod::HalfCircle),
            (Layer::CenterSideways, TurnMethod::Counterclockwise),
        ]);
        for layer in [
            Layer::CenterHorizontal,
            Layer::CenterVertical,
            Layer::CenterSideways,
        ] {
            assert_eq!(Core, state.face(layer).grid()[Slot::Center]);
        }
    }

    #[test]
    fn test_vertical_slice_turn_cycles_the_middle_columns() {
        // Content flows front → top → back → bottom → front, with the order
        // reversing on the hand-offs into back and bottom.
        let state = turned(&[(Layer::CenterVertical, TurnMethod::Clockwise)]);
        assert_eq!(
            [EdgeWhiteRed, CenterRed, EdgeYellowRed],
            state.face(Layer::Top).row(Row::CenterVertical),
        );
        assert_eq!(
            [EdgeWhiteRed, CenterWhite, EdgeWhiteOrange],
            state.face(Layer::Back).row(Row::CenterVertical),
        );
        assert_eq!(
            [EdgeYellowOrange, CenterOrange, EdgeWhiteOrange],
            state.face(Layer::Bottom).row(Row::CenterVertical),
        );
        assert_eq!(
            [EdgeYellowRed, CenterYellow, EdgeYellowOrange],
            state.face(Layer::Front).row(Row::CenterVertical),
        );
    }

    #[test]
    fn test_is_solved_ignores_transient_angles() {
        let mut state = CubeState::new();
        state.rotate_layer(Layer::Top, 30.0);
        assert!(state.is_solved());
        state.stabilize_layer(Layer::Top, 45.0);
        assert!(state.is_layer_quantized(Layer::Top));
        assert!(state.is_solved());
    }
}
