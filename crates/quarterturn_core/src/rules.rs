//! The rotation rule table: which rows hand off to which during a turn.
//!
//! Every layer's quarter turn is described by an ordered chain of four
//! (face, row, flip) entries. Turning the layer clockwise pushes each
//! chain entry's row contents into the next entry's row, wrapping from the
//! last entry to the first; the flip flag marks hand-offs where the two
//! rows' slot orders run opposite ways around the cube. The same chain,
//! walked backwards with each entry borrowing its successor's flip flag,
//! is the exact inverse and implements the counter-clockwise turn.
//!
//! Chains reference physical faces only; slice layers cut across the same
//! six faces and their views are recomputed afterwards. Each chain carries
//! an even number of flips, which is what makes four identical quarter
//! turns the identity.

use crate::Layer;
use crate::grid::Row;

/// One hand-off step of a rule chain: a row of a physical face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handoff {
    /// The face whose row takes part in the exchange.
    pub face: Layer,
    /// Which of the face's rows moves.
    pub row: Row,
    /// Whether incoming pieces arrive end-swapped at this step.
    pub flip: bool,
}

/// The full quarter-turn rule for one layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TurnRule {
    /// The four hand-off steps, in clockwise order.
    pub chain: [Handoff; 4],
}

/// Looks up the rule for `layer`.
pub fn rule(layer: Layer) -> &'static TurnRule {
    &RULES[layer as usize]
}

const fn step(face: Layer, row: Row, flip: bool) -> Handoff {
    Handoff { face, row, flip }
}

/// Indexed by `Layer` discriminant.
const RULES: [TurnRule; 9] = [
    // Top
    TurnRule {
        chain: [
            step(Layer::Front, Row::Top, false),
            step(Layer::Left, Row::Top, false),
            step(Layer::Back, Row::Top, false),
            step(Layer::Right, Row::Top, false),
        ],
    },
    // Front
    TurnRule {
        chain: [
            step(Layer::Top, Row::Bottom, true),
            step(Layer::Right, Row::Left, false),
            step(Layer::Bottom, Row::Top, true),
            step(Layer::Left, Row::Right, false),
        ],
    },
    // Right
    TurnRule {
        chain: [
            step(Layer::Top, Row::Right, false),
            step(Layer::Back, Row::Left, true),
            step(Layer::Bottom, Row::Right, true),
            step(Layer::Front, Row::Right, false),
        ],
    },
    // Back
    TurnRule {
        chain: [
            step(Layer::Top, Row::Top, false),
            step(Layer::Left, Row::Left, true),
            step(Layer::Bottom, Row::Bottom, false),
            step(Layer::Right, Row::Right, true),
        ],
    },
    // Left
    TurnRule {
        chain: [
            step(Layer::Top, Row::Left, true),
            step(Layer::Front, Row::Left, false),
            step(Layer::Bottom, Row::Left, false),
            step(Layer::Back, Row::Right, true),
        ],
    },
    // Bottom
    TurnRule {
        chain: [
            step(Layer::Front, Row::Bottom, false),
            step(Layer::Right, Row::Bottom, false),
            step(Layer::Back, Row::Bottom, false),
            step(Layer::Left, Row::Bottom, false),
        ],
    },
    // CenterHorizontal
    TurnRule {
        chain: [
            step(Layer::Back, Row::CenterHorizontal, false),
            step(Layer::Right, Row::CenterHorizontal, false),
            step(Layer::Front, Row::CenterHorizontal, false),
            step(Layer::Left, Row::CenterHorizontal, false),
        ],
    },
    // CenterVertical
    TurnRule {
        chain: [
            step(Layer::Top, Row::CenterVertical, false),
            step(Layer::Back, Row::CenterVertical, true),
            step(Layer::Bottom, Row::CenterVertical, true),
            step(Layer::Front, Row::CenterVertical, false),
        ],
    },
    // CenterSideways
    TurnRule {
        chain: [
            step(Layer::Top, Row::CenterHorizontal, true),
            step(Layer::Right, Row::CenterVertical, false),
            step(Layer::Bottom, Row::CenterHorizontal, true),
            step(Layer::Left, Row::CenterVertical, false),
        ],
    },
];

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_chains_reference_distinct_physical_faces() {
        for &layer in Layer::VARIANTS {
            let chain = rule(layer).chain;
            for entry in chain {
                assert!(!entry.face.is_slice(), "{layer} chain references {}", entry.face);
            }
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(chain[i].face, chain[j].face, "{layer} chain repeats a face");
                }
            }
        }
    }

    #[test]
    fn test_chains_have_even_flip_parity() {
        // An odd flip count would make four quarter turns reverse a row
        // instead of restoring it.
        for &layer in Layer::VARIANTS {
            let flips = rule(layer).chain.iter().filter(|entry| entry.flip).count();
            assert_eq!(0, flips % 2, "{layer} chain has {flips} flips");
        }
    }

    #[test]
    fn test_turning_layer_is_not_part_of_its_own_chain() {
        for &layer in Layer::VARIANTS {
            for entry in rule(layer).chain {
                assert_ne!(layer, entry.face);
            }
        }
    }
}
