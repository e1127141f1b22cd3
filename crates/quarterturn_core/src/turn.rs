//! Discrete turn methods and move records.

use std::fmt;

use strum::{Display, VariantArray};

use crate::Layer;

/// How far a layer turns in one discrete move.
///
/// A raw angle that quantizes to no turn at all is represented as the absence
/// of a method (`Option::None`), not as a variant here, so a recorded move is
/// always a real state change.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum TurnMethod {
    /// Quarter turn clockwise, as seen from outside the layer's face.
    Clockwise,
    /// Quarter turn counter-clockwise.
    Counterclockwise,
    /// Half turn; its own inverse.
    HalfCircle,
}

impl TurnMethod {
    /// The method that exactly undoes this one.
    pub fn inverse(self) -> TurnMethod {
        match self {
            TurnMethod::Clockwise => TurnMethod::Counterclockwise,
            TurnMethod::Counterclockwise => TurnMethod::Clockwise,
            TurnMethod::HalfCircle => TurnMethod::HalfCircle,
        }
    }

    /// The signed continuous angle this method stands for, in degrees.
    pub fn degrees(self) -> f32 {
        match self {
            TurnMethod::Clockwise => 90.0,
            TurnMethod::Counterclockwise => -90.0,
            TurnMethod::HalfCircle => 180.0,
        }
    }
}

/// One committed turn: a layer and how far it turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// The layer that turned.
    pub layer: Layer,
    /// How far it turned.
    pub method: TurnMethod,
}

impl Move {
    /// The move that exactly undoes this one.
    pub fn inverse(self) -> Move {
        Move {
            layer: self.layer,
            method: self.method.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.layer, self.method)
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_inverse_is_an_involution() {
        for &method in TurnMethod::VARIANTS {
            assert_eq!(method, method.inverse().inverse());
        }
        assert_eq!(TurnMethod::HalfCircle, TurnMethod::HalfCircle.inverse());
    }

    #[test]
    fn test_method_degrees() {
        assert_eq!(90.0, TurnMethod::Clockwise.degrees());
        assert_eq!(-90.0, TurnMethod::Counterclockwise.degrees());
        assert_eq!(180.0, TurnMethod::HalfCircle.degrees());
        for &method in TurnMethod::VARIANTS {
            let net = method.degrees() + method.inverse().degrees();
            assert_eq!(0.0, net.rem_euclid(360.0));
        }
    }

    #[test]
    fn test_move_display() {
        let mov = Move {
            layer: Layer::Top,
            method: TurnMethod::Clockwise,
        };
        assert_eq!("Top Clockwise", mov.to_string());
    }
}
