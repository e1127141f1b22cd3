//! Interactive turn controller for the cube, to keep drag handling, turn
//! animation, and history behavior consistent across frontends.
//!
//! The frontend owns rendering, the camera, and hit testing. Once per tick
//! it hands [`CubeSimulation::step`] a [`FrameInput`] snapshot and applies
//! the returned [`PieceRotation`]s; everything else (drag thresholds, layer
//! resolution, settling, committing, undo/redo, scrambling) happens here.

mod camera;
mod drag;
mod input;
mod jobs;
mod prefs;
mod simulation;

pub use camera::CameraFrame;
pub use drag::{DragTarget, resolve_drag};
pub use input::FrameInput;
pub use prefs::TurnPreferences;
pub use simulation::{
    CubeSimulation, EnginePhase, HistoryError, PieceRotation, scramble_moves,
};
