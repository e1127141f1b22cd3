//! The tick-driven simulation: input interpretation, the job queue, history,
//! and scrambling.

use std::collections::VecDeque;

use cgmath::Vector3;
use quarterturn_core::{CubeState, Layer, Move, Piece, TurnMethod};
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use strum::VariantArray;
use thiserror::Error;

use crate::camera::CameraFrame;
use crate::drag::resolve_drag;
use crate::input::FrameInput;
use crate::jobs::Job;
use crate::prefs::TurnPreferences;

/// Floor for the per-tick speeds jobs consume. A configured speed of zero or
/// below would leave a queued job stalled forever.
const SPEED_FLOOR: f32 = 0.1;

/// Continuous rotation to apply to one piece this tick, for the frontend to
/// render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PieceRotation {
    /// The piece to rotate.
    pub piece: Piece,
    /// Unit axis to rotate around.
    pub axis: Vector3<f32>,
    /// A point on the axis, in cube units.
    pub origin: Vector3<f32>,
    /// Degrees to add this tick. Positive is clockwise as seen from outside
    /// along the axis.
    pub angle_delta: f32,
}

/// Coarse engine state, for frontends that gate UI affordances on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EnginePhase {
    /// No turn in flight and no press being tracked.
    Idle,
    /// A press is held but has not yet traveled far enough to be a drag.
    AwaitingDragThreshold,
    /// A layer is rotating, dragged or animated.
    Rotating,
    /// A layer is settling onto a quarter-turn multiple or being committed.
    Stabilizing,
}

/// Why a history operation had nothing to do.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Undo was requested with no committed moves recorded.
    #[error("nothing to undo")]
    NothingToUndo,
    /// Redo was requested with no undone moves available.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Tick-driven cube simulation.
///
/// Owns the cube state, interprets pointer input into layer turns, animates
/// turns through a job queue, and keeps undo/redo history. The frontend
/// calls [`CubeSimulation::step`] once per tick with an input snapshot and
/// applies the returned piece rotations to whatever it renders.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest cube state, including transient per-layer angles.
    state: CubeState,
    /// Tunable speeds and thresholds.
    pub prefs: TurnPreferences,
    /// Committed user moves available to undo.
    undo_stack: Vec<Move>,
    /// Undone moves available to redo.
    redo_stack: Vec<Move>,
    /// Pending work; the front job is the one in progress.
    jobs: VecDeque<Job>,
    /// Set while a press is held that has not yet traveled past the drag
    /// threshold.
    awaiting_threshold: bool,
    /// Pointer state last tick, for press/release edge detection.
    pointer_was_pressed: bool,
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(TurnPreferences::default())
    }
}

impl CubeSimulation {
    /// Constructs a simulation over a solved cube.
    pub fn new(prefs: TurnPreferences) -> Self {
        Self {
            state: CubeState::new(),
            prefs,
            undo_stack: vec![],
            redo_stack: vec![],
            jobs: VecDeque::new(),
            awaiting_threshold: false,
            pointer_was_pressed: false,
        }
    }

    /// Read access to the cube.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Whether a turn chain is currently in flight.
    pub fn is_busy(&self) -> bool {
        !self.jobs.is_empty()
    }

    /// Whether there is a committed move available to undo.
    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is an undone move available to redo.
    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The coarse phase the engine is in.
    pub fn phase(&self) -> EnginePhase {
        if self.awaiting_threshold {
            return EnginePhase::AwaitingDragThreshold;
        }
        match self.jobs.front() {
            Some(Job::DragRotate { .. } | Job::AnimateTo { .. }) => EnginePhase::Rotating,
            Some(Job::Stabilize { .. } | Job::Commit { .. }) => EnginePhase::Stabilizing,
            None => EnginePhase::Idle,
        }
    }

    /// Returns to the solved cube, forgetting history and queued work.
    pub fn reset(&mut self) {
        *self = Self::new(self.prefs.clone());
    }

    /// Advances the simulation by one tick.
    ///
    /// Runs at most one queued job; with an idle queue, interprets pointer
    /// input and may begin a new drag. Returns the piece rotations the
    /// frontend should apply this tick.
    pub fn step(&mut self, input: &FrameInput) -> SmallVec<[PieceRotation; 9]> {
        let just_pressed = input.pointer_pressed && !self.pointer_was_pressed;
        let just_released = !input.pointer_pressed && self.pointer_was_pressed;
        self.pointer_was_pressed = input.pointer_pressed;
        if just_released {
            self.awaiting_threshold = false;
        }

        let mut rotations = SmallVec::new();
        if let Some(job) = self.jobs.pop_front() {
            if let Some(unfinished) = self.execute_job(job, input, just_released, &mut rotations) {
                self.jobs.push_front(unfinished);
            }
            if !self.jobs.is_empty() {
                return rotations;
            }
        }

        if input.pointer_pressed && (just_pressed || self.awaiting_threshold) {
            self.consider_drag(input);
        }
        rotations
    }

    /// Runs all queued jobs to completion with no further input.
    pub fn fast_forward(&mut self) {
        while !self.jobs.is_empty() {
            self.step(&FrameInput::default());
        }
    }

    /// Replays the most recent committed move in reverse, animated.
    ///
    /// Does nothing while a turn is in flight.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        if self.is_busy() {
            return Ok(());
        }
        let mov = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        self.enqueue_turn(mov.inverse(), self.prefs.undo_speed, false);
        self.redo_stack.push(mov);
        Ok(())
    }

    /// Replays the most recently undone move, animated.
    ///
    /// Does nothing while a turn is in flight.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        if self.is_busy() {
            return Ok(());
        }
        let mov = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        self.enqueue_turn(mov, self.prefs.undo_speed, false);
        self.undo_stack.push(mov);
        Ok(())
    }

    /// Scrambles with entropy from the thread RNG.
    pub fn scramble(&mut self) {
        self.scramble_with_seed(rand::rng().random());
    }

    /// Scrambles deterministically: clears the history and queues
    /// `scramble_length` random animated turns.
    pub fn scramble_with_seed(&mut self, seed: u64) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.awaiting_threshold = false;
        for mov in scramble_moves(seed, self.prefs.scramble_length) {
            log::debug!("scramble move: {mov}");
            self.enqueue_turn(mov, self.prefs.scramble_speed, false);
        }
    }

    /// Queues one animated discrete turn.
    fn enqueue_turn(&mut self, mov: Move, speed: f32, push_history: bool) {
        self.jobs.push_back(Job::AnimateTo {
            layer: mov.layer,
            degrees_left: mov.method.degrees(),
            speed: speed.max(SPEED_FLOOR),
        });
        self.jobs.push_back(Job::Stabilize { layer: mov.layer });
        self.jobs.push_back(Job::Commit {
            layer: mov.layer,
            push_history,
        });
    }

    /// Runs one job for one tick. Returns the job to put back at the front
    /// of the queue if it has not finished.
    fn execute_job(
        &mut self,
        job: Job,
        input: &FrameInput,
        just_released: bool,
        rotations: &mut SmallVec<[PieceRotation; 9]>,
    ) -> Option<Job> {
        match job {
            Job::DragRotate {
                layer,
                clockwise,
                horizontal,
            } => {
                let travel = if horizontal {
                    input.pointer_delta.x
                } else {
                    input.pointer_delta.y
                };
                let mut degrees = travel * self.prefs.drag_sensitivity;
                if !clockwise {
                    degrees = -degrees;
                }
                self.rotate_and_report(layer, degrees, rotations);
                if just_released { None } else { Some(job) }
            }
            Job::AnimateTo {
                layer,
                degrees_left,
                speed,
            } => {
                // The final step covers the exact remainder, so the angle
                // lands on the target with no float drift.
                let step = if degrees_left.abs() <= speed {
                    degrees_left
                } else {
                    degrees_left.signum() * speed
                };
                self.rotate_and_report(layer, step, rotations);
                let remaining = degrees_left - step;
                if remaining == 0.0 {
                    None
                } else {
                    Some(Job::AnimateTo {
                        layer,
                        degrees_left: remaining,
                        speed,
                    })
                }
            }
            Job::Stabilize { layer } => {
                let before = self.state.face(layer).angle();
                let max_velocity = self.prefs.settle_speed.max(SPEED_FLOOR);
                self.state.stabilize_layer(layer, max_velocity);
                let after = self.state.face(layer).angle();
                if after != before {
                    self.report_layer(layer, after - before, rotations);
                }
                if self.state.is_layer_quantized(layer) {
                    None
                } else {
                    Some(job)
                }
            }
            Job::Commit {
                layer,
                push_history,
            } => {
                if let Some(method) = self.state.quantized_method(layer) {
                    let mov = Move { layer, method };
                    self.state.apply_turn(mov);
                    if push_history {
                        self.redo_stack.clear();
                        self.undo_stack.push(mov);
                    }
                    log::debug!("committed {mov}");
                }
                self.state.clear_layer_angle(layer);
                None
            }
        }
    }

    /// Applies a continuous rotation and reports it for every piece on the
    /// layer's face. Zero-degree ticks report nothing.
    fn rotate_and_report(
        &mut self,
        layer: Layer,
        degrees: f32,
        rotations: &mut SmallVec<[PieceRotation; 9]>,
    ) {
        if degrees == 0.0 {
            return;
        }
        self.state.rotate_layer(layer, degrees);
        self.report_layer(layer, degrees, rotations);
    }

    fn report_layer(
        &self,
        layer: Layer,
        angle_delta: f32,
        rotations: &mut SmallVec<[PieceRotation; 9]>,
    ) {
        let face = self.state.face(layer);
        for piece in face.pieces() {
            rotations.push(PieceRotation {
                piece,
                axis: face.axis(),
                origin: face.origin(),
                angle_delta,
            });
        }
    }

    /// Handles a held pointer that has not started a drag yet.
    fn consider_drag(&mut self, input: &FrameInput) {
        let threshold = self.prefs.drag_threshold;
        if input.pointer_delta.x.abs() <= threshold && input.pointer_delta.y.abs() <= threshold {
            self.awaiting_threshold = true;
            return;
        }
        self.awaiting_threshold = false;
        self.begin_drag(input);
    }

    /// Resolves the pressed sticker into a layer turn and queues its chain.
    fn begin_drag(&mut self, input: &FrameInput) {
        let Some(facelet) = input.hover else {
            log::trace!("drag with no sticker under the pointer");
            return;
        };
        let frame = CameraFrame::resolve(input.camera_x, input.camera_z);
        let horizontal = input.pointer_delta.x.abs() > input.pointer_delta.y.abs();
        let Some(target) = resolve_drag(&self.state, &frame, facelet, horizontal) else {
            return;
        };
        log::trace!(
            "drag on {} {} turns {}",
            facelet.face,
            facelet.slot,
            target.layer,
        );
        self.jobs.push_back(Job::DragRotate {
            layer: target.layer,
            clockwise: target.clockwise,
            horizontal,
        });
        self.jobs.push_back(Job::Stabilize {
            layer: target.layer,
        });
        self.jobs.push_back(Job::Commit {
            layer: target.layer,
            push_history: true,
        });
    }
}

/// Generates the move sequence for a scramble.
///
/// Layers are drawn uniformly from all nine, constrained only so consecutive
/// picks never repeat a layer; methods are drawn from the three real turn
/// methods. The same seed always yields the same sequence.
pub fn scramble_moves(seed: u64, length: usize) -> Vec<Move> {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let mut moves = Vec::with_capacity(length);
    let mut previous = None;
    while moves.len() < length {
        let layer = Layer::VARIANTS[rng.random_range(0..Layer::VARIANTS.len())];
        if previous == Some(layer) {
            continue;
        }
        previous = Some(layer);
        let method = TurnMethod::VARIANTS[rng.random_range(0..TurnMethod::VARIANTS.len())];
        moves.push(Move { layer, method });
    }
    moves
}
