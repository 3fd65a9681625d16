//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::PipeField;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// The player-controlled bird
///
/// Holds only vertical motion state. Bounds are not this type's concern;
/// the step logic checks them against the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical position (screen y grows downward)
    pub y: f32,
    /// Vertical velocity
    pub vel: f32,
}

impl Bird {
    pub fn new(start_y: f32) -> Self {
        Self { y: start_y, vel: 0.0 }
    }

    /// Integrate one step: velocity first, then position
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel += gravity;
        self.y += self.vel;
    }

    /// Overwrite velocity with the flap impulse (not additive)
    pub fn flap(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    pub fn reset(&mut self, start_y: f32) {
        self.y = start_y;
        self.vel = 0.0;
    }
}

/// A pipe pair with a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Leading (left) edge
    pub x: f32,
    /// Top of the gap
    pub gap_y: f32,
    /// Vertical extent of the gap
    pub gap_height: f32,
    /// Set at most once, when the pipe is scored
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_y: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_y,
            gap_height,
            passed: false,
        }
    }

    /// Bottom of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_height
    }

    /// Trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self, pipe_width: f32) -> f32 {
        self.x + pipe_width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap placement generator; advances only when a pipe spawns
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes cleared this run
    pub score: u32,
    /// Simulation step counter
    pub time_ticks: u64,
    /// The player bird
    pub bird: Bird,
    /// The scrolling pipe sequence
    pub field: PipeField,
}

impl GameState {
    /// Create a fresh state in `Ready` with the starting pipe layout
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            score: 0,
            time_ticks: 0,
            bird: Bird::new(tuning.field_height / 2.0),
            field: PipeField::default(),
        };
        state.reset(tuning);
        state
    }

    /// Back to `Ready`: score zeroed, bird recentered, pipes reseeded at
    /// their fixed starting offsets.
    ///
    /// The RNG is left where it is - gap placement after a reset continues
    /// the run seed's stream. Replaying a session bit-for-bit means
    /// replaying from [`GameState::new`].
    pub fn reset(&mut self, tuning: &Tuning) {
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.time_ticks = 0;
        self.bird.reset(tuning.field_height / 2.0);
        self.field.reset_initial(tuning, &mut self.rng);
    }
}
