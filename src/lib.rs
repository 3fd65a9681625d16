//! Tap Wing - an embeddable one-tap reflex game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! The crate owns no window, renderer, or clock. An embedding drives the
//! simulation by calling [`GameSession::tick`] with elapsed milliseconds,
//! forwards tap events through [`GameSession::handle_input`], and draws
//! from [`GameSession::snapshot`] each frame.

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameSession, InputEvent, RenderSnapshot};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const STEP_MS: f32 = 16.0;
    /// Maximum substeps per tick call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 300.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Bird defaults
    pub const BIRD_SIZE: f32 = 30.0;
    /// Velocity added per step (screen y grows downward)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_IMPULSE: f32 = -10.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Minimum clearance between a gap edge and the field edge
    pub const GAP_MARGIN: f32 = 50.0;

    /// Leftward scroll per step
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Spawn once the last pipe is this far inside the right edge
    pub const SPAWN_THRESHOLD: f32 = 200.0;
    /// New pipes appear this far past the right edge
    pub const SPAWN_AHEAD: f32 = 50.0;
    /// Starting layout: pipe offsets past the right edge
    pub const INITIAL_PIPE_OFFSETS: [f32; 2] = [100.0, 300.0];
}

/// Fixed horizontal center of the bird (the world scrolls, the bird doesn't)
#[inline]
pub fn bird_center_x(field_width: f32) -> f32 {
    field_width / 3.0
}
