//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pipes ascending by leading edge)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BirdRect, bird_pipe_collision, out_of_bounds};
pub use field::{PipeField, create_pipe};
pub use session::{GameSession, InputEvent};
pub use snapshot::{PipeView, RenderSnapshot};
pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::step;
