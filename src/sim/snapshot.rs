//! Read-only render projection
//!
//! Captured once per frame by the embedding. Plain owned data: everything a
//! renderer needs to draw the frame, nothing it could mutate.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::bird_center_x;
use crate::tuning::Tuning;

/// One pipe as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    pub gap_y: f32,
    pub gap_height: f32,
}

/// Immutable view of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub bird_x: f32,
    pub bird_y: f32,
    pub bird_size: f32,
    pub pipe_width: f32,
    pub field_width: f32,
    pub field_height: f32,
    /// Ascending x, the order the field stores them
    pub pipes: Vec<PipeView>,
}

impl RenderSnapshot {
    pub(crate) fn capture(state: &GameState, tuning: &Tuning) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            bird_x: bird_center_x(tuning.field_width),
            bird_y: state.bird.y,
            bird_size: tuning.bird_size,
            pipe_width: tuning.pipe_width,
            field_width: tuning.field_width,
            field_height: tuning.field_height,
            pipes: state
                .field
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    gap_y: p.gap_y,
                    gap_height: p.gap_height,
                })
                .collect(),
        }
    }
}
