//! The scrolling pipe sequence
//!
//! Owns every pipe in play, ordered by leading edge ascending. Motion is
//! uniform, so insertion order stays position order and no re-sorting is
//! ever needed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Pipe;
use crate::consts;
use crate::tuning::Tuning;

/// Create a pipe at `x` with its gap top drawn uniformly inside the margins
pub fn create_pipe(x: f32, tuning: &Tuning, rng: &mut impl Rng) -> Pipe {
    let (min_gap_y, max_gap_y) = tuning.gap_y_range();
    let gap_y = rng.random::<f32>() * (max_gap_y - min_gap_y) + min_gap_y;
    Pipe::new(x, gap_y, tuning.gap_height)
}

/// The ordered sequence of pipes in play
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeField {
    pipes: Vec<Pipe>,
}

impl PipeField {
    /// Replace the sequence wholesale
    pub fn reset(&mut self, pipes: Vec<Pipe>) {
        self.pipes = pipes;
    }

    /// Seed the fixed starting layout: one pipe per offset past the right edge
    pub fn reset_initial(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        let pipes = consts::INITIAL_PIPE_OFFSETS
            .iter()
            .map(|offset| create_pipe(tuning.field_width + offset, tuning, rng))
            .collect();
        self.reset(pipes);
    }

    /// Shift every pipe left by `dx`
    pub fn advance(&mut self, dx: f32) {
        for pipe in &mut self.pipes {
            pipe.x -= dx;
        }
    }

    /// Append a pipe once the last one has scrolled past the spawn threshold.
    ///
    /// Called after [`advance`](Self::advance), so the spacing between the
    /// new pipe and its predecessor is measured against post-move positions.
    pub fn spawn_if_needed(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        let Some(last) = self.pipes.last() else {
            return;
        };
        if last.x < tuning.field_width - tuning.spawn_threshold {
            let pipe = create_pipe(tuning.field_width + tuning.spawn_ahead, tuning, rng);
            log::debug!("spawned pipe at x={} gap_y={}", pipe.x, pipe.gap_y);
            self.pipes.push(pipe);
        }
    }

    /// Drop pipes whose trailing edge has left the field
    pub fn prune_offscreen(&mut self, pipe_width: f32) {
        self.pipes.retain(|p| p.trailing_edge(pipe_width) > 0.0);
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    /// In-place mutation during the score pass; order stays ascending x
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pipe> {
        self.pipes.iter_mut()
    }

    pub fn as_slice(&self) -> &[Pipe] {
        self.pipes.as_slice()
    }
}
