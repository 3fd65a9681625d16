//! Fixed timestep simulation step
//!
//! Advances a [`GameState`] by exactly one step. The order inside a step is
//! load-bearing: integrate the bird, move the field, then resolve bounds,
//! collisions, and scoring against post-move positions.

use glam::Vec2;

use super::collision::{BirdRect, bird_pipe_collision, out_of_bounds};
use super::state::{GamePhase, GameState};
use crate::bird_center_x;
use crate::tuning::Tuning;

/// Advance the game state by one fixed step. No-op unless `Playing`.
pub fn step(state: &mut GameState, tuning: &Tuning) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state.bird.apply_gravity(tuning.gravity);

    // Advance, spawn, prune - in that order, so a fresh pipe is never
    // pruned the step it appears and spacing is measured post-move
    state.field.advance(tuning.scroll_speed);
    state.field.spawn_if_needed(tuning, &mut state.rng);
    state.field.prune_offscreen(tuning.pipe_width);

    let center = Vec2::new(bird_center_x(tuning.field_width), state.bird.y);
    let rect = BirdRect::from_center(center, tuning.bird_size);

    // Floor/ceiling ends the run before any pipe is considered
    if out_of_bounds(state.bird.y, tuning.field_height) {
        game_over(state);
        return;
    }

    // Pipes reach the bird in ascending-x order. A collision does not break
    // the loop: pipes left of the bird still get their score check on the
    // fatal step. `passed` flips in place through the iterator, never via
    // an alias.
    let mut collided = false;
    let mut scored = 0u32;
    for pipe in state.field.iter_mut() {
        if bird_pipe_collision(&rect, pipe, tuning.pipe_width) {
            collided = true;
        }
        if !pipe.passed && pipe.trailing_edge(tuning.pipe_width) < rect.left() {
            pipe.passed = true;
            scored += 1;
        }
    }

    if !(collided && tuning.freeze_score_on_game_over) {
        state.score += scored;
    }
    if collided {
        game_over(state);
    }
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "game over: score={} ticks={}",
        state.score,
        state.time_ticks
    );
}
