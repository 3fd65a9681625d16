//! The embeddable session façade
//!
//! Owns the deterministic state plus the accumulator that turns an
//! externally clocked `tick(dt)` into fixed simulation steps. The driver
//! supplies time and input; the session never sleeps or schedules. Calls
//! must be serialized by the driver (single logical thread or queue).

use serde::{Deserialize, Serialize};

use super::snapshot::RenderSnapshot;
use super::state::{GamePhase, GameState};
use super::tick::step;
use crate::consts::{MAX_SUBSTEPS, STEP_MS};
use crate::tuning::Tuning;

/// Discrete input events forwarded by the embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Tap / click / key press - the game's single control
    Tap,
}

/// A complete, self-contained game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    state: GameState,
    tuning: Tuning,
    /// Milliseconds not yet consumed by a fixed step
    accumulator: f32,
}

impl GameSession {
    /// Create a session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let state = GameState::new(seed, &tuning);
        log::info!("session created with seed {seed}");
        Self {
            state,
            tuning,
            accumulator: 0.0,
        }
    }

    /// Advance the simulation by `dt_ms` elapsed milliseconds.
    ///
    /// Whole fixed steps of [`STEP_MS`] are consumed; the remainder carries
    /// to the next call. Steps per call are capped at [`MAX_SUBSTEPS`] so a
    /// stalled driver cannot spiral; capped-off time is dropped, not
    /// replayed.
    pub fn tick(&mut self, dt_ms: f32) {
        self.accumulator += dt_ms.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= STEP_MS && substeps < MAX_SUBSTEPS {
            step(&mut self.state, &self.tuning);
            self.accumulator -= STEP_MS;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(STEP_MS);
        }
    }

    /// Dispatch a discrete input event against the current phase.
    ///
    /// A tap always means something; no phase treats input as an error.
    pub fn handle_input(&mut self, event: InputEvent) {
        match (event, self.state.phase) {
            (InputEvent::Tap, GamePhase::Ready) => {
                self.state.phase = GamePhase::Playing;
                self.accumulator = 0.0;
                log::info!("run started");
            }
            (InputEvent::Tap, GamePhase::Playing) => {
                self.state.bird.flap(self.tuning.flap_impulse);
            }
            (InputEvent::Tap, GamePhase::GameOver) => self.reset(),
        }
    }

    /// Back to `Ready` with the starting layout. Always legal.
    pub fn reset(&mut self) {
        self.state.reset(&self.tuning);
        self.accumulator = 0.0;
        log::info!("session reset");
    }

    /// Immutable projection of everything a renderer needs this frame
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, &self.tuning)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(session: &mut GameSession) {
        session.handle_input(InputEvent::Tap);
    }

    #[test]
    fn test_ready_tap_starts_run_with_seeded_pipes() {
        let mut session = GameSession::new(11);
        let before = session.snapshot();
        assert_eq!(before.phase, GamePhase::Ready);
        assert_eq!(before.pipes.len(), 2);

        tap(&mut session);
        let after = session.snapshot();
        assert_eq!(after.phase, GamePhase::Playing);
        // Starting a run moves nothing until the first tick
        assert_eq!(before.pipes, after.pipes);
        assert_eq!(before.bird_y, after.bird_y);
    }

    #[test]
    fn test_tap_flaps_while_playing() {
        let mut session = GameSession::new(11);
        tap(&mut session);
        session.tick(STEP_MS);
        assert!(session.state().bird.vel > 0.0);

        tap(&mut session);
        assert_eq!(session.state().bird.vel, session.tuning().flap_impulse);
    }

    #[test]
    fn test_tick_is_noop_until_playing() {
        let mut session = GameSession::new(11);
        session.tick(160.0);
        assert_eq!(session.state().time_ticks, 0);
        assert_eq!(session.snapshot().bird_y, 150.0);
    }

    #[test]
    fn test_tick_accumulates_partial_frames() {
        let mut session = GameSession::new(11);
        tap(&mut session);

        session.tick(8.0);
        assert_eq!(session.state().time_ticks, 0);
        session.tick(8.0);
        assert_eq!(session.state().time_ticks, 1);

        session.tick(32.0);
        assert_eq!(session.state().time_ticks, 3);
    }

    #[test]
    fn test_tick_caps_substeps() {
        let mut session = GameSession::new(11);
        tap(&mut session);

        session.tick(10_000.0);
        assert_eq!(session.state().time_ticks, u64::from(MAX_SUBSTEPS));

        // The dropped backlog must not replay on the next call
        session.tick(0.0);
        assert!(session.state().time_ticks <= u64::from(MAX_SUBSTEPS) + 1);
    }

    #[test]
    fn test_game_over_tap_resets() {
        let mut session = GameSession::new(11);
        tap(&mut session);
        // No flaps: ride gravity into the floor
        for _ in 0..200 {
            session.tick(STEP_MS);
            if session.phase() == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(session.phase(), GamePhase::GameOver);

        tap(&mut session);
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.bird_y, 150.0);
        let xs: Vec<f32> = snap.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![400.0, 600.0]);
    }

    #[test]
    fn test_reset_is_idempotent_up_to_gap_placement() {
        let mut session = GameSession::new(11);
        session.reset();
        let first = session.snapshot();
        session.reset();
        let second = session.snapshot();

        assert_eq!(first.phase, second.phase);
        assert_eq!(first.score, second.score);
        assert_eq!(first.bird_y, second.bird_y);
        let xs = |s: &RenderSnapshot| s.pipes.iter().map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs(&first), xs(&second));
    }

    #[test]
    fn test_same_seed_same_inputs_is_deterministic() {
        let mut a = GameSession::new(99_999);
        let mut b = GameSession::new(99_999);

        for session in [&mut a, &mut b] {
            tap(session);
            for i in 0..600 {
                if i % 20 == 0 {
                    session.handle_input(InputEvent::Tap);
                }
                session.tick(STEP_MS);
            }
        }

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.state().time_ticks, b.state().time_ticks);
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_score_frozen_after_game_over() {
        let mut session = GameSession::new(42);
        tap(&mut session);
        for _ in 0..200 {
            session.tick(STEP_MS);
            if session.phase() == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(session.phase(), GamePhase::GameOver);

        let score = session.score();
        let ticks = session.state().time_ticks;
        session.tick(STEP_MS * 10.0);
        assert_eq!(session.score(), score);
        assert_eq!(session.state().time_ticks, ticks);
    }
}
