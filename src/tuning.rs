//! Data-driven game balance
//!
//! Everything that shapes gameplay feel lives here, so an embedding can
//! load alternate balance from JSON without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay balance parameters
///
/// All motion quantities are per-step: the simulation integrates at a fixed
/// ~60 Hz cadence, and these values are applied once per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Velocity added to the bird each step (screen y grows downward)
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub flap_impulse: f32,

    // === Geometry ===
    /// Bird bounding box edge length
    pub bird_size: f32,
    /// Horizontal extent of a pipe pair
    pub pipe_width: f32,
    /// Vertical extent of the passable gap
    pub gap_height: f32,
    /// Minimum clearance between a gap edge and the field edge
    pub gap_margin: f32,
    pub field_width: f32,
    pub field_height: f32,

    // === Field motion ===
    /// Leftward scroll per step
    pub scroll_speed: f32,
    /// Spawn once the last pipe is this far inside the right edge
    pub spawn_threshold: f32,
    /// New pipes appear this far past the right edge
    pub spawn_ahead: f32,

    // === Rules ===
    /// Withhold points earned on the step a collision ends the run.
    /// Off by default: classic rules let a pipe score on the fatal step.
    pub freeze_score_on_game_over: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            flap_impulse: consts::FLAP_IMPULSE,
            bird_size: consts::BIRD_SIZE,
            pipe_width: consts::PIPE_WIDTH,
            gap_height: consts::GAP_HEIGHT,
            gap_margin: consts::GAP_MARGIN,
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            scroll_speed: consts::SCROLL_SPEED,
            spawn_threshold: consts::SPAWN_THRESHOLD,
            spawn_ahead: consts::SPAWN_AHEAD,
            freeze_score_on_game_over: false,
        }
    }
}

impl Tuning {
    /// Valid range for a gap's top edge: `[gap_margin, field_height - gap_height - gap_margin]`
    pub fn gap_y_range(&self) -> (f32, f32) {
        (
            self.gap_margin,
            self.field_height - self.gap_height - self.gap_margin,
        )
    }

    /// Load balance from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize balance to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_balance() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.flap_impulse, -10.0);
        assert_eq!(t.bird_size, 30.0);
        assert_eq!(t.pipe_width, 60.0);
        assert_eq!(t.gap_height, 150.0);
        assert_eq!(t.gap_margin, 50.0);
        assert_eq!(t.field_width, 300.0);
        assert_eq!(t.field_height, 300.0);
        assert_eq!(t.scroll_speed, 2.0);
        assert!(!t.freeze_score_on_game_over);
    }

    #[test]
    fn test_gap_y_range() {
        let t = Tuning::default();
        assert_eq!(t.gap_y_range(), (50.0, 100.0));
    }

    #[test]
    fn test_json_round_trip() {
        let t = Tuning {
            gravity: 0.8,
            freeze_score_on_game_over: true,
            ..Default::default()
        };
        let json = t.to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 1.0 }"#).unwrap();
        assert_eq!(t.gravity, 1.0);
        assert_eq!(t.pipe_width, Tuning::default().pipe_width);
    }
}
