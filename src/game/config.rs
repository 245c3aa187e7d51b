// World constants shared by the match and both combatants

use std::time::Duration;

use crate::engine::game_loop::{MAX_FRAME_SCALE, TARGET_FRAME_TIME};
use crate::engine::physics::Bounds;
use crate::game::characters::ConfigError;

/// Immutable world tuning, injected into the match and every combatant
///
/// All speeds are per simulation tick (one display frame), not per second.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    // Arena
    /// Canvas and world width in pixels
    pub width: f32,
    /// Canvas and world height in pixels
    pub height: f32,
    /// Distance from the bottom edge to the floor line
    pub floor_inset: f32,

    // Movement
    /// Added to vertical velocity every airborne tick
    pub gravity: f32,
    pub movement_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_speed: f32,
    /// Vertical velocity set by a fast fall
    pub fall_speed: f32,

    // Combat
    /// Damage per landed hit at a nominal frame scale
    pub base_damage: f32,
    pub initial_health: i32,

    // Timing
    pub target_frame_time: Duration,
    pub max_frame_scale: f32,
    pub match_length: Duration,
    /// Cadence of the countdown
    pub countdown_step: Duration,

    // Debug
    /// Outline body and attack boxes
    pub show_hitboxes: bool,
}

/// The arena every duel is fought in
pub const DEFAULT_WORLD: WorldConfig = WorldConfig {
    width: 1024.0,
    height: 576.0,
    floor_inset: 96.0,

    gravity: 0.2,
    movement_speed: 5.0,
    jump_speed: -8.0,
    fall_speed: 10.0,

    base_damage: 10.0,
    initial_health: 100,

    target_frame_time: TARGET_FRAME_TIME,
    max_frame_scale: MAX_FRAME_SCALE,
    match_length: Duration::from_secs(30),
    countdown_step: Duration::from_millis(100),

    show_hitboxes: false,
};

impl Default for WorldConfig {
    fn default() -> Self {
        DEFAULT_WORLD
    }
}

impl WorldConfig {
    /// Get the standard arena
    pub fn standard() -> Self {
        DEFAULT_WORLD
    }

    /// Y coordinate bodies rest on
    pub fn floor_y(&self) -> f32 {
        self.height - self.floor_inset
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            floor_y: self.floor_y(),
            world_width: self.width,
            gravity: self.gravity,
        }
    }

    /// Reject settings that would make the simulation meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| Err(ConfigError::InvalidWorld(reason.to_string()));

        if !(self.width > 0.0 && self.height > 0.0) {
            return invalid("world dimensions must be positive");
        }
        if self.floor_inset < 0.0 || self.floor_inset >= self.height {
            return invalid("floor must lie inside the world");
        }
        if self.initial_health <= 0 {
            return invalid("initial health must be positive");
        }
        if self.base_damage < 0.0 {
            return invalid("base damage must not be negative");
        }
        if self.countdown_step.is_zero() || self.target_frame_time.is_zero() {
            return invalid("timing steps must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_world() {
        let world = WorldConfig::standard();
        assert_eq!(world.floor_y(), 480.0);
        assert_eq!(world.initial_health, 100);
        assert_eq!(world.match_length, Duration::from_secs(30));
        assert!(world.validate().is_ok());
    }

    #[test]
    fn test_bounds_follow_world() {
        let bounds = WorldConfig::default().bounds();
        assert_eq!(bounds.floor_y, 480.0);
        assert_eq!(bounds.world_width, 1024.0);
        assert_eq!(bounds.gravity, 0.2);
    }

    #[test]
    fn test_validate_rejects_floor_outside_world() {
        let world = WorldConfig {
            floor_inset: 600.0,
            ..WorldConfig::standard()
        };
        assert!(matches!(world.validate(), Err(ConfigError::InvalidWorld(_))));
    }

    #[test]
    fn test_validate_rejects_zero_health() {
        let world = WorldConfig {
            initial_health: 0,
            ..WorldConfig::standard()
        };
        assert!(world.validate().is_err());
    }
}
