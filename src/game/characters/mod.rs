// Character system
//
// This module contains everything related to the two combatants:
// - Combatant data structure and per-frame update
// - Archetypes (body, reach, spawn, sprite sheets)
// - Attack window and animation priority
// - Animation clips and the sprite frame cursor

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimatedSprite, AnimationClip};
pub use character::Combatant;
pub use stats::Archetype;

/// Misconfiguration detected while building combatants or the world
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Animation clip must have at least one frame")]
    ZeroFrameCount,

    #[error("Animation frames must be held for at least one tick")]
    ZeroFrameHold,

    #[error("Negative size for {what}: {width}x{height}")]
    NegativeSize {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("Missing animation clip: {0}")]
    MissingAnimation(&'static str),

    #[error("Invalid world configuration: {0}")]
    InvalidWorld(String),
}
