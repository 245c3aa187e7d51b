// Game logic: combatants, combat resolution, the match and its HUD

pub mod arena;
pub mod characters;
pub mod combat;
pub mod config;
pub mod hud;
pub mod scenery;

pub use arena::{Match, MatchOutcome, MatchState};
pub use config::WorldConfig;
