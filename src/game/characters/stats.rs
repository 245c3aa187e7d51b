// Combatant archetypes - body, reach, spawn and sprite sheets per side
// Both sides share the same body and movement; only placement and facing differ

use glam::Vec2;

use super::animation::AnimationName;
use super::ConfigError;
use crate::engine::renderer::Color;

/// Where a sprite sheet lives and how it is timed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Path under the textures directory
    pub path: &'static str,
    pub frame_count: u32,
    /// Ticks each frame stays on screen
    pub frame_hold_ticks: u32,
}

impl AnimationSpec {
    pub const fn new(path: &'static str, frame_count: u32, frame_hold_ticks: u32) -> Self {
        Self {
            path,
            frame_count,
            frame_hold_ticks,
        }
    }
}

/// Which way the sheet art faces once drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    /// Sheets are drawn facing right; left-facing sprites are mirrored
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

/// Arena wall a combatant spawns against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Everything needed to build one combatant
#[derive(Debug, Clone, PartialEq)]
pub struct Archetype {
    /// Name used in logs
    pub name: &'static str,

    // Dimensions
    /// Body box size in world units
    pub body_size: Vec2,
    /// Attack box offset from the body's top-left corner
    pub attack_offset: Vec2,
    pub attack_size: Vec2,

    // Movement
    /// Number of jumps allowed before landing
    pub max_jumps: u8,
    /// Wall the spawn gap is measured from
    pub spawn_wall: Wall,
    /// Gap between `spawn_wall` and the body (x) and initial top (y)
    pub spawn_inset: Vec2,

    // Presentation
    /// Sheets are drawn at `position - sprite_offset`
    pub sprite_offset: Vec2,
    pub sprite_scale: f32,
    pub facing: Facing,
    /// Outline colour for the hitbox overlay
    pub color: Color,
    pub animations: [(AnimationName, AnimationSpec); 5],
}

const PLAYER_SHEETS: [(AnimationName, AnimationSpec); 5] = [
    (
        AnimationName::Idle,
        AnimationSpec::new("Martial Hero 2/Sprites/Idle.png", 4, 20),
    ),
    (
        AnimationName::Run,
        AnimationSpec::new("Martial Hero 2/Sprites/Run.png", 8, 20),
    ),
    (
        AnimationName::Jump,
        AnimationSpec::new("Martial Hero 2/Sprites/Jump.png", 2, 20),
    ),
    (
        AnimationName::Fall,
        AnimationSpec::new("Martial Hero 2/Sprites/Fall.png", 2, 20),
    ),
    (
        AnimationName::Attack,
        AnimationSpec::new("Martial Hero 2/Sprites/Attack1.png", 4, 6),
    ),
];

/// Left-hand fighter
pub const PLAYER: Archetype = Archetype {
    name: "player",

    body_size: Vec2::new(50.0, 150.0),
    attack_offset: Vec2::new(0.0, 0.0),
    attack_size: Vec2::new(100.0, 50.0),

    max_jumps: 2,
    spawn_wall: Wall::Left,
    spawn_inset: Vec2::new(10.0, 50.0),

    sprite_offset: Vec2::new(215.0, 170.0),
    sprite_scale: 2.5,
    facing: Facing::Right,
    color: Color::rgb(1.0, 0.0, 0.0),
    animations: PLAYER_SHEETS,
};

/// Right-hand fighter: the same sheets mirrored, reaching to the left
pub const ENEMY: Archetype = Archetype {
    name: "enemy",

    body_size: Vec2::new(50.0, 150.0),
    attack_offset: Vec2::new(-50.0, 0.0),
    attack_size: Vec2::new(100.0, 50.0),

    max_jumps: 2,
    spawn_wall: Wall::Right,
    spawn_inset: Vec2::new(10.0, 50.0),

    sprite_offset: Vec2::new(215.0, 170.0),
    sprite_scale: 2.5,
    facing: Facing::Left,
    color: Color::rgb(0.0, 0.0, 1.0),
    animations: PLAYER_SHEETS,
};

impl Archetype {
    pub fn player() -> Self {
        PLAYER
    }

    pub fn enemy() -> Self {
        ENEMY
    }

    /// Initial top-left position in an arena `world_width` wide
    pub fn spawn_position(&self, world_width: f32) -> Vec2 {
        let x = match self.spawn_wall {
            Wall::Left => self.spawn_inset.x,
            Wall::Right => world_width - self.spawn_inset.x - self.body_size.x,
        };
        Vec2::new(x, self.spawn_inset.y)
    }

    /// Reject negative sizes and a zero scale
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("body", self.body_size),
            ("attack box", self.attack_size),
        ];
        for (what, size) in sizes {
            if size.x < 0.0 || size.y < 0.0 {
                return Err(ConfigError::NegativeSize {
                    what,
                    width: size.x,
                    height: size.y,
                });
            }
        }
        if self.sprite_scale <= 0.0 {
            return Err(ConfigError::NegativeSize {
                what: "sprite scale",
                width: self.sprite_scale,
                height: self.sprite_scale,
            });
        }
        Ok(())
    }
}
