// Combatant entity and per-frame update

use glam::Vec2;
use log::{debug, trace};

use super::animation::{AnimatedSprite, AnimationClip, AnimationName, AnimationSet};
use super::state::{choose_animation, AttackPhase, MotionState};
use super::stats::{Archetype, Facing};
use super::ConfigError;
use crate::core::math::approx_equal;
use crate::engine::assets::ImageHandle;
use crate::engine::physics::{AttackBox, AxisAlignedBox, Body, BodyBuilder, Bounds};
use crate::engine::renderer::{Color, DrawingSink};
use crate::game::config::WorldConfig;

/// Tolerance when checking whether a fast fall is still in effect
const FALL_SPEED_EPSILON: f32 = 1e-4;

/// One of the two fighters
///
/// Owns its physics body, attack reach, animation set and health. Intents
/// mutate velocity and the attack phase; `tick` integrates once per frame.
#[derive(Debug, Clone)]
pub struct Combatant {
    /// Name used in logs
    name: &'static str,

    // Physics
    body: Body,
    attack_box: AttackBox,

    // Movement tuning
    movement_speed: f32,
    jump_speed: f32,
    fall_speed: f32,

    // Combat state
    attack: AttackPhase,
    /// Whether a horizontal move intent is held
    moving: bool,
    health: i32,
    max_health: i32,

    // Presentation
    animations: AnimationSet,
    sprite: AnimatedSprite,
    sprite_offset: Vec2,
    sprite_scale: f32,
    facing: Facing,
    color: Color,
}

impl Combatant {
    /// Build a combatant from its archetype
    ///
    /// `load_image` is asked for every sprite sheet and must return
    /// immediately; sheets that are still loading are simply not drawn.
    pub fn new(
        archetype: &Archetype,
        world: &WorldConfig,
        mut load_image: impl FnMut(&str) -> ImageHandle,
    ) -> Result<Self, ConfigError> {
        archetype.validate()?;

        let clips = archetype
            .animations
            .iter()
            .map(|(name, spec)| {
                AnimationClip::new(load_image(spec.path), spec.frame_count, spec.frame_hold_ticks)
                    .map(|clip| (*name, clip))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let animations = AnimationSet::new(clips)?;
        let sprite = AnimatedSprite::from_set(&animations, AnimationName::Idle);

        let spawn = archetype.spawn_position(world.width);
        let body = BodyBuilder::new(archetype.body_size.x, archetype.body_size.y)
            .position(spawn.x, spawn.y)
            .max_jumps(archetype.max_jumps)
            .build();
        let mut attack_box = AttackBox::new(
            archetype.attack_offset,
            archetype.attack_size.x,
            archetype.attack_size.y,
        );
        attack_box.follow(body.position);

        debug!("Spawned {} at ({}, {})", archetype.name, spawn.x, spawn.y);

        Ok(Self {
            name: archetype.name,
            body,
            attack_box,
            movement_speed: world.movement_speed,
            jump_speed: world.jump_speed,
            fall_speed: world.fall_speed,
            attack: AttackPhase::Ready,
            moving: false,
            health: world.initial_health,
            max_health: world.initial_health,
            animations,
            sprite,
            sprite_offset: archetype.sprite_offset,
            sprite_scale: archetype.sprite_scale,
            facing: archetype.facing,
            color: archetype.color,
        })
    }

    /// Set horizontal velocity from a direction (-1 left, 0 stop, +1 right)
    pub fn apply_horizontal_intent(&mut self, direction: i8) {
        let direction = direction.signum();
        self.body.velocity.x = direction as f32 * self.movement_speed;
        self.moving = direction != 0;
    }

    /// Jump if the budget allows; returns whether the jump happened
    pub fn jump(&mut self) -> bool {
        let jumped = self.body.try_jump(self.jump_speed);
        if jumped {
            trace!(
                "{} jumps ({}/{})",
                self.name,
                self.body.jump_count(),
                self.body.max_jumps()
            );
        }
        jumped
    }

    pub fn fast_fall(&mut self) {
        self.body.velocity.y = self.fall_speed;
    }

    /// Cancel a fast fall that has not been altered since it started
    pub fn stop_fast_fall(&mut self) {
        if approx_equal(self.body.velocity.y, self.fall_speed, FALL_SPEED_EPSILON) {
            self.body.velocity.y = 0.0;
        }
    }

    /// Open an attack window; ignored while one is already open
    ///
    /// Attacking again while the previous attack clip is still playing
    /// replays it from the first frame.
    pub fn attack(&mut self) -> bool {
        if !self.attack.can_attack() {
            return false;
        }
        self.attack = AttackPhase::Swinging;
        if self.sprite.current() == Some(AnimationName::Attack) {
            self.sprite.restart();
        }
        trace!("{} attacks", self.name);
        true
    }

    /// Advance one simulation step
    ///
    /// The attack box is re-anchored before the body moves, so it trails the
    /// body by one step of velocity.
    pub fn tick(&mut self, bounds: &Bounds) {
        self.sprite.advance_frame();
        self.attack_box.follow(self.body.position);
        self.body.integrate(bounds);
    }

    /// Pick and switch to this frame's animation
    ///
    /// The attack clip holds until its last frame, which also closes any
    /// attack window still open.
    pub fn select_animation(&mut self) -> AnimationName {
        if self.attack.shows_attack()
            && self.sprite.current() == Some(AnimationName::Attack)
            && self.sprite.is_on_last_frame()
        {
            self.attack = AttackPhase::Ready;
            return AnimationName::Attack;
        }

        let name = choose_animation(MotionState {
            attack: self.attack,
            velocity_y: self.body.velocity.y,
            grounded: self.body.is_grounded(),
            moving: self.moving,
        });
        self.sprite.set_animation(name, self.animations.get(name));
        name
    }

    /// Close the attack window after a hit; the clip keeps playing
    pub(crate) fn land_hit(&mut self) {
        if self.attack.is_attacking() {
            self.attack = AttackPhase::Recovering;
        }
    }

    /// Subtract `amount`, keeping health within `0..=max_health`
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).clamp(0, self.max_health);
        self.health
    }

    /// Draw the sprite and, optionally, the collision boxes
    pub fn render(&self, sink: &mut dyn DrawingSink, show_hitboxes: bool) {
        let origin = self.body.position - self.sprite_offset;
        self.sprite
            .draw(sink, origin, self.sprite_scale, self.facing.flip_x());

        if show_hitboxes {
            sink.stroke_rect(self.body_box(), 1.0, self.color);
            let reach = self.attack_box.region();
            if self.is_attacking() {
                sink.fill_rect(reach, Color::WHITE.with_alpha(0.35));
            }
            sink.stroke_rect(reach, 1.0, Color::WHITE.with_alpha(0.6));
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    /// Check if a hit can land this frame
    pub fn is_attacking(&self) -> bool {
        self.attack.is_attacking()
    }

    #[cfg(test)]
    pub(crate) fn attack_phase(&self) -> AttackPhase {
        self.attack
    }

    #[cfg(test)]
    pub(crate) fn is_moving(&self) -> bool {
        self.moving
    }

    #[cfg(test)]
    pub(crate) fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }

    #[cfg(test)]
    pub(crate) fn jump_count(&self) -> u8 {
        self.body.jump_count()
    }

    #[cfg(test)]
    pub(crate) fn max_jumps(&self) -> u8 {
        self.body.max_jumps()
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> Vec2 {
        self.body.position
    }

    #[cfg(test)]
    pub(crate) fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn body_box(&self) -> AxisAlignedBox {
        self.body.body_box()
    }

    pub fn attack_box(&self) -> &AttackBox {
        &self.attack_box
    }

    #[cfg(test)]
    pub(crate) fn sprite(&self) -> &AnimatedSprite {
        &self.sprite
    }

    #[cfg(test)]
    pub(crate) fn current_animation(&self) -> Option<AnimationName> {
        self.sprite.current()
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
        self.attack_box.follow(position);
    }

    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.body.velocity = velocity;
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}
