use glam::Vec2;

use super::collision::AxisAlignedBox;
use crate::core::math::{clamp, Rect};

/// Constants the integrator needs each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Y coordinate of the floor line (bodies rest with their bottom edge on it)
    pub floor_y: f32,
    /// Width of the playable area; x is clamped to `[0, world_width - body_width]`
    pub world_width: f32,
    /// Downward acceleration added to `velocity.y` per airborne tick
    pub gravity: f32,
}

/// Builder for kinematic bodies
pub struct BodyBuilder {
    position: Vec2,
    velocity: Vec2,
    size: Vec2,
    max_jumps: u8,
}

impl BodyBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: Vec2::new(width, height),
            max_jumps: 2,
        }
    }

    /// Set the initial top-left position
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set the initial velocity
    #[cfg(test)]
    pub(crate) fn velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Number of jumps allowed before landing again
    pub fn max_jumps(mut self, max_jumps: u8) -> Self {
        self.max_jumps = max_jumps;
        self
    }

    pub fn build(self) -> Body {
        Body {
            position: self.position,
            velocity: self.velocity,
            size: self.size,
            jump_count: 0,
            max_jumps: self.max_jumps,
            grounded: false,
        }
    }
}

/// Kinematic box body with floor contact and a jump budget
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner of the body box
    pub position: Vec2,
    pub velocity: Vec2,
    size: Vec2,
    jump_count: u8,
    max_jumps: u8,
    grounded: bool,
}

impl Body {
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn jump_count(&self) -> u8 {
        self.jump_count
    }

    pub fn max_jumps(&self) -> u8 {
        self.max_jumps
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// World-space body box
    pub fn body_box(&self) -> AxisAlignedBox {
        Rect::from_origin(self.position, self.size)
    }

    /// Spend one jump, setting the vertical velocity
    ///
    /// Returns false (and leaves velocity untouched) once the budget is used up.
    /// The budget only refills on landing, so a second jump can start mid-air.
    pub fn try_jump(&mut self, jump_speed: f32) -> bool {
        if self.jump_count >= self.max_jumps {
            return false;
        }
        self.velocity.y = jump_speed;
        self.jump_count += 1;
        true
    }

    /// Move by one tick of velocity, then resolve floor contact and walls
    ///
    /// Floor contact is tested one step ahead (`bottom + velocity.y`), so a fast
    /// fall snaps onto the floor instead of tunnelling through it.
    pub fn integrate(&mut self, bounds: &Bounds) {
        self.position += self.velocity;

        if self.position.y + self.height() + self.velocity.y >= bounds.floor_y {
            self.position.y = bounds.floor_y - self.height();
            self.velocity.y = 0.0;
            self.grounded = true;
            self.jump_count = 0;
        } else {
            self.velocity.y += bounds.gravity;
            self.grounded = false;
        }

        self.position.x = clamp(self.position.x, 0.0, bounds.world_width - self.width());
    }
}
