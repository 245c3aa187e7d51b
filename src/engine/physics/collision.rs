use glam::Vec2;

use crate::core::math::Rect;

/// World-space region used for body and attack collision
pub type AxisAlignedBox = Rect;

/// Attack reach attached to a body at a fixed offset
///
/// The absolute position lags the body by one integration step: it is
/// refreshed from the body position *before* velocity is applied each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackBox {
    /// Offset from the owner's top-left corner
    pub offset: Vec2,
    /// Absolute top-left corner, recomputed every tick
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl AttackBox {
    pub fn new(offset: Vec2, width: f32, height: f32) -> Self {
        Self {
            offset,
            position: offset,
            width,
            height,
        }
    }

    /// Re-anchor the box to its owner's position
    pub fn follow(&mut self, owner_position: Vec2) {
        self.position = owner_position + self.offset;
    }

    /// Current world-space region
    pub fn region(&self) -> AxisAlignedBox {
        Rect::from_origin(self.position, Vec2::new(self.width, self.height))
    }

    /// Strict overlap against another region (shared edges do not count)
    pub fn hits(&self, target: &AxisAlignedBox) -> bool {
        self.region().overlaps(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_applies_offset() {
        let mut attack = AttackBox::new(Vec2::new(-50.0, 0.0), 100.0, 50.0);
        attack.follow(Vec2::new(300.0, 200.0));
        assert_eq!(attack.position, Vec2::new(250.0, 200.0));
        assert_eq!(attack.region(), Rect::new(250.0, 200.0, 100.0, 50.0));
    }

    #[test]
    fn test_hits_overlapping_body() {
        let mut attack = AttackBox::new(Vec2::ZERO, 100.0, 50.0);
        attack.follow(Vec2::new(0.0, 0.0));
        let body = Rect::new(60.0, 0.0, 50.0, 150.0);
        assert!(attack.hits(&body));
    }

    #[test]
    fn test_shared_edge_is_not_a_hit() {
        let mut attack = AttackBox::new(Vec2::ZERO, 100.0, 50.0);
        attack.follow(Vec2::new(0.0, 0.0));
        let body = Rect::new(100.0, 0.0, 50.0, 150.0);
        assert!(!attack.hits(&body));
    }
}
