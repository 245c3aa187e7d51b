// Combatant attack window and animation priority

use super::animation::AnimationName;

/// Where a combatant is in its attack cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackPhase {
    /// No attack in progress
    #[default]
    Ready,
    /// The attack window is open; the next overlap lands a hit
    Swinging,
    /// A hit landed; the window is closed but the attack clip plays out
    Recovering,
}

impl AttackPhase {
    /// Check if a hit can land this frame
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Swinging)
    }

    /// Check if the attack clip should be showing
    pub fn shows_attack(&self) -> bool {
        !matches!(self, Self::Ready)
    }

    /// Check if a new attack may start
    pub fn can_attack(&self) -> bool {
        !self.is_attacking()
    }
}

/// Inputs to the animation choice for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub attack: AttackPhase,
    pub velocity_y: f32,
    pub grounded: bool,
    pub moving: bool,
}

/// Pick the clip for this frame, highest priority first:
/// attack, rising, falling, running, idle
pub fn choose_animation(motion: MotionState) -> AnimationName {
    if motion.attack.shows_attack() {
        AnimationName::Attack
    } else if motion.velocity_y < 0.0 {
        AnimationName::Jump
    } else if !motion.grounded {
        AnimationName::Fall
    } else if motion.moving {
        AnimationName::Run
    } else {
        AnimationName::Idle
    }
}
