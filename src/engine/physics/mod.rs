// Arcade physics: kinematic box bodies over a flat floor

pub mod body;
mod collision;

pub use body::{Body, BodyBuilder, Bounds};
pub use collision::{AttackBox, AxisAlignedBox};
