// Per-fighter held-key state, turning control edges into intents

use super::action::{Action, Control, Intent, Side};

/// Tracks which directional controls a fighter is holding
///
/// Horizontal movement follows the most recent press. Releasing one direction
/// while the other is still held moves the other way; releasing both stops.
#[derive(Debug, Clone)]
pub struct FighterInput {
    side: Side,
    left_held: bool,
    right_held: bool,
}

impl FighterInput {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            left_held: false,
            right_held: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left_held,
            Control::Right => self.right_held,
            _ => false,
        }
    }

    /// Register a control press
    pub(crate) fn press(&mut self, control: Control) -> Option<Intent> {
        let action = match control {
            Control::Left => {
                self.left_held = true;
                Action::MoveLeft
            }
            Control::Right => {
                self.right_held = true;
                Action::MoveRight
            }
            Control::Up => Action::Jump,
            Control::Down => Action::FastFall,
            Control::Attack => Action::Attack,
        };
        Some(Intent::new(self.side, action))
    }

    /// Register a control release
    pub(crate) fn release(&mut self, control: Control) -> Option<Intent> {
        let action = match control {
            Control::Left => {
                self.left_held = false;
                if self.right_held {
                    Action::MoveRight
                } else {
                    Action::StopMove
                }
            }
            Control::Right => {
                self.right_held = false;
                if self.left_held {
                    Action::MoveLeft
                } else {
                    Action::StopMove
                }
            }
            Control::Down => Action::StopFastFall,
            Control::Up | Control::Attack => return None,
        };
        Some(Intent::new(self.side, action))
    }

    /// Forget held keys; yields a stop intent if the fighter was moving
    pub fn reset(&mut self) -> Option<Intent> {
        let was_moving = self.left_held || self.right_held;
        self.left_held = false;
        self.right_held = false;
        was_moving.then(|| Intent::new(self.side, Action::StopMove))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(intent: Option<Intent>) -> Option<Action> {
        intent.map(|i| i.action)
    }

    #[test]
    fn test_press_maps_controls() {
        let mut input = FighterInput::new(Side::Player);
        assert_eq!(action(input.press(Control::Left)), Some(Action::MoveLeft));
        assert_eq!(action(input.press(Control::Up)), Some(Action::Jump));
        assert_eq!(action(input.press(Control::Down)), Some(Action::FastFall));
        assert_eq!(action(input.press(Control::Attack)), Some(Action::Attack));
    }

    #[test]
    fn test_intents_carry_side() {
        let mut input = FighterInput::new(Side::Enemy);
        let intent = input.press(Control::Attack);
        assert_eq!(intent, Some(Intent::new(Side::Enemy, Action::Attack)));
    }

    #[test]
    fn test_release_single_direction_stops() {
        let mut input = FighterInput::new(Side::Player);
        input.press(Control::Right);
        assert_eq!(action(input.release(Control::Right)), Some(Action::StopMove));
        assert!(!input.is_held(Control::Right));
    }

    #[test]
    fn test_release_with_other_direction_held_reverses() {
        let mut input = FighterInput::new(Side::Player);
        input.press(Control::Left);
        assert_eq!(action(input.press(Control::Right)), Some(Action::MoveRight));

        assert_eq!(action(input.release(Control::Right)), Some(Action::MoveLeft));
        assert_eq!(action(input.release(Control::Left)), Some(Action::StopMove));
    }

    #[test]
    fn test_release_down_stops_fast_fall() {
        let mut input = FighterInput::new(Side::Player);
        input.press(Control::Down);
        assert_eq!(action(input.release(Control::Down)), Some(Action::StopFastFall));
    }

    #[test]
    fn test_release_jump_and_attack_yield_nothing() {
        let mut input = FighterInput::new(Side::Player);
        assert_eq!(input.release(Control::Up), None);
        assert_eq!(input.release(Control::Attack), None);
    }

    #[test]
    fn test_reset_stops_only_when_moving() {
        let mut input = FighterInput::new(Side::Player);
        assert_eq!(input.reset(), None);

        input.press(Control::Left);
        assert_eq!(action(input.reset()), Some(Action::StopMove));
        assert!(!input.is_held(Control::Left));
    }
}
