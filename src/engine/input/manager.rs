// Input manager - turns keyboard events into intents and global actions

use super::action::{Binding, GlobalAction, Intent, Side};
use super::config::KeyBindings;
use super::player::FighterInput;
use log::trace;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Something the match should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Intent(Intent),
    Global(GlobalAction),
}

/// Routes keys to the two fighters and the global controls
pub struct InputManager {
    bindings: KeyBindings,
    fighters: [FighterInput; 2],
}

impl InputManager {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            fighters: [
                FighterInput::new(Side::Player),
                FighterInput::new(Side::Enemy),
            ],
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<InputEvent> {
        // Only physical key codes are bound
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return None;
        };
        self.handle_key(
            key_code,
            event.state == ElementState::Pressed,
            event.repeat,
        )
    }

    /// Handle one key transition; key repeats are ignored
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) -> Option<InputEvent> {
        if repeat {
            return None;
        }

        let event = match self.bindings.get(key)? {
            Binding::Global(action) => pressed.then_some(InputEvent::Global(action)),
            Binding::Fighter(side, control) => {
                let fighter = self.fighter_mut(side);
                let intent = if pressed {
                    fighter.press(control)
                } else {
                    fighter.release(control)
                };
                intent.map(InputEvent::Intent)
            }
        };

        if let Some(event) = event {
            trace!("{key:?} {} -> {event:?}", if pressed { "down" } else { "up" });
        }
        event
    }

    /// Release every held key, e.g. when the window loses focus
    pub fn reset_all(&mut self) -> Vec<InputEvent> {
        self.fighters
            .iter_mut()
            .filter_map(|f| f.reset())
            .map(InputEvent::Intent)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn fighter(&self, side: Side) -> &FighterInput {
        match side {
            Side::Player => &self.fighters[0],
            Side::Enemy => &self.fighters[1],
        }
    }

    fn fighter_mut(&mut self, side: Side) -> &mut FighterInput {
        match side {
            Side::Player => &mut self.fighters[0],
            Side::Enemy => &mut self.fighters[1],
        }
    }

    #[cfg(test)]
    pub(crate) fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    #[cfg(test)]
    pub(crate) fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(KeyBindings::defaults())
    }
}
