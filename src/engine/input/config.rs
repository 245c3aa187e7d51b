// Key binding configuration and remapping

use super::action::{
    default_enemy_bindings, default_player_bindings, global_bindings, Binding, Side,
};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to fighter controls or global actions
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Mapping from keys to bindings
    bindings: HashMap<KeyCode, Binding>,

    /// Reverse mapping for quick lookups (binding -> all keys)
    binding_to_keys: HashMap<Binding, Vec<KeyCode>>,
}

impl KeyBindings {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            binding_to_keys: HashMap::new(),
        }
    }

    /// Both fighters' default layouts plus the global keys
    pub fn defaults() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }

    /// Bind a key, replacing whatever it was bound to before
    pub fn bind(&mut self, key: KeyCode, binding: Binding) {
        self.unbind_key(key);

        self.bindings.insert(key, binding);
        self.binding_to_keys.entry(binding).or_default().push(key);
    }

    /// Unbind a single key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(binding) = self.bindings.remove(&key) {
            if let Some(keys) = self.binding_to_keys.get_mut(&binding) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.binding_to_keys.remove(&binding);
                }
            }
        }
    }

    /// Unbind every key mapped to `binding`
    #[cfg(test)]
    pub(crate) fn unbind(&mut self, binding: Binding) {
        if let Some(keys) = self.binding_to_keys.remove(&binding) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    /// Get the binding for a key
    pub fn get(&self, key: KeyCode) -> Option<Binding> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to `binding`
    #[cfg(test)]
    pub(crate) fn keys_for(&self, binding: Binding) -> Vec<KeyCode> {
        self.binding_to_keys
            .get(&binding)
            .cloned()
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn is_bound(&self, key: KeyCode) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.binding_to_keys.clear();
    }

    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (key, control) in default_player_bindings() {
            self.bind(key, Binding::Fighter(Side::Player, control));
        }
        for (key, control) in default_enemy_bindings() {
            self.bind(key, Binding::Fighter(Side::Enemy, control));
        }
        for (key, action) in global_bindings() {
            self.bind(key, Binding::Global(action));
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::{Control, GlobalAction};

    #[test]
    fn test_defaults_map_both_fighters() {
        let config = KeyBindings::defaults();
        assert_eq!(
            config.get(KeyCode::KeyA),
            Some(Binding::Fighter(Side::Player, Control::Left))
        );
        assert_eq!(
            config.get(KeyCode::Enter),
            Some(Binding::Fighter(Side::Enemy, Control::Attack))
        );
        assert_eq!(
            config.get(KeyCode::KeyP),
            Some(Binding::Global(GlobalAction::Pause))
        );
    }

    #[test]
    fn test_bind_and_unbind_key() {
        let mut config = KeyBindings::new();
        let binding = Binding::Fighter(Side::Player, Control::Up);
        config.bind(KeyCode::KeyK, binding);
        assert_eq!(config.get(KeyCode::KeyK), Some(binding));

        config.unbind_key(KeyCode::KeyK);
        assert_eq!(config.get(KeyCode::KeyK), None);
        assert!(config.keys_for(binding).is_empty());
    }

    #[test]
    fn test_rebind_key_moves_it() {
        let mut config = KeyBindings::defaults();
        config.bind(KeyCode::KeyA, Binding::Fighter(Side::Player, Control::Right));

        assert!(config
            .keys_for(Binding::Fighter(Side::Player, Control::Left))
            .is_empty());
        let right = config.keys_for(Binding::Fighter(Side::Player, Control::Right));
        assert!(right.contains(&KeyCode::KeyA));
        assert!(right.contains(&KeyCode::KeyD));
    }

    #[test]
    fn test_unbind_removes_all_keys() {
        let mut config = KeyBindings::defaults();
        let attack = Binding::Fighter(Side::Player, Control::Attack);
        config.bind(KeyCode::KeyF, attack);
        config.unbind(attack);

        assert!(!config.is_bound(KeyCode::Space));
        assert!(!config.is_bound(KeyCode::KeyF));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut config = KeyBindings::defaults();
        config.clear();
        assert!(!config.is_bound(KeyCode::KeyW));

        config.reset_to_defaults();
        assert!(config.is_bound(KeyCode::KeyW));
        assert!(config.is_bound(KeyCode::ArrowUp));
    }
}
