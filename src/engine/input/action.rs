// Game action definitions and default key mappings

use winit::keyboard::KeyCode;

/// Which combatant an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    #[cfg(test)]
    pub(crate) const BOTH: [Side; 2] = [Side::Player, Side::Enemy];

    /// Name shown on the game-over banner
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player 1",
            Side::Enemy => "Player 2",
        }
    }
}

/// Abstract intents a combatant reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    StopMove,
    Jump,
    FastFall,
    StopFastFall,

    // Combat
    Attack,
}

/// An action addressed to one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub who: Side,
    pub action: Action,
}

impl Intent {
    pub fn new(who: Side, action: Action) -> Self {
        Self { who, action }
    }
}

/// Physical controls each combatant has; presses and releases of these
/// are turned into intents by `FighterInput`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Attack,
}

/// Actions that affect the match rather than a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    Pause,
    ToggleHitboxes,
}

/// What a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Fighter(Side, Control),
    Global(GlobalAction),
}

/// Default bindings for the left-hand fighter
pub fn default_player_bindings() -> Vec<(KeyCode, Control)> {
    vec![
        (KeyCode::KeyA, Control::Left),
        (KeyCode::KeyD, Control::Right),
        (KeyCode::KeyW, Control::Up),
        (KeyCode::KeyS, Control::Down),
        (KeyCode::Space, Control::Attack),
    ]
}

/// Default bindings for the right-hand fighter
pub fn default_enemy_bindings() -> Vec<(KeyCode, Control)> {
    vec![
        (KeyCode::ArrowLeft, Control::Left),
        (KeyCode::ArrowRight, Control::Right),
        (KeyCode::ArrowUp, Control::Up),
        (KeyCode::ArrowDown, Control::Down),
        (KeyCode::Enter, Control::Attack),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(KeyCode, GlobalAction)> {
    vec![
        (KeyCode::KeyP, GlobalAction::Pause),
        (KeyCode::F1, GlobalAction::ToggleHitboxes),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Player.label(), "Player 1");
        assert_eq!(Side::Enemy.label(), "Player 2");
    }

    #[test]
    fn test_default_bindings_cover_every_control() {
        for bindings in [default_player_bindings(), default_enemy_bindings()] {
            let controls: HashSet<Control> = bindings.iter().map(|(_, c)| *c).collect();
            assert_eq!(controls.len(), 5);
        }
    }

    #[test]
    fn test_no_key_bound_twice() {
        let mut seen = HashSet::new();
        let keys = default_player_bindings()
            .into_iter()
            .map(|(k, _)| k)
            .chain(default_enemy_bindings().into_iter().map(|(k, _)| k))
            .chain(global_bindings().into_iter().map(|(k, _)| k));
        for key in keys {
            assert!(seen.insert(key), "Duplicate key {key:?} in default bindings");
        }
    }
}
