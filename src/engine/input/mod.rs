// Input handling system
//
// Keyboard events are routed through remappable key bindings to either a
// fighter's controls or a global action. Fighter controls are turned into
// abstract intents that the match applies between frames.
//
// ## Architecture
//
// - `action`: Sides, intents, controls and default key bindings
// - `player`: Per-fighter held-key state
// - `config`: Key binding configuration and remapping
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputEvent, InputManager};
//
// let mut input = InputManager::default();
//
// // In your event loop
// match input.process_keyboard_event(&key_event) {
//     Some(InputEvent::Intent(intent)) => duel.apply_intent(intent),
//     Some(InputEvent::Global(action)) => duel.apply_global(action),
//     None => {}
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, Binding, Control, GlobalAction, Intent, Side};
pub use config::KeyBindings;
pub use manager::{InputEvent, InputManager};
