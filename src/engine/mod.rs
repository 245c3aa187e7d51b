// Engine modules: assets, frame timing, input, physics, rendering

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
