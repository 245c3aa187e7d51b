use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::{error, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetManager;
use engine::input::{InputEvent, InputManager};
use engine::renderer::{Canvas, Presenter};
use game::{Match, WorldConfig};

/// Environment variable overriding the asset directory
const ASSET_DIR_VAR: &str = "RUSTED_DUEL_ASSETS";
const DEFAULT_ASSET_DIR: &str = "assets";

fn main() -> Result<()> {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Rusted Duel...");

    let world = WorldConfig::standard();

    let asset_dir = std::env::var(ASSET_DIR_VAR).unwrap_or_else(|_| DEFAULT_ASSET_DIR.to_string());
    let mut assets = AssetManager::new(&asset_dir);
    info!("Loading assets from {}", assets.loader().base_path().display());

    let font = match assets.load_font() {
        Ok(Some(font)) => Some(font),
        Ok(None) => {
            warn!("No font under {}; text will not be drawn", asset_dir);
            None
        }
        Err(e) => {
            warn!("Font failed to load, text will not be drawn: {}", e);
            None
        }
    };
    let mut canvas = Canvas::new(world.width as u32, world.height as u32).with_font(font);

    let mut duel = Match::new(world.clone(), |path| assets.load_image(path))?;
    let mut input = InputManager::default();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Rusted Duel")
            .with_inner_size(winit::dpi::LogicalSize::new(world.width, world.height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut presenter = pollster::block_on(Presenter::new(
        window.clone(),
        canvas.width(),
        canvas.height(),
    ))?;

    let mut assets_reported = false;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    presenter.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    match input.process_keyboard_event(&event) {
                        Some(InputEvent::Intent(intent)) => duel.apply_intent(intent),
                        Some(InputEvent::Global(action)) => duel.apply_global(action),
                        None => {}
                    }
                }
                WindowEvent::Focused(false) => {
                    // Keys released while unfocused never arrive
                    for event in input.reset_all() {
                        if let InputEvent::Intent(intent) = event {
                            duel.apply_intent(intent);
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    duel.on_frame(Instant::now(), &mut canvas);

                    if !assets_reported {
                        let stats = assets.stats();
                        if stats.all_ready() {
                            info!("All {} images loaded", stats.image_count);
                            assets_reported = true;
                        }
                    }

                    if let Err(e) = presenter.present(canvas.frame()) {
                        error!("Failed to present frame: {}", e);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
