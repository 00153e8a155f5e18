mod app;
mod assets;
mod config;
mod gui;
mod input_system;
mod node;
mod platform;
mod render;
mod scene;
mod text;

#[cfg(test)]
mod test_support;

use app::App;
use assets::TextureCache;
use config::ConfigStore;
use platform::{SdlPlatform, SdlWindow};
use scene::GAME_TITLE;

// Window constants
const WINDOW_WIDTH: u32 = 700;
const WINDOW_HEIGHT: u32 = 700;
const TARGET_FPS: u32 = 120;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let window = SdlWindow::open(GAME_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;

    // Textures borrow the creator, so it must outlive the platform
    let texture_creator = window.texture_creator();
    let textures = TextureCache::load(&texture_creator).map_err(|e| e.to_string())?;

    let store = ConfigStore::default_location();
    log::info!("Settings file: {}", store.path().display());

    println!("Controls:");
    println!("Arrows / WASD - Navigate");
    println!("Left / Right  - Change setting");
    println!("Enter         - Select / Save");
    println!("ESC           - Back without saving");

    let platform = SdlPlatform::new(window, textures, TARGET_FPS);
    let mut app = App::new(platform, store).map_err(|e| {
        log::error!("Startup failed: {}", e);
        e.to_string()
    })?;

    app.run().map_err(|e| {
        log::error!("{}", e);
        e.to_string()
    })
}
