//! Application driver
//!
//! [`App`] is the explicit application context: it owns the platform, the
//! settings store, the single active scene slot and the running flag. Scene
//! transitions replace the slot wholesale; scenes never reach back into the
//! app.

use crate::config::ConfigStore;
use crate::input_system::MenuAction;
use crate::platform::Platform;
use crate::scene::{Scene, SceneCommand, SceneContext, SceneError, SceneKind};
use std::fmt;

/// Errors that stop the application
#[derive(Debug)]
pub enum AppError {
    /// SDL2 call failed
    Sdl(String),
    /// Building or driving a scene failed
    Scene(SceneError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            AppError::Scene(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SceneError> for AppError {
    fn from(error: SceneError) -> Self {
        AppError::Scene(error)
    }
}

impl From<String> for AppError {
    fn from(error: String) -> Self {
        AppError::Sdl(error)
    }
}

pub struct App<P: Platform> {
    platform: P,
    config: ConfigStore,
    scene: Scene,
    running: bool,
}

impl<P: Platform> App<P> {
    /// Creates the app with a fresh main menu as the active scene
    pub fn new(mut platform: P, config: ConfigStore) -> Result<Self, AppError> {
        let scene = Self::build_scene(&platform, &config, SceneKind::MainMenu)?;
        platform.set_caption(scene.caption())?;

        Ok(App {
            platform,
            config,
            scene,
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[cfg(test)]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Runs frames until a quit or exit request
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.is_running() {
            self.frame()?;
        }

        log::info!("Shutting down");
        Ok(())
    }

    /// One loop iteration: drain input, draw, wait for the next frame
    ///
    /// A quit request clears the running flag but the frame still draws.
    pub fn frame(&mut self) -> Result<(), AppError> {
        for action in self.platform.poll_actions() {
            if action == MenuAction::Quit {
                self.running = false;
            }

            let command = self.scene.handle_action(action)?;
            self.apply(command)?;
        }

        self.scene.draw(&mut self.platform)?;
        self.platform.wait_for_next_frame();

        Ok(())
    }

    fn apply(&mut self, command: SceneCommand) -> Result<(), AppError> {
        match command {
            SceneCommand::None => {}
            SceneCommand::Exit => {
                log::info!("Exit selected");
                self.running = false;
            }
            SceneCommand::Open(kind) => {
                let scene = Self::build_scene(&self.platform, &self.config, kind)?;
                self.platform.set_caption(scene.caption())?;
                self.scene = scene;
                log::info!("Switched to {:?}", self.scene.kind());
            }
        }

        Ok(())
    }

    fn build_scene(platform: &P, config: &ConfigStore, kind: SceneKind) -> Result<Scene, SceneError> {
        let ctx = SceneContext {
            window_size: platform.output_size(),
            assets: platform,
            config,
        };
        Scene::create(kind, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetCatalog, AssetError, AssetId, Picture};
    use crate::config::{SettingsDocument, ShipColor};
    use crate::render::Renderer;
    use crate::test_support::{FixedCatalog, RecordingRenderer};
    use crate::text::GlyphImage;
    use std::collections::VecDeque;

    /// Feeds one scripted batch of actions per frame, then quits
    struct ScriptedPlatform {
        frames: VecDeque<Vec<MenuAction>>,
        renderer: RecordingRenderer,
        catalog: FixedCatalog,
        waits: usize,
    }

    impl ScriptedPlatform {
        fn new(frames: Vec<Vec<MenuAction>>) -> Self {
            ScriptedPlatform {
                frames: frames.into(),
                renderer: RecordingRenderer::new(700, 700),
                catalog: FixedCatalog::default(),
                waits: 0,
            }
        }
    }

    impl Renderer for ScriptedPlatform {
        fn output_size(&self) -> (u32, u32) {
            self.renderer.output_size()
        }

        fn set_caption(&mut self, caption: &str) -> Result<(), String> {
            self.renderer.set_caption(caption)
        }

        fn draw_picture(&mut self, asset: AssetId, position: (i32, i32), size: (u32, u32)) -> Result<(), String> {
            self.renderer.draw_picture(asset, position, size)
        }

        fn draw_glyphs(&mut self, glyphs: &GlyphImage, position: (i32, i32)) -> Result<(), String> {
            self.renderer.draw_glyphs(glyphs, position)
        }

        fn present(&mut self) {
            self.renderer.present();
        }
    }

    impl AssetCatalog for ScriptedPlatform {
        fn picture(&self, asset: AssetId) -> Result<Picture, AssetError> {
            self.catalog.picture(asset)
        }
    }

    impl Platform for ScriptedPlatform {
        fn poll_actions(&mut self) -> Vec<MenuAction> {
            self.frames.pop_front().unwrap_or_else(|| vec![MenuAction::Quit])
        }

        fn wait_for_next_frame(&mut self) {
            self.waits += 1;
        }
    }

    fn app(frames: Vec<Vec<MenuAction>>, store: ConfigStore) -> App<ScriptedPlatform> {
        App::new(ScriptedPlatform::new(frames), store).unwrap()
    }

    fn selected_index(app: &App<ScriptedPlatform>) -> usize {
        match app.scene() {
            Scene::MainMenu(menu) => menu.selected_index(),
            Scene::Settings(settings) => settings.selected_index(),
        }
    }

    #[test]
    fn test_starts_on_main_menu() {
        let app = app(vec![], ConfigStore::new("unused.json"));
        assert!(app.is_running());
        assert_eq!(app.scene().kind(), SceneKind::MainMenu);
        assert_eq!(app.platform().renderer.caption, "Space Invaders");
    }

    #[test]
    fn test_quit_finishes_current_frame() {
        let mut app = app(
            vec![vec![], vec![MenuAction::Quit, MenuAction::Down]],
            ConfigStore::new("unused.json"),
        );
        app.run().unwrap();

        assert!(!app.is_running());
        // Both frames drew and presented; nothing ran after the quit frame
        assert_eq!(app.platform().renderer.presents(), 2);
        assert_eq!(app.platform().waits, 2);
        // Actions after Quit in the same drain are still dispatched
        assert_eq!(selected_index(&app), 2);
    }

    #[test]
    fn test_exit_option_stops_loop() {
        let mut app = app(
            vec![vec![MenuAction::Up], vec![MenuAction::Confirm], vec![MenuAction::Down]],
            ConfigStore::new("unused.json"),
        );
        app.run().unwrap();

        assert_eq!(app.platform().renderer.presents(), 2);
        assert_eq!(selected_index(&app), 3);
    }

    #[test]
    fn test_settings_round_trip_through_scenes() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("settings.json"));
        let mut app = app(
            vec![
                vec![MenuAction::Down, MenuAction::Confirm],
                vec![MenuAction::Right, MenuAction::Right],
                vec![MenuAction::Confirm],
            ],
            store.clone(),
        );

        app.frame().unwrap();
        assert_eq!(app.scene().kind(), SceneKind::Settings);
        assert_eq!(app.platform().renderer.caption, "Space Invaders - Settings");

        app.frame().unwrap();
        app.frame().unwrap();
        assert_eq!(app.scene().kind(), SceneKind::MainMenu);
        assert_eq!(selected_index(&app), 1);
        assert!(app.is_running());

        let saved = store.load().unwrap();
        assert_eq!(saved.settings.player_velocity, 7);
        assert_eq!(saved.settings.player_color, ShipColor::Yellow);
    }

    #[test]
    fn test_escape_from_settings_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("settings.json"));
        store.save(&SettingsDocument::default()).unwrap();

        let mut app = app(
            vec![
                vec![MenuAction::Down, MenuAction::Confirm],
                vec![MenuAction::Up, MenuAction::Left, MenuAction::Back],
            ],
            store.clone(),
        );
        app.frame().unwrap();
        app.frame().unwrap();

        assert_eq!(app.scene().kind(), SceneKind::MainMenu);
        assert_eq!(store.load().unwrap(), SettingsDocument::default());
    }
}
