//! Scenes
//!
//! A scene is one full screen: a scrolling starfield background, an ordered
//! draw list and its own reaction to input. Concrete scenes live in
//! [`crate::gui`]; this module holds what they share and the [`Scene`] enum
//! the application keeps in its single active slot.
//!
//! # Architecture
//!
//! - `SceneBase`: background, scroll offsets, draw list, caption
//! - `Scene`: tagged variant over the concrete screens
//! - `SceneCommand`: what a scene asks the driver to do after an input

use crate::assets::{AssetCatalog, AssetError, AssetId};
use crate::config::{ConfigError, ConfigStore};
use crate::gui::{MainMenu, SettingsScreen};
use crate::input_system::MenuAction;
use crate::node::{Element, Node};
use crate::render::Renderer;
use std::fmt;

/// Caption shared by every screen
pub const GAME_TITLE: &str = "Space Invaders";

/// Vertical offsets of the two stacked background copies
///
/// The copies stay exactly one window height apart, so together they
/// always cover the window while scrolling downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOffsets {
    pub y1: i32,
    pub y2: i32,
    height: i32,
}

impl ScrollOffsets {
    pub fn new(window_height: u32) -> Self {
        let height = window_height as i32;
        ScrollOffsets {
            y1: 0,
            y2: -height,
            height,
        }
    }

    /// Moves both copies down by one pixel, wrapping to `-height`
    pub fn advance(&mut self) {
        self.y1 = Self::step(self.y1, self.height);
        self.y2 = Self::step(self.y2, self.height);
    }

    fn step(offset: i32, height: i32) -> i32 {
        let next = offset + 1;
        if next >= height { next - 2 * height } else { next }
    }
}

/// State shared by every scene
#[derive(Debug, Clone)]
pub struct SceneBase {
    caption: String,
    background: Node,
    scroll: ScrollOffsets,
    pub elements: Vec<Element>,
}

impl SceneBase {
    /// Creates an empty scene with the background scaled to the window
    pub fn new(caption: impl Into<String>, ctx: &SceneContext) -> Result<Self, SceneError> {
        let (width, height) = ctx.window_size;
        let picture = ctx.assets.picture(AssetId::Background)?;
        let background = Node::new(picture, (width, height), ((width / 2) as i32, (height / 2) as i32));

        Ok(SceneBase {
            caption: caption.into(),
            background,
            scroll: ScrollOffsets::new(height),
            elements: Vec::new(),
        })
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn scroll(&self) -> ScrollOffsets {
        self.scroll
    }

    /// Draws one frame: background copies, then elements in list order
    pub fn draw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), String> {
        self.background.draw_at(renderer, (0, self.scroll.y1))?;
        self.background.draw_at(renderer, (0, self.scroll.y2))?;
        self.scroll.advance();

        for element in &self.elements {
            element.draw(renderer)?;
        }

        renderer.present();
        Ok(())
    }
}

/// Collaborators a scene needs while it is being built
pub struct SceneContext<'a> {
    pub window_size: (u32, u32),
    pub assets: &'a dyn AssetCatalog,
    pub config: &'a ConfigStore,
}

/// Screens the driver can switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    MainMenu,
    Settings,
}

/// What the driver should do after a scene handled an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Stay on the current scene
    None,
    /// Replace the active scene with a fresh one
    Open(SceneKind),
    /// Stop the event loop after the current frame
    Exit,
}

/// The active screen
pub enum Scene {
    MainMenu(MainMenu),
    Settings(SettingsScreen),
}

impl Scene {
    /// Builds a fresh scene of the given kind
    pub fn create(kind: SceneKind, ctx: &SceneContext) -> Result<Self, SceneError> {
        Ok(match kind {
            SceneKind::MainMenu => Scene::MainMenu(MainMenu::new(ctx)?),
            SceneKind::Settings => Scene::Settings(SettingsScreen::new(ctx)?),
        })
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::MainMenu(_) => SceneKind::MainMenu,
            Scene::Settings(_) => SceneKind::Settings,
        }
    }

    pub fn base(&self) -> &SceneBase {
        match self {
            Scene::MainMenu(menu) => menu.base(),
            Scene::Settings(settings) => settings.base(),
        }
    }

    pub fn caption(&self) -> &str {
        self.base().caption()
    }

    pub fn handle_action(&mut self, action: MenuAction) -> Result<SceneCommand, SceneError> {
        match self {
            Scene::MainMenu(menu) => Ok(menu.handle_action(action)),
            Scene::Settings(settings) => settings.handle_action(action),
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), String> {
        match self {
            Scene::MainMenu(menu) => menu.base_mut().draw(renderer),
            Scene::Settings(settings) => settings.base_mut().draw(renderer),
        }
    }
}

/// Errors that can occur while building or driving a scene
#[derive(Debug)]
pub enum SceneError {
    Asset(AssetError),
    Config(ConfigError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SceneError::Asset(e) => write!(f, "Asset error: {}", e),
            SceneError::Config(e) => write!(f, "Settings error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<AssetError> for SceneError {
    fn from(error: AssetError) -> Self {
        SceneError::Asset(error)
    }
}

impl From<ConfigError> for SceneError {
    fn from(error: ConfigError) -> Self {
        SceneError::Config(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DrawOp, FixedCatalog, RecordingRenderer};

    #[test]
    fn test_scroll_starts_one_window_apart() {
        let scroll = ScrollOffsets::new(700);
        assert_eq!((scroll.y1, scroll.y2), (0, -700));
    }

    #[test]
    fn test_scroll_period_is_window_height_modulo() {
        let height = 700;
        let mut scroll = ScrollOffsets::new(height);
        for _ in 0..height {
            scroll.advance();
        }
        assert_eq!(scroll.y1.rem_euclid(700), 0);
        assert_eq!(scroll.y2.rem_euclid(700), (-700i32).rem_euclid(700));
    }

    #[test]
    fn test_scroll_copies_stay_one_window_apart() {
        let mut scroll = ScrollOffsets::new(50);
        for _ in 0..500 {
            scroll.advance();
            assert_eq!((scroll.y1 - scroll.y2).abs(), 50);
            assert!((-50..50).contains(&scroll.y1));
            assert!((-50..50).contains(&scroll.y2));
        }
    }

    #[test]
    fn test_draw_order_background_elements_present() {
        let store = ConfigStore::new("unused.json");
        let catalog = FixedCatalog::default();
        let ctx = SceneContext {
            window_size: (700, 700),
            assets: &catalog,
            config: &store,
        };
        let mut base = SceneBase::new("Test", &ctx).unwrap();
        let logo = catalog.picture(AssetId::Logo).unwrap();
        base.elements.push(Element::Image(Node::new(logo, (10, 10), (5, 5))));

        let mut renderer = RecordingRenderer::new(700, 700);
        base.draw(&mut renderer).unwrap();

        assert_eq!(
            renderer.ops,
            vec![
                DrawOp::Picture { asset: AssetId::Background, position: (0, 0), size: (700, 700) },
                DrawOp::Picture { asset: AssetId::Background, position: (0, -700), size: (700, 700) },
                DrawOp::Picture { asset: AssetId::Logo, position: (0, 0), size: (10, 10) },
                DrawOp::Present,
            ]
        );
        assert_eq!(base.scroll(), {
            let mut expected = ScrollOffsets::new(700);
            expected.advance();
            expected
        });
    }

    #[test]
    fn test_draws_for_window_height_frames_wrap_offsets() {
        let store = ConfigStore::new("unused.json");
        let catalog = FixedCatalog::default();
        let ctx = SceneContext {
            window_size: (700, 700),
            assets: &catalog,
            config: &store,
        };
        let mut base = SceneBase::new("Test", &ctx).unwrap();
        let mut renderer = RecordingRenderer::new(700, 700);

        for _ in 0..700 {
            base.draw(&mut renderer).unwrap();
        }

        assert_eq!(renderer.presents(), 700);
        assert_eq!(base.scroll().y1.rem_euclid(700), 0);
        assert_eq!(base.scroll().y2.rem_euclid(700), 0);
    }
}
