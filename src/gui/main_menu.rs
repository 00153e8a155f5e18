//! Main Menu Screen
//!
//! The first screen: the logo and three options.
//! - Play: there is no game behind it yet, so it only logs
//! - Settings: opens the settings screen
//! - Exit: stops the application

use super::{MenuCursor, MenuStyle};
use crate::assets::AssetId;
use crate::input_system::MenuAction;
use crate::node::{Element, Node, Text};
use crate::scene::{GAME_TITLE, SceneBase, SceneCommand, SceneContext, SceneError, SceneKind};
use crate::text::DEFAULT_FONT;

/// Options in the main menu, in draw-list order after the logo
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MainMenuOption {
    Play,
    Settings,
    Exit,
}

impl MainMenuOption {
    pub fn all() -> Vec<Self> {
        vec![Self::Play, Self::Settings, Self::Exit]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Play => "Play",
            Self::Settings => "Settings",
            Self::Exit => "Exit",
        }
    }

    /// Index of this option in the draw list
    pub fn index(&self) -> usize {
        match self {
            Self::Play => 1,
            Self::Settings => 2,
            Self::Exit => 3,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::all().into_iter().find(|option| option.index() == index)
    }
}

const LOGO_SIZE: (u32, u32) = (450, 175);
const LOGO_Y: i32 = 180;
const FIRST_OPTION_Y: i32 = 350;
const OPTION_SPACING: i32 = 65;
const OPTION_FONT_SIZE: u32 = 60;

pub struct MainMenu {
    base: SceneBase,
    cursor: MenuCursor,
    style: MenuStyle,
}

impl MainMenu {
    pub fn new(ctx: &SceneContext) -> Result<Self, SceneError> {
        let mut base = SceneBase::new(GAME_TITLE, ctx)?;
        let style = MenuStyle::default();
        let center_x = (ctx.window_size.0 / 2) as i32;

        let logo = ctx.assets.picture(AssetId::Logo)?;
        base.elements.push(Element::Image(Node::new(logo, LOGO_SIZE, (center_x, LOGO_Y))));

        for (i, option) in MainMenuOption::all().iter().enumerate() {
            base.elements.push(Element::Text(Text::new(
                option.label(),
                OPTION_FONT_SIZE,
                style.item_color,
                DEFAULT_FONT,
                (center_x, FIRST_OPTION_Y + OPTION_SPACING * i as i32),
            )));
        }

        let cursor = MenuCursor::new(MainMenuOption::Play.index(), MainMenuOption::Exit.index());
        cursor.highlight_all(&mut base.elements, &style);

        Ok(MainMenu { base, cursor, style })
    }

    pub fn base(&self) -> &SceneBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    #[cfg(test)]
    pub fn selected_index(&self) -> usize {
        self.cursor.selected_index()
    }

    /// Get selected option
    pub fn selected_option(&self) -> MainMenuOption {
        MainMenuOption::from_index(self.cursor.selected_index()).unwrap_or(MainMenuOption::Play)
    }

    pub fn handle_action(&mut self, action: MenuAction) -> SceneCommand {
        match action {
            MenuAction::Up => {
                if let Some(change) = self.cursor.select_previous() {
                    MenuCursor::apply(&mut self.base.elements, change, &self.style);
                }
                SceneCommand::None
            }
            MenuAction::Down => {
                if let Some(change) = self.cursor.select_next() {
                    MenuCursor::apply(&mut self.base.elements, change, &self.style);
                }
                SceneCommand::None
            }
            MenuAction::Confirm => match self.selected_option() {
                MainMenuOption::Play => {
                    log::info!("Play selected, but there is no game to start");
                    SceneCommand::None
                }
                MainMenuOption::Settings => SceneCommand::Open(SceneKind::Settings),
                MainMenuOption::Exit => SceneCommand::Exit,
            },
            _ => SceneCommand::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::test_support::FixedCatalog;

    fn menu() -> MainMenu {
        let store = ConfigStore::new("unused.json");
        let catalog = FixedCatalog::default();
        let ctx = SceneContext {
            window_size: (700, 700),
            assets: &catalog,
            config: &store,
        };
        MainMenu::new(&ctx).unwrap()
    }

    fn highlighted(menu: &MainMenu) -> Vec<usize> {
        let style = MenuStyle::default();
        menu.base()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.as_text().is_some_and(|t| t.color() == style.selected_item_color))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_layout() {
        let menu = menu();
        let elements = &menu.base().elements;
        assert_eq!(elements.len(), 4);
        assert!(matches!(elements[0], Element::Image(_)));

        let labels: Vec<&str> = elements.iter().filter_map(|e| e.as_text()).map(|t| t.content()).collect();
        assert_eq!(labels, vec!["Play", "Settings", "Exit"]);
        assert_eq!(menu.base().caption(), GAME_TITLE);
    }

    #[test]
    fn test_starts_on_play_highlighted() {
        let menu = menu();
        assert_eq!(menu.selected_option(), MainMenuOption::Play);
        assert_eq!(highlighted(&menu), vec![1]);
    }

    #[test]
    fn test_up_from_play_wraps_to_exit() {
        let mut menu = menu();
        assert_eq!(menu.handle_action(MenuAction::Up), SceneCommand::None);
        assert_eq!(menu.selected_option(), MainMenuOption::Exit);
        assert_eq!(highlighted(&menu), vec![3]);
    }

    #[test]
    fn test_down_from_exit_wraps_to_play() {
        let mut menu = menu();
        menu.handle_action(MenuAction::Down);
        menu.handle_action(MenuAction::Down);
        assert_eq!(menu.selected_index(), 3);
        menu.handle_action(MenuAction::Down);
        assert_eq!(menu.selected_index(), 1);
        assert_eq!(highlighted(&menu), vec![1]);
    }

    #[test]
    fn test_confirm_commands() {
        let mut menu = menu();
        assert_eq!(menu.handle_action(MenuAction::Confirm), SceneCommand::None);

        menu.handle_action(MenuAction::Down);
        assert_eq!(menu.handle_action(MenuAction::Confirm), SceneCommand::Open(SceneKind::Settings));

        menu.handle_action(MenuAction::Down);
        assert_eq!(menu.handle_action(MenuAction::Confirm), SceneCommand::Exit);
    }

    #[test]
    fn test_left_right_back_ignored() {
        let mut menu = menu();
        for action in [MenuAction::Left, MenuAction::Right, MenuAction::Back] {
            assert_eq!(menu.handle_action(action), SceneCommand::None);
        }
        assert_eq!(menu.selected_index(), 1);
    }
}
