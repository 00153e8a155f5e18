//! Settings Screen
//!
//! Shows the persisted settings and lets the player tune them:
//! - Up/Down move between the three numeric rows
//! - Left/Right change the selected value by its step
//! - Enter saves the whole document and returns to the main menu
//! - Escape drops the edits and returns to the main menu
//!
//! The document is loaded when the screen is built, so every visit starts
//! from what is on disk.

use super::{MenuCursor, MenuStyle};
use crate::assets::AssetId;
use crate::config::{ConfigStore, SettingField, SettingsDocument};
use crate::input_system::MenuAction;
use crate::node::{Element, Node, Text};
use crate::scene::{GAME_TITLE, SceneBase, SceneCommand, SceneContext, SceneError, SceneKind};
use crate::text::DEFAULT_FONT;

const TITLE_Y: i32 = 100;
const TITLE_FONT_SIZE: u32 = 60;
const FIRST_ROW_Y: i32 = 220;
const ROW_SPACING: i32 = 70;
const ROW_FONT_SIZE: u32 = 32;
const SHIP_SIZE: (u32, u32) = (100, 90);
const SHIP_Y: i32 = 470;
const HINT_Y: i32 = 590;
const HINT_SPACING: i32 = 50;
const HINT_FONT_SIZE: u32 = 24;

/// Draw-list index of the first editable row
const FIRST_ROW_INDEX: usize = 1;

pub struct SettingsScreen {
    base: SceneBase,
    cursor: MenuCursor,
    style: MenuStyle,
    store: ConfigStore,
    document: SettingsDocument,
}

impl SettingsScreen {
    pub fn new(ctx: &SceneContext) -> Result<Self, SceneError> {
        let document = ctx.config.load()?;
        let mut base = SceneBase::new(format!("{} - Settings", GAME_TITLE), ctx)?;
        let style = MenuStyle::default();
        let center_x = (ctx.window_size.0 / 2) as i32;

        base.elements.push(Element::Text(Text::new(
            "Settings",
            TITLE_FONT_SIZE,
            style.item_color,
            DEFAULT_FONT,
            (center_x, TITLE_Y),
        )));

        for (i, field) in SettingField::all().iter().enumerate() {
            base.elements.push(Element::Text(Text::new(
                document.settings.row_label(*field),
                ROW_FONT_SIZE,
                style.item_color,
                DEFAULT_FONT,
                (center_x, FIRST_ROW_Y + ROW_SPACING * i as i32),
            )));
        }

        let ship = ctx.assets.picture(AssetId::Ship(document.settings.player_color))?;
        base.elements.push(Element::Image(Node::new(ship, SHIP_SIZE, (center_x, SHIP_Y))));

        for (i, hint) in ["Enter: Save", "Esc: Back"].iter().enumerate() {
            base.elements.push(Element::Text(Text::new(
                *hint,
                HINT_FONT_SIZE,
                style.hint_color,
                DEFAULT_FONT,
                (center_x, HINT_Y + HINT_SPACING * i as i32),
            )));
        }

        let last_row_index = FIRST_ROW_INDEX + SettingField::all().len() - 1;
        let cursor = MenuCursor::new(FIRST_ROW_INDEX, last_row_index);
        cursor.highlight_all(&mut base.elements, &style);

        Ok(SettingsScreen {
            base,
            cursor,
            style,
            store: ctx.config.clone(),
            document,
        })
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

    /// The in-memory document, including unsaved edits
    #[cfg(test)]
    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }

    /// Setting bound to the selected row
    pub fn selected_field(&self) -> SettingField {
        let fields = SettingField::all();
        fields[self.cursor.selected_index() - FIRST_ROW_INDEX]
    }

    pub fn handle_action(&mut self, action: MenuAction) -> Result<SceneCommand, SceneError> {
        match action {
            MenuAction::Up => {
                if let Some(change) = self.cursor.select_previous() {
                    MenuCursor::apply(&mut self.base.elements, change, &self.style);
                }
            }
            MenuAction::Down => {
                if let Some(change) = self.cursor.select_next() {
                    MenuCursor::apply(&mut self.base.elements, change, &self.style);
                }
            }
            MenuAction::Left => self.adjust_selected(-1),
            MenuAction::Right => self.adjust_selected(1),
            MenuAction::Confirm => {
                self.store.save(&self.document)?;
                return Ok(SceneCommand::Open(SceneKind::MainMenu));
            }
            MenuAction::Back => {
                log::info!("Settings changes discarded");
                return Ok(SceneCommand::Open(SceneKind::MainMenu));
            }
            MenuAction::Quit => {}
        }

        Ok(SceneCommand::None)
    }

    fn adjust_selected(&mut self, steps: i32) {
        let field = self.selected_field();
        let value = self.document.settings.adjust(field, steps);
        log::debug!("{} set to {}", field.label(), value);

        let label = self.document.settings.row_label(field);
        let index = self.cursor.selected_index();
        if let Some(text) = self.base.elements.get_mut(index).and_then(Element::as_text_mut) {
            text.set_content(label);
        }
    }
}
