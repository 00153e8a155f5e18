//! Menu Screens
//!
//! This module provides the full-screen menus. Every screen is a scene
//! (see [`crate::scene`]) built from text rows and pictures, with a
//! [`MenuCursor`] deciding which row is highlighted.
//!
//! # Available Components
//!
//! - [`MenuCursor`] - Cyclic row selection and highlight recoloring
//! - [`MainMenu`] - Play / Settings / Exit
//! - [`SettingsScreen`] - Edits and saves the settings file
//!
//! # Example Usage
//!
//! ```ignore
//! let mut menu = MainMenu::new(&ctx)?;
//!
//! // Handle input
//! match menu.handle_action(MenuAction::Confirm) {
//!     SceneCommand::Open(kind) => { /* switch scene */ }
//!     SceneCommand::Exit => { /* stop the loop */ }
//!     SceneCommand::None => {}
//! }
//! ```

pub mod main_menu;
pub mod menu;
pub mod settings_screen;

pub use main_menu::MainMenu;
pub use menu::{MenuCursor, MenuStyle};
pub use settings_screen::SettingsScreen;
