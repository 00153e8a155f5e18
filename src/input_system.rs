use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Actions the menus react to
///
/// This enum represents every high-level input the screens understand.
/// It decouples raw SDL2 events from scene logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    // === Menu Navigation ===
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,

    // === System ===
    Quit,
}

/// InputSystem translates SDL2 events into MenuActions
///
/// Keyboard only: arrows and WASD navigate, Return confirms, Escape backs
/// out. Closing the window produces [`MenuAction::Quit`]. Held-key repeats
/// are ignored so one press moves the cursor exactly once.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all pending SDL2 events and returns the actions they map to
    pub fn poll_actions(&self, event_pump: &mut EventPump) -> Vec<MenuAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps a single event to an action, if it is one the menus care about
    pub fn translate(&self, event: &Event) -> Option<MenuAction> {
        match event {
            Event::Quit { .. } => Some(MenuAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => Self::action_for_key(*key),
            _ => None,
        }
    }

    /// Key bindings
    pub fn action_for_key(key: Keycode) -> Option<MenuAction> {
        match key {
            Keycode::Up | Keycode::W => Some(MenuAction::Up),
            Keycode::Down | Keycode::S => Some(MenuAction::Down),
            Keycode::Left | Keycode::A => Some(MenuAction::Left),
            Keycode::Right | Keycode::D => Some(MenuAction::Right),
            Keycode::Return | Keycode::KpEnter => Some(MenuAction::Confirm),
            Keycode::Escape => Some(MenuAction::Back),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(key: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_arrows_and_wasd_share_bindings() {
        assert_eq!(InputSystem::action_for_key(Keycode::Up), Some(MenuAction::Up));
        assert_eq!(InputSystem::action_for_key(Keycode::W), Some(MenuAction::Up));
        assert_eq!(InputSystem::action_for_key(Keycode::Down), Some(MenuAction::Down));
        assert_eq!(InputSystem::action_for_key(Keycode::S), Some(MenuAction::Down));
        assert_eq!(InputSystem::action_for_key(Keycode::Left), Some(MenuAction::Left));
        assert_eq!(InputSystem::action_for_key(Keycode::A), Some(MenuAction::Left));
        assert_eq!(InputSystem::action_for_key(Keycode::Right), Some(MenuAction::Right));
        assert_eq!(InputSystem::action_for_key(Keycode::D), Some(MenuAction::Right));
    }

    #[test]
    fn test_confirm_and_back() {
        assert_eq!(InputSystem::action_for_key(Keycode::Return), Some(MenuAction::Confirm));
        assert_eq!(InputSystem::action_for_key(Keycode::KpEnter), Some(MenuAction::Confirm));
        assert_eq!(InputSystem::action_for_key(Keycode::Escape), Some(MenuAction::Back));
        assert_eq!(InputSystem::action_for_key(Keycode::M), None);
    }

    #[test]
    fn test_translate_events() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&Event::Quit { timestamp: 0 }), Some(MenuAction::Quit));
        assert_eq!(input.translate(&key_down(Keycode::Down, false)), Some(MenuAction::Down));
    }

    #[test]
    fn test_key_repeat_ignored() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Down, true)), None);
    }
}
