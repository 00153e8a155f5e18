//! Settings data types
//!
//! This module defines the data structures stored in the settings file.
//! It uses Serde for serialization/deserialization to JSON format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The root settings file structure
///
/// ```json
/// { "settings": { "player_velocity": 5, "enemy_velocity": 4,
///                 "wave_length": 50, "player_color": "yellow" } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsDocument {
    pub settings: GameSettings,

    /// Top-level keys this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tunable values shown on the settings screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub player_velocity: i32,
    pub enemy_velocity: i32,
    pub wave_length: i32,
    pub player_color: ShipColor,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            player_velocity: 5,
            enemy_velocity: 4,
            wave_length: 50,
            player_color: ShipColor::Yellow,
            extra: Map::new(),
        }
    }
}

impl GameSettings {
    /// Current value of a numeric setting
    pub fn value(&self, field: SettingField) -> i32 {
        match field {
            SettingField::PlayerVelocity => self.player_velocity,
            SettingField::EnemyVelocity => self.enemy_velocity,
            SettingField::WaveLength => self.wave_length,
        }
    }

    /// Moves a setting by `steps` increments of its step size
    ///
    /// Saturates at the `i32` bounds. Returns the new value.
    pub fn adjust(&mut self, field: SettingField, steps: i32) -> i32 {
        let delta = steps.saturating_mul(field.step());
        let new_value = self.value(field).saturating_add(delta);
        match field {
            SettingField::PlayerVelocity => self.player_velocity = new_value,
            SettingField::EnemyVelocity => self.enemy_velocity = new_value,
            SettingField::WaveLength => self.wave_length = new_value,
        }
        new_value
    }

    /// On-screen label for a setting row, e.g. `"Wave length: 50"`
    pub fn row_label(&self, field: SettingField) -> String {
        format!("{}: {}", field.label(), self.value(field))
    }
}

/// Numeric settings editable on the settings screen, in row order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    PlayerVelocity,
    EnemyVelocity,
    WaveLength,
}

impl SettingField {
    pub fn all() -> Vec<Self> {
        vec![Self::PlayerVelocity, Self::EnemyVelocity, Self::WaveLength]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::PlayerVelocity => "Player velocity",
            Self::EnemyVelocity => "Enemy velocity",
            Self::WaveLength => "Wave length",
        }
    }

    /// Amount one Left/Right press changes the value by
    pub fn step(&self) -> i32 {
        match self {
            Self::PlayerVelocity | Self::EnemyVelocity => 1,
            Self::WaveLength => 5,
        }
    }
}

/// Player ship color, stored as its lowercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl ShipColor {
    pub fn all() -> Vec<Self> {
        vec![Self::Red, Self::Green, Self::Blue, Self::Yellow]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

/// Error types for settings load/save operations
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Malformed settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}
