//! Persisted game settings
//!
//! This module loads and saves the settings document edited by the
//! settings screen:
//! - JSON file (human-readable, hand-editable)
//! - One top-level `settings` table holding the tunable values
//! - Unknown keys survive a load/save cycle
//!
//! # Architecture
//!
//! - `types`: Settings document structures and error types
//! - `store`: ConfigStore for file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let store = ConfigStore::default_location();
//!
//! let mut document = store.load()?;
//! document.settings.adjust(SettingField::WaveLength, 1);
//! store.save(&document)?;
//! ```

pub mod store;
pub mod types;

pub use store::ConfigStore;
pub use types::*;
