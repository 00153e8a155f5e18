//! Image assets
//!
//! Pictures are referenced by [`AssetId`] and carry their native size so
//! nodes can decide whether they need scaling. The SDL2 side keeps the
//! loaded textures in a [`TextureCache`].

use crate::config::ShipColor;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::fmt;

/// Every image the menus can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Background,
    Logo,
    Ship(ShipColor),
}

impl AssetId {
    /// All assets loaded at startup
    pub fn all() -> Vec<AssetId> {
        let mut assets = vec![AssetId::Background, AssetId::Logo];
        assets.extend(ShipColor::all().into_iter().map(AssetId::Ship));
        assets
    }

    /// Path of the PNG backing this asset, relative to the working directory
    pub fn path(&self) -> String {
        match self {
            AssetId::Background => "assets/background-black.png".to_string(),
            AssetId::Logo => "assets/logo.png".to_string(),
            AssetId::Ship(color) => format!("assets/pixel_ship_{}.png", color.name()),
        }
    }
}

/// A loaded picture: what a node needs to know to lay it out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture {
    pub asset: AssetId,
    pub native_size: (u32, u32),
}

/// Errors that can occur while loading or looking up assets
#[derive(Debug)]
pub enum AssetError {
    /// Asset was never loaded
    Missing(AssetId),

    /// Image file could not be read or decoded
    Load { path: String, message: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::Missing(asset) => write!(f, "Asset not loaded: {:?}", asset),
            AssetError::Load { path, message } => write!(f, "Failed to load {}: {}", path, message),
        }
    }
}

impl std::error::Error for AssetError {}

/// Something that can hand out pictures by id
pub trait AssetCatalog {
    fn picture(&self, asset: AssetId) -> Result<Picture, AssetError>;
}

/// Textures loaded once at startup, keyed by asset id
pub struct TextureCache<'a> {
    textures: HashMap<AssetId, Texture<'a>>,
}

impl<'a> TextureCache<'a> {
    /// Loads every asset in [`AssetId::all`]
    ///
    /// A single missing or unreadable file fails the whole load.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, AssetError> {
        let mut textures = HashMap::new();

        for asset in AssetId::all() {
            let path = asset.path();
            let texture = texture_creator
                .load_texture(&path)
                .map_err(|message| AssetError::Load { path: path.clone(), message })?;
            log::debug!("Loaded {}", path);
            textures.insert(asset, texture);
        }

        Ok(TextureCache { textures })
    }

    pub fn texture(&self, asset: AssetId) -> Option<&Texture<'a>> {
        self.textures.get(&asset)
    }
}

impl AssetCatalog for TextureCache<'_> {
    fn picture(&self, asset: AssetId) -> Result<Picture, AssetError> {
        let texture = self.texture(asset).ok_or(AssetError::Missing(asset))?;
        let query = texture.query();
        Ok(Picture {
            asset,
            native_size: (query.width, query.height),
        })
    }
}
