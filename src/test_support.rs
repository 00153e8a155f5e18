//! Test doubles for the window surface and asset provider
//!
//! Full integration tests require an SDL2 context, so unit tests draw into
//! a recorder and look pictures up in a fixed-size catalog instead.

use crate::assets::{AssetCatalog, AssetError, AssetId, Picture};
use crate::render::Renderer;
use crate::text::GlyphImage;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Picture {
        asset: AssetId,
        position: (i32, i32),
        size: (u32, u32),
    },
    Glyphs {
        glyphs: GlyphImage,
        position: (i32, i32),
    },
    Present,
}

/// Renderer that records every call
pub struct RecordingRenderer {
    pub size: (u32, u32),
    pub caption: String,
    pub ops: Vec<DrawOp>,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingRenderer {
            size: (width, height),
            caption: String::new(),
            ops: Vec::new(),
        }
    }

    pub fn pictures(&self) -> Vec<(AssetId, (i32, i32), (u32, u32))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Picture { asset, position, size } => Some((*asset, *position, *size)),
                _ => None,
            })
            .collect()
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Present).count()
    }
}

impl Renderer for RecordingRenderer {
    fn output_size(&self) -> (u32, u32) {
        self.size
    }

    fn set_caption(&mut self, caption: &str) -> Result<(), String> {
        self.caption = caption.to_string();
        Ok(())
    }

    fn draw_picture(&mut self, asset: AssetId, position: (i32, i32), size: (u32, u32)) -> Result<(), String> {
        self.ops.push(DrawOp::Picture { asset, position, size });
        Ok(())
    }

    fn draw_glyphs(&mut self, glyphs: &GlyphImage, position: (i32, i32)) -> Result<(), String> {
        self.ops.push(DrawOp::Glyphs {
            glyphs: glyphs.clone(),
            position,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}

/// Catalog where every known asset has the same native size
pub struct FixedCatalog {
    pub native_size: (u32, u32),
}

impl Default for FixedCatalog {
    fn default() -> Self {
        FixedCatalog {
            native_size: (64, 64),
        }
    }
}

impl AssetCatalog for FixedCatalog {
    fn picture(&self, asset: AssetId) -> Result<Picture, AssetError> {
        Ok(Picture {
            asset,
            native_size: self.native_size,
        })
    }
}
