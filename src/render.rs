//! Frame rendering surface
//!
//! The menus never talk to SDL2 directly. Everything they draw goes through
//! the [`Renderer`] trait, which the SDL2 platform implements on top of its
//! canvas and texture cache.
//!
//! # Usage Example
//!
//! ```ignore
//! node.draw(&mut renderer)?;
//! renderer.present();
//! ```

use crate::assets::{AssetId, TextureCache};
use crate::text::GlyphImage;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A window surface that frames are drawn onto
pub trait Renderer {
    /// Size of the drawable area in pixels
    fn output_size(&self) -> (u32, u32);

    /// Sets the window caption
    fn set_caption(&mut self, caption: &str) -> Result<(), String>;

    /// Blits a picture with its top-left corner at `position`, scaled to `size`
    fn draw_picture(&mut self, asset: AssetId, position: (i32, i32), size: (u32, u32)) -> Result<(), String>;

    /// Blits a rendered string with its top-left corner at `position`
    fn draw_glyphs(&mut self, glyphs: &GlyphImage, position: (i32, i32)) -> Result<(), String>;

    /// Shows the finished frame
    fn present(&mut self);
}

/// Draws a picture from the texture cache onto the canvas
pub fn copy_picture(
    canvas: &mut Canvas<Window>,
    textures: &TextureCache,
    asset: AssetId,
    position: (i32, i32),
    size: (u32, u32),
) -> Result<(), String> {
    let texture = textures
        .texture(asset)
        .ok_or_else(|| format!("Texture not loaded: {:?}", asset))?;
    canvas.copy(texture, None, Some(Rect::new(position.0, position.1, size.0, size.1)))
}

/// Draws glyph cells as filled rectangles, one per lit cell
pub fn fill_glyphs(canvas: &mut Canvas<Window>, glyphs: &GlyphImage, position: (i32, i32)) -> Result<(), String> {
    canvas.set_draw_color(glyphs.color());

    let scale = glyphs.scale();
    for &(col, row) in glyphs.lit_cells() {
        canvas.fill_rect(Rect::new(
            position.0 + (col * scale) as i32,
            position.1 + (row * scale) as i32,
            scale,
            scale,
        ))?;
    }

    Ok(())
}
