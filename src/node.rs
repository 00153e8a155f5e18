//! Drawable scene elements
//!
//! A [`Node`] is an image with a size and a top-left position derived from
//! the point it is centred on. A [`Text`] is a node whose image is a
//! rendered string and which re-renders itself when its content or color
//! changes.

use crate::assets::{AssetId, Picture};
use crate::render::Renderer;
use crate::text::{Font, GlyphImage};
use sdl2::pixels::Color;

/// What a node draws
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    /// A loaded picture, drawn scaled to the node size
    Picture(AssetId),
    /// A rendered string, drawn at its natural size
    Glyphs(GlyphImage),
}

/// Top-left corner that centres `size` on `anchor`
pub fn centered(anchor: (i32, i32), size: (u32, u32)) -> (i32, i32) {
    (anchor.0 - (size.0 / 2) as i32, anchor.1 - (size.1 / 2) as i32)
}

/// A positioned, sized image
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    image: Image,
    size: (u32, u32),
    position: (i32, i32),
}

impl Node {
    /// Creates a picture node centred on `anchor`
    ///
    /// The picture is scaled to `size` when it differs from the native size.
    /// A `(0, 0)` size keeps the native size.
    pub fn new(picture: Picture, size: (u32, u32), anchor: (i32, i32)) -> Self {
        let size = if size == (0, 0) { picture.native_size } else { size };
        Node {
            image: Image::Picture(picture.asset),
            size,
            position: centered(anchor, size),
        }
    }

    /// Creates a node from an already rendered string
    fn from_glyphs(glyphs: GlyphImage, anchor: (i32, i32)) -> Self {
        let size = glyphs.size();
        Node {
            image: Image::Glyphs(glyphs),
            size,
            position: centered(anchor, size),
        }
    }

    #[cfg(test)]
    pub fn image(&self) -> &Image {
        &self.image
    }

    #[cfg(test)]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[cfg(test)]
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Draws the image at the node position
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), String> {
        self.draw_at(renderer, self.position)
    }

    /// Draws the image at an explicit position (used by the scrolling background)
    pub fn draw_at<R: Renderer + ?Sized>(&self, renderer: &mut R, position: (i32, i32)) -> Result<(), String> {
        match &self.image {
            Image::Picture(asset) => renderer.draw_picture(*asset, position, self.size),
            Image::Glyphs(glyphs) => renderer.draw_glyphs(glyphs, position),
        }
    }
}

/// A node showing a string in a bitmap font
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    node: Node,
    content: String,
    font_name: String,
    font_size: u32,
    color: Color,
    anchor: (i32, i32),
}

impl Text {
    pub fn new(
        content: impl Into<String>,
        font_size: u32,
        color: Color,
        font_name: impl Into<String>,
        anchor: (i32, i32),
    ) -> Self {
        let content = content.into();
        let font_name = font_name.into();
        let glyphs = Font::by_name(&font_name).render(&content, font_size, color);

        Text {
            node: Node::from_glyphs(glyphs, anchor),
            content,
            font_name,
            font_size,
            color,
            anchor,
        }
    }

    #[cfg(test)]
    pub fn node(&self) -> &Node {
        &self.node
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the string, re-centring on the original anchor
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.node = Node::from_glyphs(self.render(), self.anchor);
    }

    /// Re-renders in a new color; glyph bounds do not change
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.node.image = Image::Glyphs(self.render());
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), String> {
        self.node.draw(renderer)
    }

    fn render(&self) -> GlyphImage {
        Font::by_name(&self.font_name).render(&self.content, self.font_size, self.color)
    }
}

/// An entry in a scene's draw list
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Image(Node),
    Text(Text),
}

impl Element {
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), String> {
        match self {
            Element::Image(node) => node.draw(renderer),
            Element::Text(text) => text.draw(renderer),
        }
    }

    #[cfg(test)]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(text) => Some(text),
            Element::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Element::Text(text) => Some(text),
            Element::Image(_) => None,
        }
    }
}
