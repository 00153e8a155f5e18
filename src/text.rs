//! Bitmap Text Rendering
//!
//! This module provides procedural text rendering using a 5x7 bitmap font.
//! Strings are rendered into a [`GlyphImage`]: a list of lit cells plus the
//! scale and color they are drawn with. The image is plain data, so the
//! renderer decides how cells become pixels (SDL2 rectangles in the game,
//! a recorder in tests).

use sdl2::pixels::Color;

/// Height of every glyph in font cells
pub const GLYPH_ROWS: u32 = 7;

/// Width of every glyph in font cells
pub const GLYPH_COLUMNS: u32 = 5;

/// Name of the face used when a requested font is unknown
pub const DEFAULT_FONT: &str = "pixel";

/// A bitmap font face
///
/// All faces share the 5x7 patterns; they differ in how far apart the
/// characters are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub name: &'static str,
    /// Empty cell columns between two characters
    pub char_spacing: u32,
}

const FONTS: &[Font] = &[
    Font {
        name: DEFAULT_FONT,
        char_spacing: 1,
    },
    Font {
        name: "pixel-wide",
        char_spacing: 2,
    },
];

impl Font {
    /// Looks up a face by name, falling back to the default face
    pub fn by_name(name: &str) -> Font {
        FONTS
            .iter()
            .find(|font| font.name.eq_ignore_ascii_case(name))
            .copied()
            .unwrap_or(FONTS[0])
    }

    /// Converts a nominal font size (pixel height) to the cell scale
    pub fn scale_for(font_size: u32) -> u32 {
        (font_size / 8).max(1)
    }

    /// Renders `text` with this face
    pub fn render(&self, text: &str, font_size: u32, color: Color) -> GlyphImage {
        let scale = Font::scale_for(font_size);
        let advance = GLYPH_COLUMNS + self.char_spacing;
        let mut lit = Vec::new();
        let mut char_count = 0;

        for (i, c) in text.chars().enumerate() {
            let char_x = i as u32 * advance;
            for (row, &pattern_row) in glyph_pattern(c).iter().enumerate() {
                for col in 0..GLYPH_COLUMNS {
                    if (pattern_row >> (GLYPH_COLUMNS - 1 - col)) & 1 == 1 {
                        lit.push((char_x + col, row as u32));
                    }
                }
            }
            char_count += 1;
        }

        // No trailing spacing after the last character
        let columns = if char_count == 0 {
            0
        } else {
            char_count * advance - self.char_spacing
        };

        GlyphImage {
            columns,
            rows: GLYPH_ROWS,
            scale,
            color,
            lit,
        }
    }
}

/// A rendered string: the "surface" behind a text node
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphImage {
    columns: u32,
    rows: u32,
    scale: u32,
    color: Color,
    /// Lit cells as (column, row), unscaled
    lit: Vec<(u32, u32)>,
}

impl GlyphImage {
    /// Pixel size of the rendered string
    pub fn size(&self) -> (u32, u32) {
        (self.columns * self.scale, self.rows * self.scale)
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Lit cells as (column, row)
    pub fn lit_cells(&self) -> &[(u32, u32)] {
        &self.lit
    }
}

/// Returns the 5x7 pattern for a character (1 = pixel on, 0 = pixel off)
///
/// Lowercase letters render as uppercase; unknown characters render as a
/// full block.
pub fn glyph_pattern(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown
    }
}
