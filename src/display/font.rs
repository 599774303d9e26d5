/*
 *  display/font.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Proportional bitmap fonts and text rendering
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use crate::display::diagnostics::Diagnostic;
use crate::display::traits::TextSurface;

/// Placement and advance metrics for one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Offset of the glyph's first byte in [`Font::bitmap`]
    pub bitmap_offset: u16,
    /// Bitmap dimensions in pixels
    pub width: u8,
    pub height: u8,
    /// Distance to advance the cursor
    pub x_advance: u8,
    /// Offset from cursor to the bitmap's upper-left corner
    pub x_offset: i8,
    pub y_offset: i8,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self { bitmap_offset, width, height, x_advance, x_offset, y_offset }
    }
}

/// Static bitmap font in the common GFX layout
///
/// `bitmap` is every glyph's pixels concatenated, packed MSB first,
/// row-major, with no padding between rows or glyphs. `glyphs[i]`
/// describes character `first + i`. Tables are produced offline and
/// consumed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub bitmap: &'static [u8],
    pub glyphs: &'static [Glyph],
    /// Character code range covered, inclusive
    pub first: u16,
    pub last: u16,
    /// Baseline-to-baseline distance
    pub y_advance: u8,
}

impl Font {
    /// Metrics for `c`, if the font covers it
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        let code = c as u32;
        if code < self.first as u32 || code > self.last as u32 {
            return None;
        }
        self.glyphs.get((code - self.first as u32) as usize)
    }

    /// Line height; 0 for no font
    pub fn height(font: Option<&Font>) -> u8 {
        font.map_or(0, |f| f.y_advance)
    }

    /// Width `text` would advance the cursor by, skipping unsupported characters
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars()
            .filter_map(|c| self.glyph(c))
            .map(|g| g.x_advance as i32)
            .sum()
    }
}

/// Text drawing over any [`TextSurface`]
///
/// The y coordinate passed in is the top of the text line: glyphs are
/// placed relative to a baseline `y_advance` pixels below it, shifted by
/// each glyph's own offsets.
pub trait FontRenderer: TextSurface {
    /// Draw one character; returns how far the cursor should move
    ///
    /// Returns 0 and draws nothing when no font is selected or the font
    /// does not cover `c`. Only set bits are plotted, each as `value`
    /// under the current compositing mode; clear bits leave the buffer
    /// alone.
    fn draw_glyph(&mut self, x: i32, y: i32, c: char, value: u8) -> i32 {
        let Some(font) = self.font() else {
            self.report(Diagnostic::NoFont);
            return 0;
        };
        let Some(glyph) = font.glyph(c) else {
            self.report(Diagnostic::UnsupportedGlyph(c));
            return 0;
        };

        let origin_x = x + glyph.x_offset as i32;
        let origin_y = y + font.y_advance as i32 + glyph.y_offset as i32;
        let mut offset = glyph.bitmap_offset as usize;
        let mut bits = 0u8;
        let mut bit = 0usize;

        for row in 0..glyph.height as i32 {
            for col in 0..glyph.width as i32 {
                if bit & 7 == 0 {
                    bits = font.bitmap.get(offset).copied().unwrap_or(0);
                    offset += 1;
                }
                bit += 1;
                if bits & 0x80 != 0 {
                    self.set_pixel(origin_x + col, origin_y + row, value);
                }
                bits <<= 1;
            }
        }

        glyph.x_advance as i32
    }

    /// Draw `text` left to right; returns the final cursor x
    fn draw_string(&mut self, x: i32, y: i32, text: &str, value: u8) -> i32 {
        let mut cursor = x;
        for c in text.chars() {
            cursor += self.draw_glyph(cursor, y, c, value);
        }
        cursor
    }

    /// Height of the active font; 0 when none is selected
    fn font_height(&self) -> u8 {
        Font::height(self.font())
    }
}

impl<T: TextSurface + ?Sized> FontRenderer for T {}
