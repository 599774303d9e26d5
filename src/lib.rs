/*
 *  lib.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  1bpp graphics for SSD1306/SH1106 class OLED panels
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

//! Monochrome framebuffer graphics for page-addressed OLED controllers.
//!
//! Pixels live in a column-major, page-packed buffer that can be pushed
//! to the panel without reshuffling. Lines, rectangles, circles and
//! bitmap text are drawn through [`display::DrawingEngine`] and
//! [`display::FontRenderer`], which work on any [`display::PixelSurface`]
//! and honour the display's compositing mode and clip rectangle.

pub mod config;
pub mod display;
pub mod fonts;

/// Everything needed to draw on a display
pub mod prelude {
    pub use crate::display::{
        ClipRect, CompositingMode, DisplayTransport, DrawingEngine, Font, FontRenderer,
        GraphicsTarget, PixelSurface, TextSurface,
    };
    pub use crate::fonts::GLCD_5X8;
}
