/*
 *  display/graphics.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  embedded-graphics DrawTarget over any pixel surface
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

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::display::traits::PixelSurface;

/// Borrowed `DrawTarget` view of a display
///
/// Every pixel goes through [`PixelSurface::set_pixel`], so the current
/// compositing mode and clip apply to embedded-graphics primitives and
/// mono fonts exactly as they do to the native rasterizers.
/// `BinaryColor::On` is written as 1, `Off` as 0.
pub struct GraphicsTarget<'a, S: PixelSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: PixelSurface + ?Sized> GraphicsTarget<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        Self { surface }
    }
}

impl<S: PixelSurface + ?Sized> DrawTarget for GraphicsTarget<'_, S> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.surface.set_pixel(point.x, point.y, color.is_on() as u8);
        }
        Ok(())
    }
}

impl<S: PixelSurface + ?Sized> OriginDimensions for GraphicsTarget<'_, S> {
    fn size(&self) -> Size {
        let (width, height) = self.surface.dimensions();
        Size::new(width, height)
    }
}
