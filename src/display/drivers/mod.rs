/*
 *  display/drivers/mod.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Controller families
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

/// Forward the buffer-side half of `PixelSurface` to `self.canvas`
///
/// Expands inside an `impl PixelSurface for ...` block; the driver still
/// writes `capabilities`, `begin`, `display` and the panel controls.
macro_rules! canvas_pixel_surface {
    () => {
        fn get_pixel(&self, x: i32, y: i32) -> u8 {
            self.canvas.get_pixel(x, y)
        }

        fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> u8 {
            self.canvas.set_pixel(x, y, value)
        }

        fn clear_all(&mut self) {
            self.canvas.clear_all();
        }

        fn mode(&self) -> $crate::display::mode::CompositingMode {
            self.canvas.mode()
        }

        fn set_mode(
            &mut self,
            mode: $crate::display::mode::CompositingMode,
        ) -> $crate::display::mode::CompositingMode {
            self.canvas.set_mode(mode)
        }

        fn clip(&self) -> $crate::display::clip::ClipRect {
            self.canvas.clip()
        }

        fn set_clip(&mut self, clip: $crate::display::clip::ClipRect) {
            self.canvas.set_clip(clip);
        }

        fn clear_clip(&mut self) {
            self.canvas.clear_clip();
        }

        fn report(&mut self, diagnostic: $crate::display::diagnostics::Diagnostic) {
            self.canvas.report(diagnostic);
        }
    };
}

/// `TextSurface` over `self.canvas`
macro_rules! canvas_text_surface {
    ($driver:ident) => {
        impl<T: $crate::display::traits::DisplayTransport> $crate::display::traits::TextSurface
            for $driver<T>
        {
            fn font(&self) -> Option<&'static $crate::display::font::Font> {
                self.canvas.font()
            }

            fn set_font(
                &mut self,
                font: Option<&'static $crate::display::font::Font>,
            ) -> Option<&'static $crate::display::font::Font> {
                self.canvas.set_font(font)
            }
        }
    };
}

// Conditionally compile each driver based on feature flags
#[cfg(feature = "driver-ssd1306")]
pub mod ssd1306;

#[cfg(feature = "driver-sh1106")]
pub mod sh1106;
