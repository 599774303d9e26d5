/*
 *  display/mod.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem: framebuffer, rasterizers, controllers, transports
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

// Core trait definitions
pub mod traits;
pub mod error;
pub mod diagnostics;

// Buffer and drawing state
pub mod mode;
pub mod clip;
pub mod framebuffer;
pub mod canvas;

// Rasterizers
pub mod engine;
pub mod font;
pub mod graphics;

// Byte movers
pub mod transport;

// Display drivers (conditionally compiled based on features)
#[cfg(any(feature = "driver-ssd1306", feature = "driver-sh1106"))]
pub mod drivers;

pub mod factory;

// Re-exports for convenience
pub use traits::{DisplayCapabilities, DisplayTransport, PixelSurface, TextSurface};
pub use error::{DisplayError, DisplayFactoryError};
pub use diagnostics::{Diagnostic, DiagnosticHook};
pub use mode::CompositingMode;
pub use clip::ClipRect;
pub use framebuffer::PagedFrameBuffer;
pub use canvas::Canvas;
pub use engine::DrawingEngine;
pub use font::{Font, FontRenderer, Glyph};
pub use graphics::GraphicsTarget;
pub use factory::{BoxedDisplay, DisplayDriverFactory};

#[cfg(feature = "driver-ssd1306")]
pub use drivers::ssd1306::Ssd1306Driver;

#[cfg(feature = "driver-sh1106")]
pub use drivers::sh1106::Sh1106Driver;
