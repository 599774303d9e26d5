/*
 *  display/traits.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Core trait definitions for display driver abstraction
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

use crate::display::clip::ClipRect;
use crate::display::diagnostics::Diagnostic;
use crate::display::error::DisplayError;
use crate::display::font::Font;
use crate::display::mode::CompositingMode;

/// Display capabilities and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCapabilities {
    /// Controller family name, e.g. "ssd1306"
    pub controller: &'static str,

    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Maximum recommended frame rate
    pub max_fps: u32,

    /// Whether the display supports contrast control
    pub supports_contrast: bool,

    /// Whether the display supports inversion
    pub supports_invert: bool,
}

/// Pixel-level capability every display family implements
///
/// This is the whole contract between a physical display and the shared
/// rasterizers: read a pixel, composite a pixel, bring the panel up,
/// push the buffer, wipe the buffer. Line, rectangle, circle and text
/// drawing are written once against this trait (see
/// [`DrawingEngine`](crate::display::engine::DrawingEngine) and
/// [`FontRenderer`](crate::display::font::FontRenderer)).
pub trait PixelSurface: Send {
    /// Returns the capabilities of this display
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the display dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Stored bit at (x, y); 0 outside the panel. Not clipped.
    fn get_pixel(&self, x: i32, y: i32) -> u8;

    /// Composite `value` into (x, y) under the current mode
    ///
    /// Returns the bit that was there before, or 0 when the write was
    /// discarded (off panel or outside the clip).
    fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> u8;

    /// Initialize the controller and push the current buffer
    fn begin(&mut self) -> Result<(), DisplayError>;

    /// Flush the framebuffer to the panel
    ///
    /// This is the only call that talks to the hardware after `begin`.
    fn display(&mut self) -> Result<(), DisplayError>;

    /// Zero every pixel in the buffer (not clipped, not flushed)
    fn clear_all(&mut self);

    /// Current compositing mode
    fn mode(&self) -> CompositingMode;

    /// Select the compositing mode; returns the previous one
    fn set_mode(&mut self, mode: CompositingMode) -> CompositingMode;

    /// Active clip rectangle
    fn clip(&self) -> ClipRect;

    /// Replace the clip rectangle
    fn set_clip(&mut self, clip: ClipRect);

    /// Restore the full-panel clip
    fn clear_clip(&mut self);

    /// Report a drawing call that had no effect
    ///
    /// Default is to drop it. Displays with a diagnostic hook forward it.
    fn report(&mut self, _diagnostic: Diagnostic) {}

    /// Set panel contrast (0-255)
    fn set_contrast(&mut self, _value: u8) -> Result<(), DisplayError> {
        Err(DisplayError::UnsupportedOperation)
    }

    /// Set display inversion (if supported)
    ///
    /// When inverted, light pixels become dark and vice versa. This is a
    /// controller setting; the framebuffer is not touched.
    fn set_invert(&mut self, _inverted: bool) -> Result<(), DisplayError> {
        Err(DisplayError::UnsupportedOperation)
    }

    /// Turn the panel on or off without losing its contents
    fn set_display_on(&mut self, _on: bool) -> Result<(), DisplayError> {
        Err(DisplayError::UnsupportedOperation)
    }
}

/// A pixel surface that also carries an active font
pub trait TextSurface: PixelSurface {
    /// Active font, if any
    fn font(&self) -> Option<&'static Font>;

    /// Select a font (or none); returns the previous one
    fn set_font(&mut self, font: Option<&'static Font>) -> Option<&'static Font>;
}

/// Bus-level collaborator that moves bytes to the controller
///
/// Everything device specific about *what* to send lives in the
/// driver; the transport only knows *how* to send it.
pub trait DisplayTransport: Send {
    /// Configure the physical bus
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Send one command or command-argument byte
    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError>;

    /// Send a run of command bytes
    fn write_commands(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        for &c in cmds {
            self.write_command(c)?;
        }
        Ok(())
    }

    /// Push a data block: header byte followed by pixel bytes
    ///
    /// May block for the duration of the bus transfer.
    fn flush(&mut self, buffer: &[u8]) -> Result<(), DisplayError>;
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for Box<T> {
    fn init(&mut self) -> Result<(), DisplayError> {
        (**self).init()
    }

    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        (**self).write_command(cmd)
    }

    fn write_commands(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        (**self).write_commands(cmds)
    }

    fn flush(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        (**self).flush(buffer)
    }
}
