/*
 *  display/canvas.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Drawing state shared by every display family
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

use std::fmt;

use crate::display::clip::ClipRect;
use crate::display::diagnostics::{Diagnostic, DiagnosticHook};
use crate::display::error::DisplayError;
use crate::display::font::Font;
use crate::display::framebuffer::PagedFrameBuffer;
use crate::display::mode::CompositingMode;

/// Framebuffer plus the per-display drawing state
///
/// Drivers own one of these and delegate the pixel half of
/// [`PixelSurface`](crate::display::traits::PixelSurface) to it; only
/// `begin`/`display` are theirs to implement.
pub struct Canvas {
    framebuffer: PagedFrameBuffer,
    mode: CompositingMode,
    font: Option<&'static Font>,
    hook: Option<DiagnosticHook>,
}

impl Canvas {
    /// Allocate a zeroed canvas
    pub fn new(width: u32, height: u32, header: u8) -> Result<Self, DisplayError> {
        Ok(Self {
            framebuffer: PagedFrameBuffer::new(width, height, header)?,
            mode: CompositingMode::Set,
            font: None,
            hook: None,
        })
    }

    pub fn framebuffer(&self) -> &PagedFrameBuffer {
        &self.framebuffer
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        self.framebuffer.get_pixel(x, y)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> u8 {
        match self.framebuffer.try_set_pixel(x, y, value, self.mode) {
            Ok(previous) => previous,
            Err(diagnostic) => {
                self.report(diagnostic);
                0
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.framebuffer.clear();
    }

    pub fn mode(&self) -> CompositingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CompositingMode) -> CompositingMode {
        std::mem::replace(&mut self.mode, mode)
    }

    pub fn clip(&self) -> ClipRect {
        self.framebuffer.clip()
    }

    pub fn set_clip(&mut self, clip: ClipRect) {
        self.framebuffer.set_clip(clip);
    }

    pub fn clear_clip(&mut self) {
        self.framebuffer.clear_clip();
    }

    pub fn font(&self) -> Option<&'static Font> {
        self.font
    }

    pub fn set_font(&mut self, font: Option<&'static Font>) -> Option<&'static Font> {
        std::mem::replace(&mut self.font, font)
    }

    /// Install (or remove) the diagnostic hook
    pub fn set_diagnostic_hook(&mut self, hook: Option<DiagnosticHook>) {
        self.hook = hook;
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        if let Some(hook) = self.hook.as_mut() {
            hook(&diagnostic);
        }
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.framebuffer.width())
            .field("height", &self.framebuffer.height())
            .field("mode", &self.mode)
            .field("clip", &self.framebuffer.clip())
            .field("font", &self.font.is_some())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}
