/*
 *  display/transport/pbm.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Render flushed frames to a PBM image instead of a panel
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

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::display::error::DisplayError;
use crate::display::framebuffer::PagedFrameBuffer;
use crate::display::traits::DisplayTransport;

/// SH1106 page address command base (0xB0..=0xB7)
const PAGE_ADDR: u8 = 0xB0;

/// Writes every flushed frame to a plain PBM file
///
/// Keeps a shadow of the panel memory. A flush the size of the whole
/// buffer replaces the shadow; a flush one page long lands in the page
/// most recently selected with `0xB0 | page`, starting at column 0.
/// The file is rewritten after every flush.
pub struct PbmTransport {
    path: PathBuf,
    shadow: PagedFrameBuffer,
    page: u32,
    frames: usize,
}

impl PbmTransport {
    pub fn new(path: impl AsRef<Path>, width: u32, height: u32) -> Result<Self, DisplayError> {
        let path = path.as_ref().to_path_buf();
        info!("Rendering {}x{} frames to {}", width, height, path.display());
        Ok(Self {
            path,
            shadow: PagedFrameBuffer::new(width, height, 0)?,
            page: 0,
            frames: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of flushes written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Current panel contents as seen through this transport
    pub fn shadow(&self) -> &PagedFrameBuffer {
        &self.shadow
    }
}

impl DisplayTransport for PbmTransport {
    fn init(&mut self) -> Result<(), DisplayError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        if (PAGE_ADDR..PAGE_ADDR + 8).contains(&cmd) {
            self.page = (cmd - PAGE_ADDR) as u32;
        }
        Ok(())
    }

    fn flush(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let width = self.shadow.width() as usize;
        let full = self.shadow.as_bytes().len();

        if buffer.len() == full || buffer.len() + 1 == full {
            self.shadow.load(buffer)?;
        } else if buffer.len() == width + 1 {
            self.shadow.load_page(self.page, 0, &buffer[1..]);
        } else if buffer.len() == width {
            self.shadow.load_page(self.page, 0, buffer);
        } else {
            return Err(DisplayError::BufferSizeMismatch { expected: full, actual: buffer.len() });
        }

        std::fs::write(&self.path, self.shadow.to_pbm())?;
        self.frames += 1;
        debug!("pbm frame {} -> {}", self.frames, self.path.display());
        Ok(())
    }
}
