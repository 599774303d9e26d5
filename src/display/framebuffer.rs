/*
 *  display/framebuffer.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Column-major, page-packed 1bpp framebuffer
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

use std::fmt::Write as _;

use crate::display::clip::ClipRect;
use crate::display::diagnostics::Diagnostic;
use crate::display::error::DisplayError;
use crate::display::mode::CompositingMode;

/// Bytes reserved ahead of the pixel data for transport framing
pub const HEADER_SIZE: usize = 1;

/// Packed monochrome framebuffer
///
/// Storage is one header byte followed by `width * pages` data bytes,
/// where `pages = ceil(height / 8)`. Each data byte holds 8 vertically
/// stacked pixels of one column; bit `y % 8` is the pixel at row `y`.
/// Columns are laid out one after another:
///
/// ```text
/// index(x, y) = x * pages + y / 8 + HEADER_SIZE
/// ```
///
/// This is exactly the order an SSD1306 consumes in vertical addressing
/// mode, so the whole slice can be pushed to the controller unchanged.
///
/// The buffer is sized once in [`PagedFrameBuffer::new`] and never grows.
#[derive(Debug, Clone)]
pub struct PagedFrameBuffer {
    buf: Vec<u8>,
    width: u16,
    height: u16,
    pages: u16,
    clip: ClipRect,
}

impl PagedFrameBuffer {
    /// Reserve and zero a buffer for a `width` x `height` panel
    ///
    /// `header` is written to byte 0 and left alone from then on
    /// (0x40, the I2C "data follows" control byte, for SSD1306/SH1106).
    pub fn new(width: u32, height: u32, header: u8) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 || width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(DisplayError::InvalidDimensions { width, height });
        }

        let pages = height.div_ceil(8) as usize;
        let bytes = HEADER_SIZE + width as usize * pages;

        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes)
            .map_err(|_| DisplayError::Allocation { bytes })?;
        buf.resize(bytes, 0);
        buf[0] = header;

        Ok(Self {
            buf,
            width: width as u16,
            height: height as u16,
            pages: pages as u16,
            clip: ClipRect::full(width as u16, height as u16),
        })
    }

    pub fn width(&self) -> u32 { self.width as u32 }
    pub fn height(&self) -> u32 { self.height as u32 }

    /// Number of 8-row pages
    pub fn pages(&self) -> u32 { self.pages as u32 }

    /// Header byte value
    pub fn header(&self) -> u8 { self.buf[0] }

    /// Map (x, y) to (byte index, bit); None when outside the buffer
    #[inline]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = x * self.pages as usize + y / 8 + HEADER_SIZE;
        Some((index, (y % 8) as u8))
    }

    /// Stored bit at (x, y), or 0 outside the buffer. Never clipped.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        match self.locate(x, y) {
            Some((index, bit)) => (self.buf[index] >> bit) & 0x01,
            None => 0,
        }
    }

    /// Composite `value` into (x, y) and return the previous bit
    ///
    /// Returns the reason when the write is discarded; the buffer is
    /// untouched in that case.
    pub fn try_set_pixel(
        &mut self,
        x: i32,
        y: i32,
        value: u8,
        mode: CompositingMode,
    ) -> Result<u8, Diagnostic> {
        let (index, bit) = self.locate(x, y)
            .ok_or(Diagnostic::OutOfBounds { x, y })?;
        if !self.clip.contains(x, y) {
            return Err(Diagnostic::Clipped { x, y });
        }

        let current = (self.buf[index] >> bit) & 0x01;
        if mode.apply(current, value) == 0 {
            self.buf[index] &= !(1 << bit);
        } else {
            self.buf[index] |= 1 << bit;
        }
        Ok(current)
    }

    /// Composite `value` into (x, y); 0 and no change when out of range or clipped
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8, mode: CompositingMode) -> u8 {
        self.try_set_pixel(x, y, value, mode).unwrap_or(0)
    }

    /// Zero every pixel byte, leaving the header alone
    pub fn clear(&mut self) {
        self.buf[HEADER_SIZE..].fill(0);
    }

    /// Active clip rectangle
    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    /// Replace the clip wholesale; no intersection with the previous one
    pub fn set_clip(&mut self, clip: ClipRect) {
        self.clip = clip;
    }

    /// Restore the full-buffer clip
    pub fn clear_clip(&mut self) {
        self.clip = ClipRect::full(self.width, self.height);
    }

    /// Header byte plus pixel bytes, ready for a single bus transfer
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Pixel bytes only
    pub fn pixels(&self) -> &[u8] {
        &self.buf[HEADER_SIZE..]
    }

    /// Bytes of one page across all columns, left to right
    ///
    /// For controllers that only address memory page by page.
    pub fn page(&self, page: u32) -> impl Iterator<Item = u8> + '_ {
        let pages = self.pages as usize;
        let page = page as usize;
        let valid = page < pages;
        (0..self.width as usize)
            .filter(move |_| valid)
            .map(move |x| self.buf[HEADER_SIZE + x * pages + page])
    }

    /// Overwrite the pixel bytes from a column-major image
    ///
    /// `bytes` may carry the header byte or not; anything else is a size
    /// mismatch.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        let data = self.buf.len() - HEADER_SIZE;
        let src = if bytes.len() == self.buf.len() {
            &bytes[HEADER_SIZE..]
        } else if bytes.len() == data {
            bytes
        } else {
            return Err(DisplayError::BufferSizeMismatch {
                expected: self.buf.len(),
                actual: bytes.len(),
            });
        };
        self.buf[HEADER_SIZE..].copy_from_slice(src);
        Ok(())
    }

    /// Overwrite one page, starting at column `column`; excess bytes are dropped
    pub fn load_page(&mut self, page: u32, column: u32, bytes: &[u8]) {
        let pages = self.pages as usize;
        let page = page as usize;
        if page >= pages {
            return;
        }
        let columns = (column as usize)..(self.width as usize);
        for (x, &b) in columns.zip(bytes) {
            self.buf[HEADER_SIZE + x * pages + page] = b;
        }
    }

    /// Number of lit pixels
    pub fn count_on_pixels(&self) -> usize {
        self.pixels().iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Render as a plain PBM (P1) image, 1 = lit
    pub fn to_pbm(&self) -> String {
        let (w, h) = (self.width as i32, self.height as i32);
        let mut out = String::with_capacity((w * h * 2) as usize + 16);
        let _ = writeln!(out, "P1");
        let _ = writeln!(out, "{} {}", w, h);
        for y in 0..h {
            for x in 0..w {
                out.push(if self.get_pixel(x, y) == 1 { '1' } else { '0' });
                out.push(if x + 1 == w { '\n' } else { ' ' });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb() -> PagedFrameBuffer {
        PagedFrameBuffer::new(128, 64, 0x40).unwrap()
    }

    #[test]
    fn test_allocation_geometry() {
        let fb = fb();
        assert_eq!(fb.as_bytes().len(), 1 + 128 * 8);
        assert_eq!(fb.pages(), 8);
        assert_eq!(fb.header(), 0x40);
        assert!(fb.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_partial_page_rounds_up() {
        let fb = PagedFrameBuffer::new(10, 13, 0).unwrap();
        assert_eq!(fb.pages(), 2);
        assert_eq!(fb.as_bytes().len(), 1 + 10 * 2);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            PagedFrameBuffer::new(0, 64, 0x40),
            Err(DisplayError::InvalidDimensions { width: 0, height: 64 })
        ));
        assert!(PagedFrameBuffer::new(128, 0, 0x40).is_err());
    }

    #[test]
    fn test_byte_layout_is_column_major() {
        let mut fb = fb();
        fb.set_pixel(0, 0, 1, CompositingMode::Set);
        fb.set_pixel(1, 0, 1, CompositingMode::Set);
        fb.set_pixel(0, 9, 1, CompositingMode::Set);
        fb.set_pixel(127, 63, 1, CompositingMode::Set);

        let bytes = fb.as_bytes();
        assert_eq!(bytes[1], 0b0000_0001); // x=0, page 0, bit 0
        assert_eq!(bytes[1 + 8], 0b0000_0001); // x=1, page 0
        assert_eq!(bytes[1 + 1], 0b0000_0010); // x=0, page 1, bit 1
        assert_eq!(bytes[1 + 127 * 8 + 7], 0b1000_0000);
        assert_eq!(fb.count_on_pixels(), 4);
    }

    #[test]
    fn test_set_then_get() {
        let mut fb = fb();
        assert_eq!(fb.set_pixel(5, 6, 1, CompositingMode::Set), 0);
        assert_eq!(fb.get_pixel(5, 6), 1);
        assert_eq!(fb.set_pixel(5, 6, 0, CompositingMode::Set), 1);
        assert_eq!(fb.get_pixel(5, 6), 0);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut fb = fb();
        let before = fb.as_bytes().to_vec();
        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 64), (500, 500)] {
            assert_eq!(fb.set_pixel(x, y, 1, CompositingMode::Set), 0);
            assert_eq!(
                fb.try_set_pixel(x, y, 1, CompositingMode::Set),
                Err(Diagnostic::OutOfBounds { x, y })
            );
            assert_eq!(fb.get_pixel(x, y), 0);
        }
        assert_eq!(fb.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_clip_gates_writes_not_reads() {
        let mut fb = fb();
        fb.set_pixel(20, 20, 1, CompositingMode::Set);
        fb.set_clip(ClipRect::new(0, 0, 9, 9));

        assert_eq!(fb.set_pixel(10, 0, 1, CompositingMode::Set), 0);
        assert_eq!(fb.get_pixel(10, 0), 0);
        assert_eq!(
            fb.try_set_pixel(20, 20, 0, CompositingMode::Set),
            Err(Diagnostic::Clipped { x: 20, y: 20 })
        );
        // reads ignore the clip
        assert_eq!(fb.get_pixel(20, 20), 1);

        fb.set_pixel(9, 9, 1, CompositingMode::Set);
        assert_eq!(fb.get_pixel(9, 9), 1);

        fb.clear_clip();
        assert_eq!(fb.clip(), ClipRect::new(0, 0, 127, 63));
        fb.set_pixel(10, 0, 1, CompositingMode::Set);
        assert_eq!(fb.get_pixel(10, 0), 1);
    }

    #[test]
    fn test_set_clip_replaces() {
        let mut fb = fb();
        fb.set_clip(ClipRect::new(0, 0, 4, 4));
        fb.set_clip(ClipRect::new(50, 50, 4, 4));
        fb.set_pixel(60, 52, 1, CompositingMode::Set);
        assert_eq!(fb.get_pixel(60, 52), 0);
        fb.set_pixel(52, 52, 1, CompositingMode::Set);
        assert_eq!(fb.get_pixel(52, 52), 1);
    }

    #[test]
    fn test_xor_involution() {
        let mut fb = fb();
        for initial in [0u8, 1] {
            fb.set_pixel(3, 3, initial, CompositingMode::Set);
            fb.set_pixel(3, 3, 1, CompositingMode::Xor);
            assert_eq!(fb.get_pixel(3, 3), initial ^ 1);
            fb.set_pixel(3, 3, 1, CompositingMode::Xor);
            assert_eq!(fb.get_pixel(3, 3), initial);
        }
    }

    #[test]
    fn test_modes_return_previous_bit() {
        let mut fb = fb();
        assert_eq!(fb.set_pixel(1, 1, 1, CompositingMode::Or), 0);
        assert_eq!(fb.set_pixel(1, 1, 0, CompositingMode::And), 1);
        assert_eq!(fb.get_pixel(1, 1), 0);
        assert_eq!(fb.set_pixel(1, 1, 0, CompositingMode::Not), 0);
        assert_eq!(fb.get_pixel(1, 1), 1);
        assert_eq!(fb.set_pixel(1, 1, 1, CompositingMode::Not), 1);
        assert_eq!(fb.get_pixel(1, 1), 0);
    }

    #[test]
    fn test_clear_keeps_header() {
        let mut fb = fb();
        for x in 0..128 {
            fb.set_pixel(x, x / 2, 1, CompositingMode::Set);
        }
        fb.clear();
        assert_eq!(fb.header(), 0x40);
        for x in 0..128 {
            for y in 0..64 {
                assert_eq!(fb.get_pixel(x, y), 0);
            }
        }
    }

    #[test]
    fn test_page_gathers_row_of_bytes() {
        let mut fb = PagedFrameBuffer::new(4, 16, 0x40).unwrap();
        fb.set_pixel(0, 8, 1, CompositingMode::Set);
        fb.set_pixel(3, 15, 1, CompositingMode::Set);
        let page1: Vec<u8> = fb.page(1).collect();
        assert_eq!(page1, vec![0x01, 0x00, 0x00, 0x80]);
        assert_eq!(fb.page(2).count(), 0);
    }

    #[test]
    fn test_pbm_export() {
        let mut fb = PagedFrameBuffer::new(3, 2, 0x40).unwrap();
        fb.set_pixel(1, 0, 1, CompositingMode::Set);
        fb.set_pixel(2, 1, 1, CompositingMode::Set);
        assert_eq!(fb.to_pbm(), "P1\n3 2\n0 1 0\n0 0 1\n");
    }

    #[test]
    fn test_load_accepts_with_or_without_header() {
        let mut src = PagedFrameBuffer::new(4, 16, 0x40).unwrap();
        src.set_pixel(2, 9, 1, CompositingMode::Set);

        let mut dst = PagedFrameBuffer::new(4, 16, 0x40).unwrap();
        dst.load(src.as_bytes()).unwrap();
        assert_eq!(dst.get_pixel(2, 9), 1);

        dst.clear();
        dst.load(src.pixels()).unwrap();
        assert_eq!(dst.as_bytes(), src.as_bytes());

        assert!(matches!(
            dst.load(&[0u8; 3]),
            Err(DisplayError::BufferSizeMismatch { expected: 9, actual: 3 })
        ));
    }

    #[test]
    fn test_load_page_writes_one_row_of_bytes() {
        let mut fb = PagedFrameBuffer::new(4, 16, 0x40).unwrap();
        fb.load_page(1, 1, &[0x01, 0xFF, 0x80, 0xAA]);
        assert_eq!(fb.page(1).collect::<Vec<_>>(), vec![0x00, 0x01, 0xFF, 0x80]);
        assert_eq!(fb.page(0).collect::<Vec<_>>(), vec![0, 0, 0, 0]);
        fb.load_page(9, 0, &[0xFF]);
        assert_eq!(fb.count_on_pixels(), 10);
    }
}
