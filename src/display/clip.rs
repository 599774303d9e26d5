/*
 *  display/clip.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Clip rectangle gating framebuffer writes
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

/// Rectangle outside of which pixel writes are discarded
///
/// Containment is closed on both ends: a point is inside when
/// `x` lies in `[x, x + w]` and `y` lies in `[y, y + h]`. A clip of
/// `{0, 0, 9, 9}` therefore admits a 10x10 block of pixels, and the
/// full-screen clip of a 128x64 buffer is `{0, 0, 127, 63}`.
///
/// The rectangle primitives are tuned to this convention, so do not
/// change it to a half-open test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ClipRect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl ClipRect {
    pub const fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Clip covering every pixel of a `width` x `height` buffer
    pub fn full(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width.saturating_sub(1),
            h: height.saturating_sub(1),
        }
    }

    /// Closed-interval containment test
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x as i64 <= self.right()
            && y >= self.y
            && y as i64 <= self.bottom()
    }

    /// Rightmost column admitted by the clip
    ///
    /// Widened, since `x + w` can pass `i32::MAX`.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Bottom row admitted by the clip
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }
}
