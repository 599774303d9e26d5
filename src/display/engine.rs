/*
 *  display/engine.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Line, rectangle and circle rasterizers over the pixel primitive
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

use crate::display::mode::CompositingMode;
use crate::display::traits::PixelSurface;

/// Vector primitives, written once for every [`PixelSurface`]
///
/// Each primitive is nothing but repeated `set_pixel` calls under the
/// surface's current compositing mode. There is no batching and no
/// overlap detection: a pixel visited twice is composited twice, which
/// matters under XOR and NOT. Off-panel and clipped pixels are absorbed
/// by `set_pixel`, so none of these can fail.
///
/// Lengths are inclusive: a line of length `w` covers `w + 1` pixels.
/// Coordinate arithmetic is widened to `i64`; points that land beyond
/// the `i32` range are pinned to its edge, which is always off panel.
pub trait DrawingEngine: PixelSurface {
    /// Columns `x..=x + w` on row `y`
    ///
    /// Only the columns inside the buffer are visited.
    fn draw_hline(&mut self, x: i32, y: i32, w: i32, value: u8) {
        let (width, _) = self.dimensions();
        let (first, last) = span(x as i64, x as i64 + w as i64, width);
        for p in first..=last {
            self.set_pixel(p, y, value);
        }
    }

    /// Rows `y..=y + h` in column `x`
    ///
    /// Only the rows inside the buffer are visited.
    fn draw_vline(&mut self, x: i32, y: i32, h: i32, value: u8) {
        let (_, height) = self.dimensions();
        let (first, last) = span(y as i64, y as i64 + h as i64, height);
        for p in first..=last {
            self.set_pixel(x, p, value);
        }
    }

    /// Rectangle outline
    ///
    /// Edge lengths are deliberately uneven (top `w - 1`, bottom `w`,
    /// left `h - 1`, right `h`) and tuned to the closed clip test. Every
    /// corner is covered by two edges, so an XOR outline leaves its
    /// corners unlit.
    fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, value: u8) {
        let (x64, y64, w64, h64) = (x as i64, y as i64, w as i64, h as i64);
        self.draw_hline(x, y, pin(w64 - 1), value);
        self.draw_hline(x, pin(y64 + h64 - 1), w, value);
        self.draw_vline(x, y, pin(h64 - 1), value);
        self.draw_vline(pin(x64 + w64 - 1), y, h, value);
    }

    /// `h + 1` scanlines of length `w`, top to bottom
    fn draw_filled_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, value: u8) {
        let (_, height) = self.dimensions();
        let (first, last) = span(y as i64, y as i64 + h as i64, height);
        for row in first..=last {
            self.draw_hline(x, row, w, value);
        }
    }

    /// Bresenham line from (x0, y0) to (x1, y1), both ends included
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u8) {
        // axis-aligned lines cover the same pixels as the h/v spans
        if y0 == y1 {
            let (lo, hi) = (x0.min(x1).max(0), x0.max(x1));
            return self.draw_hline(lo, y0, pin(hi as i64 - lo as i64), value);
        }
        if x0 == x1 {
            let (lo, hi) = (y0.min(y1).max(0), y0.max(y1));
            return self.draw_vline(x0, lo, pin(hi as i64 - lo as i64), value);
        }

        let (x1, y1) = (x1 as i64, y1 as i64);
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = (y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = (if dx > dy { dx } else { -dy }) / 2;

        loop {
            // x and y never leave the span between the endpoints
            self.set_pixel(x as i32, y as i32, value);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x += sx;
            }
            if e2 < dy {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle outline
    ///
    /// The eight symmetric points are plotted both before and after each
    /// decision step, so most outline pixels are written twice. Harmless
    /// under SET/OR; under XOR/NOT those pixels cancel out. Kept as-is so
    /// rendered output matches existing firmware pixel for pixel.
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, value: u8) {
        let (cx, cy) = (cx as i64, cy as i64);
        let mut x = 0i64;
        let mut y = r as i64;
        let mut p = 3 - 2 * y;

        while x < y {
            plot_octants(self, cx, cy, x, y, value);
            x += 1;
            if p < 0 {
                p += 4 * x + 6;
            } else {
                y -= 1;
                p += 4 * (x - y) + 10;
            }
            plot_octants(self, cx, cy, x, y, value);
        }
    }

    /// Midpoint filled circle, one horizontal chord per symmetric pair
    ///
    /// Same double pass as [`draw_circle`](DrawingEngine::draw_circle).
    fn draw_filled_circle(&mut self, cx: i32, cy: i32, r: i32, value: u8) {
        let (cx, cy) = (cx as i64, cy as i64);
        let mut x = 0i64;
        let mut y = r as i64;
        let mut p = 3 - 2 * y;

        while x < y {
            fill_chords(self, cx, cy, x, y, value);
            x += 1;
            if p < 0 {
                p += 4 * x + 6;
            } else {
                y -= 1;
                p += 4 * (x - y) + 10;
            }
            fill_chords(self, cx, cy, x, y, value);
        }
    }

    /// Zero every pixel inside the active clip
    ///
    /// Writes under SET regardless of the current mode, then puts the
    /// caller's mode back. Use `clear_all` to wipe the whole buffer.
    fn clear(&mut self) {
        let clip = self.clip();
        let (width, height) = self.dimensions();
        // only the part of the clip that overlaps the buffer can change
        let left = clip.x.max(0);
        let top = clip.y.max(0);
        let right = pin(clip.right().min(width as i64 - 1));
        let bottom = pin(clip.bottom().min(height as i64 - 1));

        let previous = self.set_mode(CompositingMode::Set);
        for x in left..=right {
            for y in top..=bottom {
                self.set_pixel(x, y, 0);
            }
        }
        self.set_mode(previous);
    }
}

impl<T: PixelSurface + ?Sized> DrawingEngine for T {}

/// Inclusive span `from..=to` cut down to `0..extent`
///
/// Returns an empty range (`first > last`) when nothing overlaps.
#[inline]
fn span(from: i64, to: i64, extent: u32) -> (i32, i32) {
    (pin(from.max(0)), pin(to.min(extent as i64 - 1)))
}

/// Narrow a widened coordinate, pinning it to the `i32` range
#[inline]
fn pin(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[inline]
fn plot_octants<S: PixelSurface + ?Sized>(s: &mut S, cx: i64, cy: i64, x: i64, y: i64, v: u8) {
    s.set_pixel(pin(cx + x), pin(cy + y), v);
    s.set_pixel(pin(cx - x), pin(cy + y), v);
    s.set_pixel(pin(cx + x), pin(cy - y), v);
    s.set_pixel(pin(cx - x), pin(cy - y), v);
    s.set_pixel(pin(cx + y), pin(cy + x), v);
    s.set_pixel(pin(cx - y), pin(cy + x), v);
    s.set_pixel(pin(cx + y), pin(cy - x), v);
    s.set_pixel(pin(cx - y), pin(cy - x), v);
}

#[inline]
fn fill_chords<S: DrawingEngine + ?Sized>(s: &mut S, cx: i64, cy: i64, x: i64, y: i64, v: u8) {
    s.draw_line(pin(cx + x), pin(cy + y), pin(cx - x), pin(cy + y), v);
    s.draw_line(pin(cx + x), pin(cy - y), pin(cx - x), pin(cy - y), v);
    s.draw_line(pin(cx + y), pin(cy + x), pin(cx - y), pin(cy + x), v);
    s.draw_line(pin(cx + y), pin(cy - x), pin(cx - y), pin(cy - x), v);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::display::canvas::Canvas;
    use crate::display::clip::ClipRect;
    use crate::display::diagnostics::counting_hook;
    use crate::display::error::DisplayError;
    use crate::display::traits::DisplayCapabilities;
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    /// Bare canvas surface; no controller behind it
    pub(crate) struct Surface {
        canvas: Canvas,
        caps: DisplayCapabilities,
    }

    impl Surface {
        pub(crate) fn new(width: u32, height: u32) -> Self {
            Self {
                canvas: Canvas::new(width, height, 0x40).unwrap(),
                caps: DisplayCapabilities {
                    controller: "test",
                    width,
                    height,
                    max_fps: 0,
                    supports_contrast: false,
                    supports_invert: false,
                },
            }
        }

        pub(crate) fn lit(&self) -> BTreeSet<(i32, i32)> {
            let mut out = BTreeSet::new();
            for x in 0..self.caps.width as i32 {
                for y in 0..self.caps.height as i32 {
                    if self.get_pixel(x, y) == 1 {
                        out.insert((x, y));
                    }
                }
            }
            out
        }
    }

    impl PixelSurface for Surface {
        fn capabilities(&self) -> &DisplayCapabilities { &self.caps }
        fn get_pixel(&self, x: i32, y: i32) -> u8 { self.canvas.get_pixel(x, y) }
        fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> u8 { self.canvas.set_pixel(x, y, value) }
        fn begin(&mut self) -> Result<(), DisplayError> { Ok(()) }
        fn display(&mut self) -> Result<(), DisplayError> { Ok(()) }
        fn clear_all(&mut self) { self.canvas.clear_all() }
        fn mode(&self) -> CompositingMode { self.canvas.mode() }
        fn set_mode(&mut self, mode: CompositingMode) -> CompositingMode { self.canvas.set_mode(mode) }
        fn clip(&self) -> ClipRect { self.canvas.clip() }
        fn set_clip(&mut self, clip: ClipRect) { self.canvas.set_clip(clip) }
        fn clear_clip(&mut self) { self.canvas.clear_clip() }
    }

    fn surface() -> Surface {
        Surface::new(128, 64)
    }

    #[test]
    fn test_hline_inclusive() {
        let mut s = surface();
        s.draw_hline(3, 7, 5, 1);
        let expect: BTreeSet<_> = (3..=8).map(|x| (x, 7)).collect();
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_vline_inclusive() {
        let mut s = surface();
        s.draw_vline(4, 10, 3, 1);
        let expect: BTreeSet<_> = (10..=13).map(|y| (4, y)).collect();
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_negative_length_draws_nothing() {
        let mut s = surface();
        s.draw_hline(10, 10, -1, 1);
        s.draw_vline(10, 10, -4, 1);
        assert!(s.lit().is_empty());
    }

    #[test]
    fn test_filled_rectangle_bounds() {
        let mut s = surface();
        s.draw_filled_rectangle(10, 10, 20, 10, 1);
        assert_eq!(s.get_pixel(10, 10), 1);
        assert_eq!(s.get_pixel(9, 10), 0);
        assert_eq!(s.get_pixel(30, 10), 1);
        assert_eq!(s.get_pixel(31, 10), 0);
        assert_eq!(s.get_pixel(10, 20), 1);
        assert_eq!(s.get_pixel(10, 21), 0);
        assert_eq!(s.lit().len(), 21 * 11);
    }

    #[test]
    fn test_rectangle_edges() {
        let mut s = surface();
        s.draw_rectangle(0, 0, 4, 3, 1);
        // top x 0..=3 @ y0, bottom x 0..=4 @ y2, left y 0..=2 @ x0, right y 0..=3 @ x3
        let mut expect = BTreeSet::new();
        for x in 0..=3 { expect.insert((x, 0)); }
        for x in 0..=4 { expect.insert((x, 2)); }
        for y in 0..=2 { expect.insert((0, y)); }
        for y in 0..=3 { expect.insert((3, y)); }
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_rectangle_under_xor_toggles_overlaps() {
        let mut s = surface();
        s.set_mode(CompositingMode::Xor);
        s.draw_rectangle(0, 0, 4, 3, 1);
        // each corner is hit by two edges
        for corner in [(0, 0), (3, 0), (0, 2), (3, 2)] {
            assert_eq!(s.get_pixel(corner.0, corner.1), 0, "corner {:?}", corner);
        }
        assert_eq!(s.get_pixel(1, 0), 1);
        assert_eq!(s.get_pixel(0, 1), 1);
        assert_eq!(s.get_pixel(4, 2), 1);
        assert_eq!(s.get_pixel(3, 3), 1);
    }

    #[test]
    fn test_horizontal_line_matches_hline() {
        let mut a = surface();
        let mut b = surface();
        a.draw_line(0, 0, 10, 0, 1);
        b.draw_hline(0, 0, 10, 1);
        assert_eq!(a.lit(), b.lit());

        let mut a = surface();
        a.draw_line(10, 5, 0, 5, 1);
        let mut b = surface();
        b.draw_hline(0, 5, 10, 1);
        assert_eq!(a.lit(), b.lit());
    }

    #[test]
    fn test_vertical_line_matches_vline() {
        let mut a = surface();
        let mut b = surface();
        a.draw_line(7, 20, 7, 2, 1);
        b.draw_vline(7, 2, 18, 1);
        assert_eq!(a.lit(), b.lit());
    }

    #[test]
    fn test_line_endpoints_all_octants() {
        let c = (32, 32);
        let ends = [
            (50, 40), (40, 50), (24, 50), (14, 40),
            (14, 24), (24, 14), (40, 14), (50, 24),
        ];
        for &(ex, ey) in &ends {
            let mut s = surface();
            s.draw_line(c.0, c.1, ex, ey, 1);
            assert_eq!(s.get_pixel(c.0, c.1), 1);
            assert_eq!(s.get_pixel(ex, ey), 1, "end ({}, {})", ex, ey);
            let steps = (ex - c.0).abs().max((ey - c.1).abs());
            assert_eq!(s.lit().len() as i32, steps + 1, "end ({}, {})", ex, ey);
        }
    }

    #[test]
    fn test_diagonal_line() {
        let mut s = surface();
        s.draw_line(0, 0, 5, 5, 1);
        let expect: BTreeSet<_> = (0..=5).map(|i| (i, i)).collect();
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_single_point_line() {
        let mut s = surface();
        s.draw_line(9, 9, 9, 9, 1);
        assert_eq!(s.lit().into_iter().collect::<Vec<_>>(), vec![(9, 9)]);
    }

    #[test]
    fn test_line_off_panel_is_absorbed() {
        let mut s = surface();
        s.draw_line(-10, -10, 200, 100, 1);
        assert!(!s.lit().is_empty());
        assert_eq!(s.get_pixel(127, 0), 0);
    }

    #[test]
    fn test_circle_symmetric() {
        let mut s = surface();
        s.draw_circle(32, 32, 10, 1);
        let lit = s.lit();
        assert!(lit.contains(&(32, 42)));
        assert!(lit.contains(&(32, 22)));
        assert!(lit.contains(&(42, 32)));
        assert!(lit.contains(&(22, 32)));
        assert!(!lit.contains(&(32, 32)));
        for &(x, y) in &lit {
            let (dx, dy) = (x - 32, y - 32);
            assert!(lit.contains(&(32 - dx, 32 + dy)));
            assert!(lit.contains(&(32 + dx, 32 - dy)));
            assert!(lit.contains(&(32 + dy, 32 + dx)));
        }
    }

    #[test]
    fn test_circle_double_plot_cancels_under_xor() {
        let mut set = surface();
        set.draw_circle(32, 32, 10, 1);

        let mut xor = surface();
        xor.set_mode(CompositingMode::Xor);
        xor.draw_circle(32, 32, 10, 1);

        // the cardinal points are plotted twice in the first iteration
        assert_eq!(set.get_pixel(32, 42), 1);
        assert_eq!(xor.get_pixel(32, 42), 0);
        assert!(xor.lit().len() < set.lit().len());
    }

    #[test]
    fn test_filled_circle_double_pass_under_xor() {
        let mut s = surface();
        s.set_mode(CompositingMode::Xor);
        s.draw_filled_circle(10, 10, 3, 1);
        // each chord lands an even number of times except the two poles
        // from the very first step
        let expect: BTreeSet<_> = [(10, 7), (10, 13)].into_iter().collect();
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut s = surface();
        s.draw_hline(i32::MAX - 5, 0, 10, 1);
        s.draw_vline(0, i32::MAX - 5, 10, 1);
        s.draw_line(i32::MIN, 0, 10, 0, 1);
        s.draw_line(0, i32::MAX, 0, i32::MAX - 3, 1);
        s.draw_rectangle(i32::MAX - 2, i32::MAX - 2, i32::MAX, i32::MAX, 1);
        s.draw_rectangle(0, 0, i32::MIN, i32::MIN, 1);
        s.draw_filled_rectangle(0, i32::MAX - 1, 3, 5, 1);
        s.draw_circle(i32::MAX, i32::MIN, 4, 1);
        s.draw_filled_circle(i32::MIN, i32::MAX, 4, 1);
        s.draw_circle(0, 0, i32::MIN, 1);
        s.draw_line(i32::MAX - 3, i32::MIN, i32::MAX, i32::MIN + 2, 1);

        // only the on-panel part of the long line lands
        let expect: BTreeSet<_> = (0..=10).map(|x| (x, 0)).collect();
        assert_eq!(s.lit(), expect);

        s.set_clip(ClipRect::new(i32::MAX, 0, 1, 1));
        s.clear();
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_region_clear_only_visits_buffer() {
        let tally = Arc::new(Mutex::new(Vec::new()));
        let mut s = surface();
        s.canvas.set_diagnostic_hook(Some(counting_hook(Arc::clone(&tally))));
        s.draw_filled_rectangle(0, 0, 127, 63, 1);
        s.set_clip(ClipRect::new(-20000, -20000, 40000, 40000));
        s.clear();

        assert!(s.lit().is_empty());
        assert!(tally.lock().unwrap().is_empty());
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut s = surface();
        s.draw_circle(5, 5, 0, 1);
        s.draw_filled_circle(5, 5, 0, 1);
        assert!(s.lit().is_empty());
    }

    #[test]
    fn test_filled_circle_covers_interior() {
        let mut s = surface();
        s.draw_filled_circle(32, 32, 8, 1);
        assert_eq!(s.get_pixel(32, 32), 1);
        assert_eq!(s.get_pixel(36, 35), 1);
        assert_eq!(s.get_pixel(32, 40), 1);
        assert_eq!(s.get_pixel(32, 41), 0);
        assert_eq!(s.get_pixel(41, 32), 0);

        let mut outline = surface();
        outline.draw_circle(32, 32, 8, 1);
        assert!(outline.lit().is_subset(&s.lit()));
    }

    #[test]
    fn test_clip_scenario() {
        let mut s = surface();
        s.set_clip(ClipRect::new(0, 0, 9, 9));
        s.draw_hline(0, 0, 20, 1);
        let expect: BTreeSet<_> = (0..=9).map(|x| (x, 0)).collect();
        assert_eq!(s.lit(), expect);
    }

    #[test]
    fn test_region_clear_respects_clip_and_restores_mode() {
        let mut s = surface();
        s.draw_filled_rectangle(0, 0, 20, 20, 1);
        s.set_clip(ClipRect::new(5, 5, 4, 4));
        s.set_mode(CompositingMode::Xor);
        s.clear();

        assert_eq!(s.mode(), CompositingMode::Xor);
        assert_eq!(s.get_pixel(5, 5), 0);
        assert_eq!(s.get_pixel(9, 9), 0);
        assert_eq!(s.get_pixel(10, 9), 1);
        assert_eq!(s.get_pixel(4, 5), 1);
        assert_eq!(s.lit().len(), 21 * 21 - 25);
    }
}
