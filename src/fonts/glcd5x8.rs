/*
 *  fonts/glcd5x8.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Classic 5x7 LCD font (7 rows + descender row) in GFX layout
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

use crate::display::font::{Font, Glyph};

// 5 bytes per glyph: 5 columns x 8 rows, MSB first, row-major
static BITMAP: [u8; 475] = [
    0x00, 0x00, 0x00, 0x00, 0x00,  // 0x20 space
    0x21, 0x08, 0x42, 0x00, 0x80,  // 0x21 !
    0x52, 0x94, 0x00, 0x00, 0x00,  // 0x22 "
    0x52, 0xBE, 0xAF, 0xA9, 0x40,  // 0x23 #
    0x23, 0xE8, 0xE2, 0xF8, 0x80,  // 0x24 $
    0xC6, 0x44, 0x44, 0x4C, 0x60,  // 0x25 %
    0x64, 0xA8, 0x8A, 0xC9, 0xA0,  // 0x26 &
    0x61, 0x10, 0x00, 0x00, 0x00,  // 0x27 '
    0x11, 0x10, 0x84, 0x10, 0x40,  // 0x28 (
    0x41, 0x04, 0x21, 0x11, 0x00,  // 0x29 )
    0x01, 0x2A, 0xEA, 0x90, 0x00,  // 0x2A *
    0x01, 0x09, 0xF2, 0x10, 0x00,  // 0x2B +
    0x00, 0x00, 0x06, 0x11, 0x00,  // 0x2C ,
    0x00, 0x01, 0xF0, 0x00, 0x00,  // 0x2D -
    0x00, 0x00, 0x00, 0x31, 0x80,  // 0x2E .
    0x00, 0x44, 0x44, 0x40, 0x00,  // 0x2F /
    0x74, 0x67, 0x5C, 0xC5, 0xC0,  // 0x30 0
    0x23, 0x08, 0x42, 0x11, 0xC0,  // 0x31 1
    0x74, 0x42, 0x22, 0x23, 0xE0,  // 0x32 2
    0xF8, 0x88, 0x20, 0xC5, 0xC0,  // 0x33 3
    0x11, 0x95, 0x2F, 0x88, 0x40,  // 0x34 4
    0xFC, 0x3C, 0x10, 0xC5, 0xC0,  // 0x35 5
    0x32, 0x21, 0xE8, 0xC5, 0xC0,  // 0x36 6
    0xF8, 0x44, 0x44, 0x21, 0x00,  // 0x37 7
    0x74, 0x62, 0xE8, 0xC5, 0xC0,  // 0x38 8
    0x74, 0x62, 0xF0, 0x89, 0x80,  // 0x39 9
    0x03, 0x18, 0x06, 0x30, 0x00,  // 0x3A :
    0x03, 0x18, 0x06, 0x11, 0x00,  // 0x3B ;
    0x11, 0x11, 0x04, 0x10, 0x40,  // 0x3C <
    0x00, 0x3E, 0x0F, 0x80, 0x00,  // 0x3D =
    0x41, 0x04, 0x11, 0x11, 0x00,  // 0x3E >
    0x74, 0x42, 0x22, 0x00, 0x80,  // 0x3F ?
    0x74, 0x42, 0xDA, 0xD5, 0xC0,  // 0x40 @
    0x74, 0x63, 0x1F, 0xC6, 0x20,  // 0x41 A
    0xF4, 0x63, 0xE8, 0xC7, 0xC0,  // 0x42 B
    0x74, 0x61, 0x08, 0x45, 0xC0,  // 0x43 C
    0xE4, 0xA3, 0x18, 0xCB, 0x80,  // 0x44 D
    0xFC, 0x21, 0xE8, 0x43, 0xE0,  // 0x45 E
    0xFC, 0x21, 0xE8, 0x42, 0x00,  // 0x46 F
    0x74, 0x61, 0x78, 0xC5, 0xE0,  // 0x47 G
    0x8C, 0x63, 0xF8, 0xC6, 0x20,  // 0x48 H
    0x71, 0x08, 0x42, 0x11, 0xC0,  // 0x49 I
    0x38, 0x84, 0x21, 0x49, 0x80,  // 0x4A J
    0x8C, 0xA9, 0x8A, 0x4A, 0x20,  // 0x4B K
    0x84, 0x21, 0x08, 0x43, 0xE0,  // 0x4C L
    0x8E, 0xEB, 0x58, 0xC6, 0x20,  // 0x4D M
    0x8C, 0x73, 0x59, 0xC6, 0x20,  // 0x4E N
    0x74, 0x63, 0x18, 0xC5, 0xC0,  // 0x4F O
    0xF4, 0x63, 0xE8, 0x42, 0x00,  // 0x50 P
    0x74, 0x63, 0x1A, 0xC9, 0xA0,  // 0x51 Q
    0xF4, 0x63, 0xEA, 0x4A, 0x20,  // 0x52 R
    0x7C, 0x20, 0xE0, 0x87, 0xC0,  // 0x53 S
    0xF9, 0x08, 0x42, 0x10, 0x80,  // 0x54 T
    0x8C, 0x63, 0x18, 0xC5, 0xC0,  // 0x55 U
    0x8C, 0x63, 0x18, 0xA8, 0x80,  // 0x56 V
    0x8C, 0x63, 0x5A, 0xD5, 0x40,  // 0x57 W
    0x8C, 0x54, 0x45, 0x46, 0x20,  // 0x58 X
    0x8C, 0x62, 0xA2, 0x10, 0x80,  // 0x59 Y
    0xF8, 0x44, 0x44, 0x43, 0xE0,  // 0x5A Z
    0x72, 0x10, 0x84, 0x21, 0xC0,  // 0x5B [
    0x04, 0x10, 0x41, 0x04, 0x00,  // 0x5C \
    0x70, 0x84, 0x21, 0x09, 0xC0,  // 0x5D ]
    0x22, 0xA2, 0x00, 0x00, 0x00,  // 0x5E ^
    0x00, 0x00, 0x00, 0x03, 0xE0,  // 0x5F _
    0x41, 0x04, 0x00, 0x00, 0x00,  // 0x60 `
    0x00, 0x1C, 0x17, 0xC5, 0xE0,  // 0x61 a
    0x84, 0x2D, 0x98, 0xC7, 0xC0,  // 0x62 b
    0x00, 0x1D, 0x08, 0x45, 0xC0,  // 0x63 c
    0x08, 0x5B, 0x38, 0xC5, 0xE0,  // 0x64 d
    0x00, 0x1D, 0x1F, 0xC1, 0xC0,  // 0x65 e
    0x32, 0x51, 0xC4, 0x21, 0x00,  // 0x66 f
    0x03, 0xE3, 0x17, 0x85, 0xC0,  // 0x67 g
    0x84, 0x2D, 0x98, 0xC6, 0x20,  // 0x68 h
    0x20, 0x18, 0x42, 0x11, 0xC0,  // 0x69 i
    0x10, 0x0C, 0x21, 0x49, 0x80,  // 0x6A j
    0x84, 0x25, 0x4C, 0x52, 0x40,  // 0x6B k
    0x61, 0x08, 0x42, 0x11, 0xC0,  // 0x6C l
    0x00, 0x35, 0x5A, 0xC6, 0x20,  // 0x6D m
    0x00, 0x2D, 0x98, 0xC6, 0x20,  // 0x6E n
    0x00, 0x1D, 0x18, 0xC5, 0xC0,  // 0x6F o
    0x00, 0x3D, 0x1F, 0x42, 0x00,  // 0x70 p
    0x00, 0x1B, 0x37, 0x84, 0x20,  // 0x71 q
    0x00, 0x2D, 0x98, 0x42, 0x00,  // 0x72 r
    0x00, 0x1D, 0x07, 0x07, 0xC0,  // 0x73 s
    0x42, 0x38, 0x84, 0x24, 0xC0,  // 0x74 t
    0x00, 0x23, 0x18, 0xCD, 0xA0,  // 0x75 u
    0x00, 0x23, 0x18, 0xA8, 0x80,  // 0x76 v
    0x00, 0x23, 0x1A, 0xD5, 0x40,  // 0x77 w
    0x00, 0x22, 0xA2, 0x2A, 0x20,  // 0x78 x
    0x00, 0x23, 0x17, 0x85, 0xC0,  // 0x79 y
    0x00, 0x3E, 0x22, 0x23, 0xE0,  // 0x7A z
    0x11, 0x08, 0x82, 0x10, 0x40,  // 0x7B {
    0x21, 0x08, 0x42, 0x10, 0x80,  // 0x7C |
    0x41, 0x08, 0x22, 0x11, 0x00,  // 0x7D }
    0x00, 0x00, 0xD9, 0x00, 0x00,  // 0x7E ~
];

// every cell is 5x8 on a 6 pixel pitch; the bitmap top sits on the line top
static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 5, 8, 6, 0, -8),
    Glyph::new(5, 5, 8, 6, 0, -8),
    Glyph::new(10, 5, 8, 6, 0, -8),
    Glyph::new(15, 5, 8, 6, 0, -8),
    Glyph::new(20, 5, 8, 6, 0, -8),
    Glyph::new(25, 5, 8, 6, 0, -8),
    Glyph::new(30, 5, 8, 6, 0, -8),
    Glyph::new(35, 5, 8, 6, 0, -8),
    Glyph::new(40, 5, 8, 6, 0, -8),
    Glyph::new(45, 5, 8, 6, 0, -8),
    Glyph::new(50, 5, 8, 6, 0, -8),
    Glyph::new(55, 5, 8, 6, 0, -8),
    Glyph::new(60, 5, 8, 6, 0, -8),
    Glyph::new(65, 5, 8, 6, 0, -8),
    Glyph::new(70, 5, 8, 6, 0, -8),
    Glyph::new(75, 5, 8, 6, 0, -8),
    Glyph::new(80, 5, 8, 6, 0, -8),
    Glyph::new(85, 5, 8, 6, 0, -8),
    Glyph::new(90, 5, 8, 6, 0, -8),
    Glyph::new(95, 5, 8, 6, 0, -8),
    Glyph::new(100, 5, 8, 6, 0, -8),
    Glyph::new(105, 5, 8, 6, 0, -8),
    Glyph::new(110, 5, 8, 6, 0, -8),
    Glyph::new(115, 5, 8, 6, 0, -8),
    Glyph::new(120, 5, 8, 6, 0, -8),
    Glyph::new(125, 5, 8, 6, 0, -8),
    Glyph::new(130, 5, 8, 6, 0, -8),
    Glyph::new(135, 5, 8, 6, 0, -8),
    Glyph::new(140, 5, 8, 6, 0, -8),
    Glyph::new(145, 5, 8, 6, 0, -8),
    Glyph::new(150, 5, 8, 6, 0, -8),
    Glyph::new(155, 5, 8, 6, 0, -8),
    Glyph::new(160, 5, 8, 6, 0, -8),
    Glyph::new(165, 5, 8, 6, 0, -8),
    Glyph::new(170, 5, 8, 6, 0, -8),
    Glyph::new(175, 5, 8, 6, 0, -8),
    Glyph::new(180, 5, 8, 6, 0, -8),
    Glyph::new(185, 5, 8, 6, 0, -8),
    Glyph::new(190, 5, 8, 6, 0, -8),
    Glyph::new(195, 5, 8, 6, 0, -8),
    Glyph::new(200, 5, 8, 6, 0, -8),
    Glyph::new(205, 5, 8, 6, 0, -8),
    Glyph::new(210, 5, 8, 6, 0, -8),
    Glyph::new(215, 5, 8, 6, 0, -8),
    Glyph::new(220, 5, 8, 6, 0, -8),
    Glyph::new(225, 5, 8, 6, 0, -8),
    Glyph::new(230, 5, 8, 6, 0, -8),
    Glyph::new(235, 5, 8, 6, 0, -8),
    Glyph::new(240, 5, 8, 6, 0, -8),
    Glyph::new(245, 5, 8, 6, 0, -8),
    Glyph::new(250, 5, 8, 6, 0, -8),
    Glyph::new(255, 5, 8, 6, 0, -8),
    Glyph::new(260, 5, 8, 6, 0, -8),
    Glyph::new(265, 5, 8, 6, 0, -8),
    Glyph::new(270, 5, 8, 6, 0, -8),
    Glyph::new(275, 5, 8, 6, 0, -8),
    Glyph::new(280, 5, 8, 6, 0, -8),
    Glyph::new(285, 5, 8, 6, 0, -8),
    Glyph::new(290, 5, 8, 6, 0, -8),
    Glyph::new(295, 5, 8, 6, 0, -8),
    Glyph::new(300, 5, 8, 6, 0, -8),
    Glyph::new(305, 5, 8, 6, 0, -8),
    Glyph::new(310, 5, 8, 6, 0, -8),
    Glyph::new(315, 5, 8, 6, 0, -8),
    Glyph::new(320, 5, 8, 6, 0, -8),
    Glyph::new(325, 5, 8, 6, 0, -8),
    Glyph::new(330, 5, 8, 6, 0, -8),
    Glyph::new(335, 5, 8, 6, 0, -8),
    Glyph::new(340, 5, 8, 6, 0, -8),
    Glyph::new(345, 5, 8, 6, 0, -8),
    Glyph::new(350, 5, 8, 6, 0, -8),
    Glyph::new(355, 5, 8, 6, 0, -8),
    Glyph::new(360, 5, 8, 6, 0, -8),
    Glyph::new(365, 5, 8, 6, 0, -8),
    Glyph::new(370, 5, 8, 6, 0, -8),
    Glyph::new(375, 5, 8, 6, 0, -8),
    Glyph::new(380, 5, 8, 6, 0, -8),
    Glyph::new(385, 5, 8, 6, 0, -8),
    Glyph::new(390, 5, 8, 6, 0, -8),
    Glyph::new(395, 5, 8, 6, 0, -8),
    Glyph::new(400, 5, 8, 6, 0, -8),
    Glyph::new(405, 5, 8, 6, 0, -8),
    Glyph::new(410, 5, 8, 6, 0, -8),
    Glyph::new(415, 5, 8, 6, 0, -8),
    Glyph::new(420, 5, 8, 6, 0, -8),
    Glyph::new(425, 5, 8, 6, 0, -8),
    Glyph::new(430, 5, 8, 6, 0, -8),
    Glyph::new(435, 5, 8, 6, 0, -8),
    Glyph::new(440, 5, 8, 6, 0, -8),
    Glyph::new(445, 5, 8, 6, 0, -8),
    Glyph::new(450, 5, 8, 6, 0, -8),
    Glyph::new(455, 5, 8, 6, 0, -8),
    Glyph::new(460, 5, 8, 6, 0, -8),
    Glyph::new(465, 5, 8, 6, 0, -8),
    Glyph::new(470, 5, 8, 6, 0, -8),
];

/// Printable ASCII, 0x20..=0x7E
pub static GLCD_5X8: Font = Font {
    bitmap: &BITMAP,
    glyphs: &GLYPHS,
    first: 0x20,
    last: 0x7E,
    y_advance: 8,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_printable_ascii() {
        for c in ' '..='~' {
            let g = GLCD_5X8.glyph(c).unwrap();
            assert_eq!((g.width, g.height, g.x_advance), (5, 8, 6));
            assert!(g.bitmap_offset as usize + 5 <= GLCD_5X8.bitmap.len());
        }
        assert!(GLCD_5X8.glyph('\u{7f}').is_none());
        assert!(GLCD_5X8.glyph('\n').is_none());
    }

    #[test]
    fn test_space_is_blank() {
        let g = GLCD_5X8.glyph(' ').unwrap();
        let start = g.bitmap_offset as usize;
        assert!(GLCD_5X8.bitmap[start..start + 5].iter().all(|&b| b == 0));
    }
}
