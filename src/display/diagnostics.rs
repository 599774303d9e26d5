/*
 *  display/diagnostics.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Optional reporting of silently absorbed drawing mistakes
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

use log::debug;

/// A drawing call that had no visible effect
///
/// Drawing never fails. These events exist so a development build can
/// see what was dropped; the default display has no hook installed and
/// pays nothing beyond a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Write outside `[0, W) x [0, H)`
    OutOfBounds { x: i32, y: i32 },

    /// Write inside the buffer but outside the active clip
    Clipped { x: i32, y: i32 },

    /// Text drawn with no active font
    NoFont,

    /// Character outside the active font's range
    UnsupportedGlyph(char),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OutOfBounds { x, y } => write!(f, "pixel ({}, {}) outside buffer", x, y),
            Diagnostic::Clipped { x, y } => write!(f, "pixel ({}, {}) outside clip", x, y),
            Diagnostic::NoFont => write!(f, "no font selected"),
            Diagnostic::UnsupportedGlyph(c) => write!(f, "glyph {:?} not in font", c),
        }
    }
}

/// Callback receiving diagnostics
pub type DiagnosticHook = Box<dyn FnMut(&Diagnostic) + Send>;

/// Hook forwarding every diagnostic to `log::debug!`
pub fn log_hook() -> DiagnosticHook {
    Box::new(|d: &Diagnostic| debug!("draw: {}", d))
}

/// Hook counting diagnostics into a shared tally
///
/// Handy in tests and for "how much did this frame throw away" probes.
pub fn counting_hook(
    tally: std::sync::Arc<std::sync::Mutex<Vec<Diagnostic>>>,
) -> DiagnosticHook {
    Box::new(move |d: &Diagnostic| {
        if let Ok(mut seen) = tally.lock() {
            seen.push(*d);
        }
    })
}
