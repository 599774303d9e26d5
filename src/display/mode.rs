/*
 *  display/mode.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Pixel compositing modes
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
use std::str::FromStr;

/// How a requested pixel value merges with the value already stored
///
/// Every write through the framebuffer is resolved by one of these rules.
/// Parses from and prints as the lowercase name (`"xor"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositingMode {
    /// Store the requested value as-is
    #[default]
    Set,

    /// Logical OR with the stored value
    Or,

    /// Logical AND with the stored value
    And,

    /// Logical XOR with the stored value
    Xor,

    /// Store the inverse of the requested value, ignoring the stored one
    Not,
}

impl CompositingMode {
    /// Resolve the bit to store from the existing bit and the requested one
    ///
    /// Both inputs are treated as booleans; any non-zero value is "on".
    /// The result is always 0 or 1.
    #[inline]
    pub fn apply(self, existing: u8, requested: u8) -> u8 {
        let e = existing != 0;
        let v = requested != 0;
        let out = match self {
            CompositingMode::Set => v,
            CompositingMode::Or => v | e,
            CompositingMode::And => v & e,
            CompositingMode::Xor => v ^ e,
            CompositingMode::Not => !v,
        };
        out as u8
    }
}

impl fmt::Display for CompositingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompositingMode::Set => "set",
            CompositingMode::Or => "or",
            CompositingMode::And => "and",
            CompositingMode::Xor => "xor",
            CompositingMode::Not => "not",
        };
        f.write_str(name)
    }
}

impl FromStr for CompositingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "set" => Ok(CompositingMode::Set),
            "or" => Ok(CompositingMode::Or),
            "and" => Ok(CompositingMode::And),
            "xor" => Ok(CompositingMode::Xor),
            "not" => Ok(CompositingMode::Not),
            other => Err(format!("unknown compositing mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_tables() {
        use CompositingMode::*;
        // (existing, requested) -> stored
        let cases = [(0u8, 0u8), (0, 1), (1, 0), (1, 1)];
        let expect = |m: CompositingMode| -> [u8; 4] {
            match m {
                Set => [0, 1, 0, 1],
                Or => [0, 1, 1, 1],
                And => [0, 0, 0, 1],
                Xor => [0, 1, 1, 0],
                Not => [1, 0, 1, 0],
            }
        };
        for mode in [Set, Or, And, Xor, Not] {
            let got: Vec<u8> = cases.iter().map(|&(e, v)| mode.apply(e, v)).collect();
            assert_eq!(got, expect(mode).to_vec(), "mode {}", mode);
        }
    }

    #[test]
    fn test_non_binary_inputs_normalised() {
        assert_eq!(CompositingMode::Set.apply(0, 0x80), 1);
        assert_eq!(CompositingMode::Xor.apply(7, 3), 0);
        assert_eq!(CompositingMode::Not.apply(0, 2), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("XOR".parse::<CompositingMode>(), Ok(CompositingMode::Xor));
        assert!("blend".parse::<CompositingMode>().is_err());
        assert_eq!(CompositingMode::Not.to_string().parse::<CompositingMode>(), Ok(CompositingMode::Not));
        assert_eq!(CompositingMode::default(), CompositingMode::Set);
    }
}
