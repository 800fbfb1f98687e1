// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use thiserror::Error;

/// Error produced when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not a 6-digit hex color of the form `#rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// An 8-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string. The leading `#` is optional and hex
    /// digits may be upper- or lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for anything that is not exactly
    /// six hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_owned()));
        }
        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_owned()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color as a 6-digit, zero-padded, lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear per-channel blend between two colors.
    ///
    /// This is the plain RGB-space fallback for callers that do not want the
    /// HSL shortest-arc behavior of [`crate::interpolate`]. `factor` is
    /// clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(a: Self, b: Self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| {
            let blended = f64::from(x) + (f64::from(y) - f64::from(x)) * factor;
            blended.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("FF8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "#", "#fff", "#gghhii", "#1234567", "red"] {
            assert!(Rgb::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn hex_output_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(10, 0, 255).to_hex(), "#0a00ff");
    }

    #[test]
    fn hex_round_trips() {
        for hex in ["#000000", "#ffffff", "#0a0a0f", "#e8f4fd"] {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Rgb::new(1, 2, 3);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
    }
}
