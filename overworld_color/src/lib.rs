// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overworld Color: hex/RGB/HSL conversions and shortest-arc interpolation.
//!
//! This crate provides the small, pure color utilities used by the sky-color
//! engine: parsing and formatting `#rrggbb` strings, converting between RGB
//! and HSL, and blending two colors. Blending happens in HSL space and always
//! takes the shorter arc around the hue wheel, so a transition from a warm
//! sunset orange to a cold night blue never detours through green.
//!
//! ## Minimal example
//!
//! ```rust
//! use overworld_color::{Rgb, interpolate};
//!
//! let midpoint = interpolate("#ff0000", "#0000ff", 0.5).unwrap();
//! // Red and blue meet at magenta, not at the green side of the wheel.
//! assert_eq!(midpoint, Rgb::new(255, 0, 255).to_hex());
//! ```
//!
//! ## Design notes
//!
//! - Hue is in degrees `[0, 360)`, saturation and lightness in percent.
//! - Hex output is always a 6-digit, zero-padded, lowercase `#rrggbb`.
//! - A malformed hex endpoint is an explicit [`ColorError`], never a silently
//!   substituted color. Callers that already hold [`Rgb`] values can use
//!   [`Rgb::lerp`] for plain linear blending without going through HSL.

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::{ColorError, Rgb};

/// Blend two hex colors, returning the result as a hex string.
///
/// `factor` is clamped to `[0, 1]`; `0` yields `a` and `1` yields `b`
/// exactly. Interpolation runs in HSL space with shortest-arc hue handling;
/// saturation and lightness blend linearly.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if either endpoint is not a valid
/// `#rrggbb` string.
pub fn interpolate(a: &str, b: &str, factor: f64) -> Result<String, ColorError> {
    let ra = Rgb::from_hex(a)?;
    let rb = Rgb::from_hex(b)?;
    let factor = factor.clamp(0.0, 1.0);
    // Endpoints and equal inputs bypass the HSL round trip so they are exact
    // rather than subject to 8-bit re-quantization.
    if ra == rb || factor == 0.0 {
        return Ok(ra.to_hex());
    }
    if factor == 1.0 {
        return Ok(rb.to_hex());
    }
    let blended = Rgb::from(Hsl::lerp(Hsl::from(ra), Hsl::from(rb), factor));
    Ok(blended.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_is_identity_on_equal_colors() {
        for factor in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let out = interpolate("#8a5a3a", "#8a5a3a", factor).unwrap();
            assert_eq!(out, "#8a5a3a");
        }
    }

    #[test]
    fn interpolate_is_exact_at_endpoints() {
        let a = "#0a0a0f";
        let b = "#e8f4fd";
        assert_eq!(interpolate(a, b, 0.0).unwrap(), a);
        assert_eq!(interpolate(a, b, 1.0).unwrap(), b);
    }

    #[test]
    fn interpolate_clamps_factor() {
        let a = "#102030";
        let b = "#405060";
        assert_eq!(interpolate(a, b, -2.0).unwrap(), a);
        assert_eq!(interpolate(a, b, 7.5).unwrap(), b);
    }

    #[test]
    fn hue_midpoint_wraps_through_zero() {
        // Hues 10° and 350° are 20° apart across the 0° boundary; the
        // midpoint must land on 0°, not on the 180° side of the wheel.
        let a = Rgb::from(Hsl::new(10.0, 100.0, 50.0));
        let b = Rgb::from(Hsl::new(350.0, 100.0, 50.0));
        let mid = interpolate(&a.to_hex(), &b.to_hex(), 0.5).unwrap();
        let mid_hsl = Hsl::from(Rgb::from_hex(&mid).unwrap());
        assert!(
            mid_hsl.h < 1.0 || mid_hsl.h > 359.0,
            "expected hue near 0°, got {}",
            mid_hsl.h
        );
    }

    #[test]
    fn malformed_hex_is_an_explicit_error() {
        assert!(interpolate("#12345", "#0000ff", 0.5).is_err());
        assert!(interpolate("#ff0000", "night", 0.5).is_err());
    }
}
