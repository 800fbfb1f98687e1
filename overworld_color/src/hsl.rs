// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::rgb::Rgb;

/// A color in HSL space.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are percentages in
/// `[0, 100]`. Achromatic colors (grays) have hue and saturation `0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL color from hue/saturation/lightness components.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Blends two HSL colors, taking the shorter arc between their hues.
    ///
    /// If the absolute hue difference exceeds 180°, the smaller hue is lifted
    /// by a full turn before the linear blend, and the result is reduced
    /// modulo 360. Saturation and lightness blend linearly.
    #[must_use]
    pub fn lerp(a: Self, b: Self, factor: f64) -> Self {
        let (mut h1, mut h2) = (a.h, b.h);
        if (h2 - h1).abs() > 180.0 {
            if h2 > h1 {
                h1 += 360.0;
            } else {
                h2 += 360.0;
            }
        }
        Self {
            h: (h1 + (h2 - h1) * factor).rem_euclid(360.0),
            s: a.s + (b.s - a.s) * factor,
            l: a.l + (b.l - a.l) * factor,
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, conventionally zero.
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Self::new(h * 360.0, s * 100.0, l * 100.0)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let h = (hsl.h / 360.0).rem_euclid(1.0);
        let s = (hsl.s / 100.0).clamp(0.0, 1.0);
        let l = (hsl.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let to_channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::new(
            to_channel(h + 1.0 / 3.0),
            to_channel(h),
            to_channel(h - 1.0 / 3.0),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_exactly() {
        let red = Hsl::from(Rgb::new(255, 0, 0));
        assert!((red.h - 0.0).abs() < 1e-9);
        assert!((red.s - 100.0).abs() < 1e-9);
        assert!((red.l - 50.0).abs() < 1e-9);

        let green = Hsl::from(Rgb::new(0, 255, 0));
        assert!((green.h - 120.0).abs() < 1e-9);

        let blue = Hsl::from(Rgb::new(0, 0, 255));
        assert!((blue.h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        let gray = Hsl::from(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn rgb_hsl_round_trip_within_rounding() {
        for rgb in [
            Rgb::new(10, 10, 15),
            Rgb::new(232, 244, 253),
            Rgb::new(138, 90, 58),
            Rgb::new(255, 230, 204),
        ] {
            let back = Rgb::from(Hsl::from(rgb));
            assert!(i16::from(back.r).abs_diff(i16::from(rgb.r)) <= 1);
            assert!(i16::from(back.g).abs_diff(i16::from(rgb.g)) <= 1);
            assert!(i16::from(back.b).abs_diff(i16::from(rgb.b)) <= 1);
        }
    }

    #[test]
    fn lerp_takes_shorter_hue_arc() {
        let a = Hsl::new(10.0, 100.0, 50.0);
        let b = Hsl::new(350.0, 100.0, 50.0);
        let mid = Hsl::lerp(a, b, 0.5);
        assert!((mid.h - 0.0).abs() < 1e-9, "expected 0°, got {}", mid.h);

        // No wrap needed: 40° to 80° blends straight through 60°.
        let mid = Hsl::lerp(Hsl::new(40.0, 50.0, 50.0), Hsl::new(80.0, 50.0, 50.0), 0.5);
        assert!((mid.h - 60.0).abs() < 1e-9);
    }

    #[test]
    fn lerp_never_crosses_more_than_half_the_wheel() {
        let cases = [(0.0, 350.0), (170.0, 350.1), (359.0, 1.0), (90.0, 271.0)];
        for (h1, h2) in cases {
            let mid = Hsl::lerp(Hsl::new(h1, 50.0, 50.0), Hsl::new(h2, 50.0, 50.0), 0.5);
            let d1 = hue_distance(mid.h, h1);
            let d2 = hue_distance(mid.h, h2);
            assert!(d1 + d2 <= 180.0 + 1e-9, "{h1}..{h2} via {}", mid.h);
        }
    }

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }
}
