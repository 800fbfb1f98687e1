// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use overworld_color::Rgb;

/// The seven fixed terrain categories.
///
/// Each category carries its per-load dot budget, its marker fill color, the
/// stroke color of its icon glyph, and the labels used to locate its layer
/// and icon in the map document. This is a closed enumeration on purpose:
/// dispatch is by variant, never by string key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Forested land.
    Forest,
    /// Cities and settlements.
    City,
    /// Mountain ranges.
    Mountain,
    /// Polar ice and glaciers.
    Ice,
    /// Deserts.
    Desert,
    /// Orbital and launch infrastructure.
    Space,
    /// Ocean features.
    Ocean,
}

impl Terrain {
    /// All categories, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Forest,
        Self::City,
        Self::Mountain,
        Self::Ice,
        Self::Desert,
        Self::Space,
        Self::Ocean,
    ];

    /// Categories in back-to-front paint order: space and ocean markers sit
    /// under everything, cities on top.
    pub const DRAW_ORDER: [Self; 7] = [
        Self::Space,
        Self::Ocean,
        Self::Ice,
        Self::Desert,
        Self::Mountain,
        Self::Forest,
        Self::City,
    ];

    /// The layer label this category is stored under in the map document.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forest => "Forest",
            Self::City => "City",
            Self::Mountain => "Mountain",
            Self::Ice => "Ice",
            Self::Desert => "Desert",
            Self::Space => "Space",
            Self::Ocean => "Ocean",
        }
    }

    /// The icon path suffix, as in `icon_tree` or `icon_city`.
    #[must_use]
    pub const fn icon_key(self) -> &'static str {
        match self {
            Self::Forest => "tree",
            Self::City => "city",
            Self::Mountain => "mountain",
            Self::Ice => "ice",
            Self::Desert => "desert",
            Self::Space => "space",
            Self::Ocean => "ocean",
        }
    }

    /// Total number of sample points to generate for this category per load.
    #[must_use]
    pub const fn budget(self) -> usize {
        match self {
            Self::Forest => 200,
            Self::City => 60,
            Self::Mountain => 120,
            Self::Ice => 40,
            Self::Desert => 70,
            Self::Space => 50,
            Self::Ocean => 90,
        }
    }

    /// Fill color used when a marker has to fall back to a plain dot.
    #[must_use]
    pub const fn marker_color(self) -> Rgb {
        match self {
            Self::Forest => Rgb::new(0x00, 0x80, 0x00),   // green
            Self::City => Rgb::new(0xff, 0xff, 0x00),     // yellow
            Self::Mountain => Rgb::new(0xa5, 0x2a, 0x2a), // brown
            Self::Ice => Rgb::new(0x00, 0xff, 0xff),      // cyan
            Self::Desert => Rgb::new(0xff, 0xa5, 0x00),   // orange
            Self::Space => Rgb::new(0x80, 0x00, 0x80),    // purple
            Self::Ocean => Rgb::new(0x00, 0x00, 0xff),    // blue
        }
    }

    /// Stroke color used when drawing this category's icon glyph.
    #[must_use]
    pub const fn icon_stroke(self) -> Rgb {
        match self {
            Self::Forest => Rgb::new(0x22, 0x8b, 0x22),
            Self::City => Rgb::new(0x8b, 0x00, 0x00),
            Self::Mountain => Rgb::new(0x8b, 0x45, 0x13),
            Self::Ice => Rgb::new(0x87, 0xce, 0xeb),
            Self::Desert => Rgb::new(0xda, 0xa5, 0x20),
            Self::Space => Rgb::new(0x93, 0x70, 0xdb),
            Self::Ocean => Rgb::new(0x00, 0x66, 0xcc),
        }
    }

    /// Index of this category into per-category arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A sampled terrain marker position in source-image pixel space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TerrainPoint {
    /// X coordinate in source-image pixels.
    pub x: f64,
    /// Y coordinate in source-image pixels.
    pub y: f64,
    /// Category this point belongs to.
    pub terrain: Terrain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_draw_order_cover_every_category_once() {
        for order in [&Terrain::ALL, &Terrain::DRAW_ORDER] {
            let mut seen = [false; 7];
            for t in order {
                assert!(!seen[t.index()], "{t:?} repeated");
                seen[t.index()] = true;
            }
            assert!(seen.iter().all(|&s| s), "missing category");
        }
    }

    #[test]
    fn budgets_match_the_configured_totals() {
        let total: usize = Terrain::ALL.iter().map(|t| t.budget()).sum();
        assert_eq!(total, 630);
    }
}
