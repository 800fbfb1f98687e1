// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};
use overworld_terrain::Terrain;
use peniko::Color;

/// Marker dot radius for the icon-missing fallback, in image pixels.
pub const DOT_RADIUS: f64 = 3.0;

/// Named-marker radius in image pixels.
pub const MARKER_RADIUS: f64 = 2.0;

/// Icon glyphs are authored on a 15px grid and drawn at 3px, so each glyph
/// is scaled by 3/15 around its bounding-box center.
pub const ICON_SCALE: f64 = 3.0 / 15.0;

/// Stroke width for icon glyphs, in glyph-local pixels.
pub const ICON_STROKE_WIDTH: f64 = 1.5;

/// Fill color for named location markers.
pub const MARKER_FILL: Color = Color::from_rgb8(0xff, 0x00, 0x00);

/// Stroke color for named location markers.
pub const MARKER_STROKE: Color = Color::from_rgb8(0x33, 0x33, 0x33);

/// One paint operation of a rendered frame, in emission order (back to
/// front). Geometry for [`SceneOp::IconGlyph`] lives in the map asset's
/// icon set; the op only carries the placement.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Draw the backdrop image under the given image-to-canvas transform.
    Backdrop {
        /// Image-to-canvas transform for this wrapped copy.
        transform: Affine,
    },
    /// Stroke one terrain icon glyph.
    IconGlyph {
        /// Glyph-local-to-canvas transform, already including the 3/15
        /// glyph scale around the glyph center.
        transform: Affine,
        /// Category whose glyph geometry to stroke.
        terrain: Terrain,
        /// Stroke color.
        color: Color,
        /// Stroke width in glyph-local pixels.
        width: f64,
    },
    /// Fill a plain dot where a category has no icon glyph.
    Dot {
        /// Image-to-canvas transform for this wrapped copy.
        transform: Affine,
        /// Dot center in image pixels.
        center: Point,
        /// Dot radius in image pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Fill-and-stroke a named location marker with its label.
    Marker {
        /// Image-to-canvas transform for this wrapped copy.
        transform: Affine,
        /// Marker center in image pixels.
        position: Point,
        /// Marker radius in image pixels.
        radius: f64,
        /// Fill color.
        fill: Color,
        /// Stroke color.
        stroke: Color,
        /// Label text, drawn just right of the marker.
        label: String,
    },
}

/// A retained frame description: the full list of paint operations for one
/// redraw, in back-to-front order.
///
/// The controller rebuilds the scene from scratch on every state change;
/// the embedding backend replays the ops against its surface.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Whether the backend may filter the backdrop image when scaling.
    /// Always `false`: the map is drawn crisp, and backends must re-apply
    /// this after a surface resize resets it.
    pub smoothing: bool,
    /// Paint operations in back-to-front order.
    pub ops: Vec<SceneOp>,
}

impl Scene {
    /// An empty scene covering the given canvas.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            smoothing: false,
            ops: Vec::new(),
        }
    }
}

/// Converts a terrain palette color to a paint color.
#[must_use]
pub(crate) fn paint_color(rgb: overworld_color::Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_scale_matches_the_fifteen_pixel_grid() {
        assert_eq!(ICON_SCALE, 0.2);
    }

    #[test]
    fn terrain_palette_converts_losslessly() {
        let c = paint_color(Terrain::Ocean.marker_color());
        assert_eq!(c, Color::from_rgb8(0x00, 0x00, 0xff));
    }
}
