// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Globe placement: fit scale, vertical clamp bounds, horizontal wrap
//! copies, and the equirectangular projection.

use kurbo::{Affine, Point, Size};

/// Height of the floating header band excluded from the usable canvas
/// height when fitting the globe.
pub const HEADER_BAND: f64 = 80.0;

/// Upper bound on wrapped copies per frame. Only reached when the globe is
/// subpixel-narrow on a pathological canvas; normal layouts need a handful.
pub const MAX_WRAP_COPIES: i64 = 512;

/// Derived placement of the globe image for a given canvas, image, and zoom.
///
/// The base `fit_scale` makes the image fill the canvas height minus the
/// header band at zoom 1; user zoom multiplies on top of it. All quantities
/// are in canvas pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlobeLayout {
    /// Height-fitting base scale (canvas usable height / image height).
    pub fit_scale: f64,
    /// Image width after fit and zoom.
    pub scaled_width: f64,
    /// Image height after fit and zoom.
    pub scaled_height: f64,
    /// Y position centering the scaled image in the full canvas.
    pub globe_y: f64,
}

impl GlobeLayout {
    /// Computes the layout for a canvas/image pair at the given zoom.
    #[must_use]
    pub fn new(canvas: Size, image: Size, scale: f64) -> Self {
        let fit_scale = (canvas.height - HEADER_BAND) / image.height;
        let scaled_width = image.width * fit_scale * scale;
        let scaled_height = image.height * fit_scale * scale;
        Self {
            fit_scale,
            scaled_width,
            scaled_height,
            globe_y: (canvas.height - scaled_height) / 2.0,
        }
    }

    /// Vertical clamp bounds `(min, max)` for the pan offset.
    ///
    /// When the scaled globe fits inside the canvas both bounds are zero:
    /// the image stays centered and cannot pan. Otherwise the bounds keep
    /// the image's top edge at or above the canvas top and its bottom edge
    /// at or below the canvas bottom.
    #[must_use]
    pub fn vertical_bounds(&self, canvas_height: f64) -> (f64, f64) {
        if self.scaled_height <= canvas_height {
            (0.0, 0.0)
        } else {
            let min = canvas_height - (self.globe_y + self.scaled_height);
            let max = -self.globe_y;
            (min, max)
        }
    }

    /// The wrapped horizontal base offset and the copy index range for
    /// seamless horizontal panning.
    ///
    /// Returns `(base, range)` where `base = offset_x mod scaled_width` and
    /// `range` spans `ceil(canvas_width / scaled_width) + 3` copies starting
    /// at index −1, guaranteeing full coverage for any offset magnitude.
    ///
    /// A layout whose `scaled_width` is not finite-positive (canvas no
    /// taller than the header band) yields an empty range: nothing to draw,
    /// never a division by zero. The copy count is capped at
    /// [`MAX_WRAP_COPIES`] so a subpixel globe cannot explode the frame.
    #[must_use]
    pub fn wrap_copies(
        &self,
        canvas_width: f64,
        offset_x: f64,
    ) -> (f64, core::ops::RangeInclusive<i64>) {
        if !self.scaled_width.is_finite() || self.scaled_width <= 0.0 {
            return (0.0, core::ops::RangeInclusive::new(0, -1));
        }
        let base = offset_x % self.scaled_width;
        let visible = ((canvas_width / self.scaled_width).ceil() as i64).min(MAX_WRAP_COPIES);
        (base, -1..=visible + 1)
    }

    /// Transform from image space to canvas space for one wrapped copy.
    #[must_use]
    pub fn copy_transform(&self, copy: i64, base_offset_x: f64, offset_y: f64, scale: f64) -> Affine {
        let copy_x = copy as f64 * self.scaled_width + base_offset_x;
        Affine::translate((copy_x, self.globe_y + offset_y)) * Affine::scale(self.fit_scale * scale)
    }
}

/// Equirectangular projection from longitude/latitude to image pixels.
#[must_use]
pub fn project(longitude: f64, latitude: f64, image: Size) -> Point {
    Point::new(
        (longitude + 180.0) * (image.width / 360.0),
        (90.0 - latitude) * (image.height / 180.0),
    )
}

/// Inverse of [`project`] along the X axis, wrapped into `[-180, 180)`.
#[must_use]
pub fn longitude_at(image_x: f64, image: Size) -> f64 {
    (image_x.rem_euclid(image.width)) * (360.0 / image.width) - 180.0
}
