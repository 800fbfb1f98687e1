// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area-weighted Monte-Carlo point sampling inside vector paths.
//!
//! Each category's fixed point budget is split across its paths in
//! proportion to their estimated areas, then filled by rejection sampling
//! against the path geometry.

use kurbo::{BezPath, PathEl, Point, Rect, Shape};
use rand::Rng;
use tracing::debug;

use crate::document::LayerPath;

/// Number of Monte-Carlo samples used to estimate a path's area.
pub const AREA_SAMPLES: usize = 1000;

/// Attempt cap for rejection sampling a single path. Degenerate geometry
/// (hairlines, open paths with no interior) exhausts this and yields fewer
/// points instead of blocking.
pub const MAX_ATTEMPTS: usize = 5000;

/// A path's bounding box, falling back to the whole document when the box is
/// degenerate.
#[must_use]
pub fn effective_bbox(path: &BezPath, document: Rect) -> Rect {
    let bbox = path.bounding_box();
    if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
        document
    } else {
        bbox
    }
}

/// Estimates a path's rendered area by Monte-Carlo sampling its bounding box.
///
/// Draws [`AREA_SAMPLES`] uniform points in `bbox` and scales the box area by
/// the fraction classified inside the path.
#[must_use]
pub fn estimate_area(path: &BezPath, bbox: Rect, rng: &mut impl Rng) -> f64 {
    let region = close_subpaths(path);
    let mut hits = 0usize;
    for _ in 0..AREA_SAMPLES {
        if region.contains(random_point(bbox, rng)) {
            hits += 1;
        }
    }
    bbox.area() * (hits as f64 / AREA_SAMPLES as f64)
}

/// Splits a category budget across its paths proportionally to area.
///
/// Every path receives at least one point; otherwise its share is
/// `floor(budget * area / total)`. A zero total area (all paths degenerate)
/// falls back to a uniform `1 / path_count` proportion.
#[must_use]
pub fn allocate_budget(budget: usize, areas: &[f64]) -> Vec<usize> {
    let total: f64 = areas.iter().sum();
    areas
        .iter()
        .map(|&area| {
            let proportion = if total > 0.0 {
                area / total
            } else {
                1.0 / areas.len() as f64
            };
            ((budget as f64 * proportion).floor() as usize).max(1)
        })
        .collect()
}

/// Rejection-samples up to `count` points uniformly inside a path.
///
/// Candidates are drawn uniformly from `bbox` and kept when they pass the
/// inside-path test, until the allocation is met or [`MAX_ATTEMPTS`] draws
/// are exhausted.
#[must_use]
pub fn sample_points(path: &BezPath, bbox: Rect, count: usize, rng: &mut impl Rng) -> Vec<Point> {
    let region = close_subpaths(path);
    let mut points = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while points.len() < count && attempts < MAX_ATTEMPTS {
        let candidate = random_point(bbox, rng);
        if region.contains(candidate) {
            points.push(candidate);
        }
        attempts += 1;
    }
    if points.len() < count {
        debug!(
            got = points.len(),
            wanted = count,
            "rejection sampling exhausted its attempt budget"
        );
    }
    points
}

/// Samples a whole category: estimates every path's area, allocates the
/// category budget proportionally, and rejection-samples each path.
#[must_use]
pub fn sample_category(
    paths: &[LayerPath],
    budget: usize,
    document: Rect,
    rng: &mut impl Rng,
) -> Vec<Point> {
    if paths.is_empty() {
        return Vec::new();
    }
    let boxes: Vec<Rect> = paths
        .iter()
        .map(|p| effective_bbox(&p.bez, document))
        .collect();
    let areas: Vec<f64> = paths
        .iter()
        .zip(&boxes)
        .map(|(p, &bbox)| estimate_area(&p.bez, bbox, rng))
        .collect();
    let allocations = allocate_budget(budget, &areas);

    let mut out = Vec::with_capacity(budget);
    for ((path, &bbox), &count) in paths.iter().zip(&boxes).zip(&allocations) {
        out.extend(sample_points(&path.bez, bbox, count, rng));
    }
    out
}

/// Copies a path with every subpath explicitly closed.
///
/// The winding-based inside test treats an open subpath as an unbounded
/// boundary, not a region; drawing surfaces close subpaths implicitly before
/// their point-in-path test, so sampling does the same. A zero-area subpath
/// closes into a shape that contains nothing.
fn close_subpaths(path: &BezPath) -> BezPath {
    let mut out = BezPath::new();
    let mut open = false;
    for el in path.elements() {
        match el {
            PathEl::MoveTo(_) => {
                if open {
                    out.push(PathEl::ClosePath);
                }
                open = true;
            }
            PathEl::ClosePath => open = false,
            _ => {}
        }
        out.push(*el);
    }
    if open {
        out.push(PathEl::ClosePath);
    }
    out
}

fn random_point(bbox: Rect, rng: &mut impl Rng) -> Point {
    Point::new(
        bbox.x0 + rng.r#gen::<f64>() * bbox.width(),
        bbox.y0 + rng.r#gen::<f64>() * bbox.height(),
    )
}
