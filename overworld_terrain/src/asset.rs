// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Rect};
use rand::Rng;
use tracing::{debug, warn};

use crate::document::{IconSet, MapDocument, TerrainError};
use crate::sampler::sample_category;
use crate::terrain::{Terrain, TerrainPoint};

/// Everything the renderer needs from the map document, produced once at
/// load: per-category sample points, icon glyphs, the continents silhouette,
/// and the purged minimal backdrop document.
#[derive(Clone, Debug)]
pub struct MapAsset {
    /// Source-image width in pixels.
    pub width: f64,
    /// Source-image height in pixels.
    pub height: f64,
    /// Continents silhouette geometry, if the document provided it.
    pub continents: Option<BezPath>,
    /// Icon glyphs per category.
    pub icons: IconSet,
    /// Sampled terrain points, in back-to-front paint order.
    pub points: Vec<TerrainPoint>,
    /// Minimal SVG containing only the silhouette and icon paths, used as
    /// the backdrop image asset.
    pub backdrop_svg: String,
}

impl MapAsset {
    /// Loads a map asset from SVG text.
    ///
    /// Missing category layers are skipped (logged, non-fatal); a category
    /// with no usable paths simply contributes no points. The returned
    /// points are ordered back-to-front by [`Terrain::DRAW_ORDER`].
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError`] only when the document itself cannot be
    /// parsed. Callers treat that as "no backdrop": the map still renders,
    /// just without terrain.
    pub fn load_str(text: &str, rng: &mut impl Rng) -> Result<Self, TerrainError> {
        let doc = MapDocument::parse(text)?;
        let document_rect = Rect::new(0.0, 0.0, doc.width(), doc.height());

        let mut points = Vec::new();
        for terrain in Terrain::DRAW_ORDER {
            let Some(layer) = doc.category_layer(terrain) else {
                warn!(category = terrain.label(), "category layer not found");
                continue;
            };
            let paths = doc.layer_paths(layer);
            if paths.is_empty() {
                continue;
            }
            let sampled = sample_category(&paths, terrain.budget(), document_rect, rng);
            debug!(
                category = terrain.label(),
                paths = paths.len(),
                points = sampled.len(),
                "sampled category"
            );
            points.extend(sampled.into_iter().map(|p| TerrainPoint {
                x: p.x,
                y: p.y,
                terrain,
            }));
        }

        Ok(Self {
            width: doc.width(),
            height: doc.height(),
            continents: doc.continents(),
            icons: doc.icons(),
            points,
            backdrop_svg: doc.minimal_svg(),
        })
    }

    /// Sampled points belonging to one category.
    pub fn points_for(&self, terrain: Terrain) -> impl Iterator<Item = &TerrainPoint> {
        self.points.iter().filter(move |p| p.terrain == terrain)
    }
}
