// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overworld Terrain: derive per-category marker points from an SVG map.
//!
//! The map document is an Inkscape-style SVG with labeled groups: a
//! continents silhouette (path id `path1`), an `Icons` group carrying one
//! `icon_*` glyph per category, and seven terrain layers (`Forest`, `City`,
//! `Mountain`, `Ice`, `Desert`, `Space`, `Ocean`), optionally nested under a
//! `Terrains` umbrella group.
//!
//! Loading runs once per session and produces a [`MapAsset`]:
//!
//! - Each category layer's paths are measured by Monte-Carlo area
//!   estimation, the category's fixed point budget is split across paths
//!   proportionally to area, and points are rejection-sampled uniformly
//!   inside each path (see [`sampler`]).
//! - Icon glyph geometry and bounding-box centers are precomputed for
//!   stroke-rendering at draw time.
//! - The document is then purged down to just the silhouette and icon paths
//!   ([`MapAsset::backdrop_svg`]), so the per-frame backdrop draw cost does
//!   not scale with the source document's complexity.
//!
//! Every failure below "the XML does not parse" is non-fatal: missing layers
//! and malformed paths are logged and skipped, and the map renders without
//! those markers.
//!
//! ## Minimal example
//!
//! ```rust
//! use overworld_terrain::{MapAsset, Terrain};
//! use rand::SeedableRng;
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
//!     <path id="path1" d="M 0 0 L 100 0 L 100 50 L 0 50 Z"/>
//!     <g id="Forest"><path d="M 10 10 L 90 10 L 90 40 L 10 40 Z"/></g>
//! </svg>"#;
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let asset = MapAsset::load_str(svg, &mut rng).unwrap();
//! assert_eq!(asset.points_for(Terrain::Forest).count(), Terrain::Forest.budget());
//! ```

mod asset;
mod document;
pub mod sampler;
mod terrain;

pub use asset::MapAsset;
pub use document::{DEFAULT_SIZE, Icon, IconSet, LayerPath, MapDocument, TerrainError};
pub use terrain::{Terrain, TerrainPoint};
