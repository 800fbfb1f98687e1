// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;

use kurbo::{BezPath, Point, Shape};
use roxmltree::{Document, Node};
use thiserror::Error;
use tracing::warn;

use crate::terrain::Terrain;

/// Document size assumed when the root element carries no usable
/// `width`/`height` attributes.
pub const DEFAULT_SIZE: (f64, f64) = (352.0, 178.0);

/// Identifier of the continents silhouette path.
const CONTINENTS_ID: &str = "path1";

/// Label of the umbrella group that may nest the category layers.
const UMBRELLA_LABEL: &str = "Terrains";

/// Label of the group holding the icon glyph paths.
const ICONS_LABEL: &str = "Icons";

/// Error produced when the map document cannot be read at all.
///
/// Per-layer and per-path problems are not errors; they degrade to skipped
/// categories (see [`crate::MapAsset::load_str`]).
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The document is not well-formed XML.
    #[error("failed to parse map document: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// An icon glyph extracted from the document's `Icons` group.
#[derive(Clone, Debug)]
pub struct Icon {
    /// Glyph geometry in icon-local coordinates.
    pub path: BezPath,
    /// Bounding-box center, used to orient the glyph around a marker point.
    pub center: Point,
}

/// Icon glyphs per terrain category. Categories whose icon is missing from
/// the document simply have no entry.
#[derive(Clone, Debug, Default)]
pub struct IconSet([Option<Icon>; 7]);

impl IconSet {
    /// The icon for a category, if the document provided one.
    #[must_use]
    pub fn get(&self, terrain: Terrain) -> Option<&Icon> {
        self.0[terrain.index()].as_ref()
    }

    /// Installs an icon for a category.
    pub fn insert(&mut self, terrain: Terrain, icon: Icon) {
        self.0[terrain.index()] = Some(icon);
    }

    /// Number of categories that have an icon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no category has an icon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// One path inside a category layer, with its parsed geometry.
#[derive(Clone, Debug)]
pub struct LayerPath {
    /// Parsed path geometry.
    pub bez: BezPath,
}

/// A parsed map document.
///
/// This wraps the XML tree and answers the structural queries the sampler
/// needs: category layers by label (with the umbrella-group fallback), the
/// continents silhouette, the icon set, and the purged minimal document.
#[derive(Debug)]
pub struct MapDocument<'input> {
    doc: Document<'input>,
    width: f64,
    height: f64,
}

impl<'input> MapDocument<'input> {
    /// Parses an SVG map document.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::Xml`] if the text is not well-formed XML.
    pub fn parse(text: &'input str) -> Result<Self, TerrainError> {
        let doc = Document::parse(text)?;
        let root = doc.root_element();
        let width = root
            .attribute("width")
            .and_then(parse_dimension)
            .unwrap_or(DEFAULT_SIZE.0);
        let height = root
            .attribute("height")
            .and_then(parse_dimension)
            .unwrap_or(DEFAULT_SIZE.1);
        Ok(Self { doc, width, height })
    }

    /// Document width in source pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Document height in source pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Finds the layer group for a category.
    ///
    /// The label is matched against the group's `inkscape:label` (any
    /// namespace) or `id`, first among the document's top-level groups, then
    /// one level deeper among the children of the `Terrains` umbrella group.
    /// Groups buried in unrelated containers are not layers. Returns `None`
    /// when the category simply is not present.
    #[must_use]
    pub fn category_layer(&self, terrain: Terrain) -> Option<Node<'_, 'input>> {
        let label = terrain.label();
        if let Some(node) = self.find_group(self.doc.root_element(), label) {
            return Some(node);
        }
        let umbrella = self.find_group(self.doc.root_element(), UMBRELLA_LABEL)?;
        self.find_group(umbrella, label)
    }

    /// All parseable paths inside a layer group. Paths with missing or
    /// malformed data are skipped with a warning.
    #[must_use]
    pub fn layer_paths(&self, layer: Node<'_, 'input>) -> Vec<LayerPath> {
        let mut out = Vec::new();
        for node in layer.descendants().filter(|n| n.has_tag_name("path")) {
            let Some(d) = node.attribute("d") else {
                continue;
            };
            match BezPath::from_svg(d) {
                Ok(bez) => out.push(LayerPath { bez }),
                Err(err) => {
                    warn!(id = node.attribute("id").unwrap_or(""), %err, "skipping malformed path");
                }
            }
        }
        out
    }

    /// The continents silhouette path, looked up by its fixed identifier.
    #[must_use]
    pub fn continents(&self) -> Option<BezPath> {
        let node = self.find_path_by_id(CONTINENTS_ID)?;
        let d = node.attribute("d")?;
        match BezPath::from_svg(d) {
            Ok(bez) => Some(bez),
            Err(err) => {
                warn!(%err, "continents path has malformed data");
                None
            }
        }
    }

    /// Extracts every `icon_*` glyph from the `Icons` group, precomputing
    /// each glyph's bounding-box center.
    #[must_use]
    pub fn icons(&self) -> IconSet {
        let mut set = IconSet::default();
        let Some(group) = self.find_group(self.doc.root_element(), ICONS_LABEL) else {
            warn!("map document has no Icons group");
            return set;
        };
        for node in group.descendants().filter(|n| n.has_tag_name("path")) {
            let Some(key) = label_of(node).and_then(|l| l.strip_prefix("icon_")) else {
                continue;
            };
            let Some(terrain) = Terrain::ALL.iter().copied().find(|t| t.icon_key() == key) else {
                warn!(key, "icon does not match any terrain category");
                continue;
            };
            let Some(d) = node.attribute("d") else {
                continue;
            };
            match BezPath::from_svg(d) {
                Ok(path) => {
                    let center = path.bounding_box().center();
                    set.insert(terrain, Icon { path, center });
                }
                Err(err) => warn!(key, %err, "skipping malformed icon path"),
            }
        }
        set
    }

    /// Produces the purged minimal document: only the continents path and the
    /// icon paths survive, so the backdrop asset's per-frame draw cost does
    /// not depend on the source document's complexity.
    #[must_use]
    pub fn minimal_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        if let Some(node) = self.find_path_by_id(CONTINENTS_ID) {
            write_path(&mut out, node);
        }
        if let Some(group) = self.find_group(self.doc.root_element(), ICONS_LABEL) {
            out.push_str(r#"<g id="Icons">"#);
            for node in group.descendants().filter(|n| n.has_tag_name("path")) {
                let is_icon = label_of(node).is_some_and(|l| l.starts_with("icon_"));
                if is_icon {
                    write_path(&mut out, node);
                }
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        out
    }

    fn find_group<'a>(&self, scope: Node<'a, 'input>, label: &str) -> Option<Node<'a, 'input>> {
        scope
            .children()
            .filter(|n| n.has_tag_name("g"))
            .find(|n| label_of(*n) == Some(label))
    }

    fn find_path_by_id(&self, id: &str) -> Option<Node<'_, 'input>> {
        self.doc
            .root()
            .descendants()
            .filter(|n| n.has_tag_name("path"))
            .find(|n| n.attribute("id") == Some(id))
    }
}

/// The label of a node: its `label` attribute in any namespace (Inkscape
/// writes `inkscape:label`), falling back to `id`.
fn label_of<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == "label")
        .map(|a| a.value())
        .or_else(|| node.attribute("id"))
}

/// Parses an SVG dimension attribute, ignoring a unit suffix such as `px`.
fn parse_dimension(value: &str) -> Option<f64> {
    let numeric: &str = value
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    numeric.parse().ok()
}

fn write_path(out: &mut String, node: Node<'_, '_>) {
    out.push_str("<path");
    // Keep the node addressable: its id, or its label when it only had one.
    if let Some(id) = node.attribute("id").or_else(|| label_of(node)) {
        let _ = write!(out, r#" id="{}""#, escape_attr(id));
    }
    for attr in ["d", "fill", "stroke", "style"] {
        if let Some(value) = node.attribute(attr) {
            let _ = write!(out, r#" {}="{}""#, attr, escape_attr(value));
        }
    }
    out.push_str("/>");
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
