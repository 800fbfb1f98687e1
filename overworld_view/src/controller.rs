// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Affine, Point, Size, Vec2};
use overworld_terrain::{DEFAULT_SIZE, MapAsset};
use tracing::debug;

use crate::events::{InputEvent, ListenerGuard};
use crate::layout::{GlobeLayout, longitude_at, project};
use crate::momentum::MomentumTask;
use crate::scene::{
    DOT_RADIUS, ICON_SCALE, ICON_STROKE_WIDTH, MARKER_FILL, MARKER_RADIUS, MARKER_STROKE, Scene,
    SceneOp, paint_color,
};
use crate::state::ViewState;

/// A named location pin placed by longitude/latitude.
#[derive(Clone, Debug, PartialEq)]
struct NamedMarker {
    longitude: f64,
    latitude: f64,
    label: String,
}

/// The interactive map viewport.
///
/// Owns the single [`ViewState`], the loaded map asset, and any running
/// momentum animation. Input arrives as [`InputEvent`]s through
/// [`handle_event`](Self::handle_event); output is a [`Scene`] from
/// [`redraw`](Self::redraw). All coordinates are canvas pixels unless noted.
#[derive(Debug)]
pub struct MapController {
    state: ViewState,
    canvas: Size,
    asset: Option<MapAsset>,
    markers: Vec<NamedMarker>,
    momentum: Option<MomentumTask>,
    listeners: Rc<Cell<bool>>,
}

impl MapController {
    /// Creates a controller for a canvas of the given size, along with the
    /// guard that keeps its event subscriptions alive.
    #[must_use]
    pub fn new(canvas: Size) -> (Self, ListenerGuard) {
        let (guard, listeners) = ListenerGuard::new();
        (
            Self {
                state: ViewState::default(),
                canvas,
                asset: None,
                markers: Vec::new(),
                momentum: None,
                listeners,
            },
            guard,
        )
    }

    /// Installs the loaded map asset and re-clamps the view against its
    /// dimensions.
    pub fn set_asset(&mut self, asset: MapAsset) {
        self.asset = Some(asset);
        self.clamp_vertical();
    }

    /// The current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Routes one input event. Events arriving after the listener guard is
    /// disposed are ignored.
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.listeners.get() {
            return;
        }
        match event {
            InputEvent::PointerDown { pos, time_ms } => self.begin_drag(pos, time_ms),
            InputEvent::PointerMove { pos, time_ms } => self.drag_to(pos, time_ms),
            InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.end_drag();
            }
            InputEvent::TouchStart {
                pos,
                time_ms,
                touches,
            } => {
                if touches == 1 {
                    self.begin_drag(pos, time_ms);
                }
            }
            InputEvent::TouchMove {
                pos,
                time_ms,
                touches,
            } => {
                if touches == 1 {
                    self.drag_to(pos, time_ms);
                }
            }
            InputEvent::Wheel { pos, delta_y } => self.zoom_at(pos, delta_y),
        }
    }

    fn begin_drag(&mut self, pos: Point, time_ms: u64) {
        if let Some(task) = self.momentum.as_mut() {
            task.cancel();
        }
        self.momentum = None;
        self.state.is_momentum_active = false;
        self.state.is_dragging = true;
        self.state.last_pointer = pos;
        self.state.last_event_ms = time_ms;
        self.state.velocity = Vec2::ZERO;
    }

    fn drag_to(&mut self, pos: Point, time_ms: u64) {
        if !self.state.is_dragging {
            return;
        }
        let delta = pos - self.state.last_pointer;
        let dt = time_ms.saturating_sub(self.state.last_event_ms) as f64;
        if dt > 0.0 {
            self.state.velocity = delta / dt;
        }
        self.state.offset_x += delta.x;
        self.state.offset_y += delta.y;
        self.clamp_vertical();
        self.state.last_pointer = pos;
        self.state.last_event_ms = time_ms;
    }

    fn end_drag(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        self.state.is_dragging = false;
        self.momentum = MomentumTask::start(self.state.velocity);
        self.state.is_momentum_active = self.momentum.is_some();
        if self.state.is_momentum_active {
            debug!(
                vx = self.state.velocity.x,
                vy = self.state.velocity.y,
                "starting momentum"
            );
        }
    }

    /// Advances the momentum animation by one frame, applying its
    /// displacement. Returns `true` while more frames remain; the embedding
    /// drives this from its frame timer while it returns `true`.
    pub fn momentum_step(&mut self) -> bool {
        let Some(task) = self.momentum.as_mut() else {
            return false;
        };
        let displacement = task.step();
        let still_active = task.is_active();
        let Some(d) = displacement else {
            self.momentum = None;
            self.state.is_momentum_active = false;
            return false;
        };
        self.state.offset_x += d.x;
        self.state.offset_y += d.y;
        self.clamp_vertical();
        if !still_active {
            self.momentum = None;
            self.state.is_momentum_active = false;
        }
        still_active
    }

    /// Zooms around the cursor: the image point under `pos` stays under
    /// `pos` across the scale change. Positive `delta_y` zooms out.
    pub fn zoom_at(&mut self, pos: Point, delta_y: f64) {
        let factor = if delta_y < 0.0 { 1.1 } else { 0.9 };
        let new_scale = (self.state.scale * factor)
            .clamp(self.state.min_scale, self.state.max_scale);
        if new_scale == self.state.scale {
            return;
        }
        let image = self.image_size();
        let old = GlobeLayout::new(self.canvas, image, self.state.scale);
        let unit = old.fit_scale * self.state.scale;
        let world_x = (pos.x - self.state.offset_x) / unit;
        let world_y = (pos.y - old.globe_y - self.state.offset_y) / unit;

        let new = GlobeLayout::new(self.canvas, image, new_scale);
        let new_unit = new.fit_scale * new_scale;
        self.state.offset_x = pos.x - world_x * new_unit;
        self.state.offset_y = pos.y - new.globe_y - world_y * new_unit;
        self.state.scale = new_scale;
        self.clamp_vertical();
    }

    /// Updates the canvas size and re-clamps the view. The embedding calls
    /// this from its resize observer; the next [`redraw`](Self::redraw)
    /// reflects the new layout.
    pub fn resize(&mut self, canvas: Size) {
        self.canvas = canvas;
        self.clamp_vertical();
    }

    /// Places a named marker at a longitude/latitude; it renders on every
    /// wrapped copy of the globe from the next redraw on.
    pub fn draw_marker(&mut self, longitude: f64, latitude: f64, label: impl Into<String>) {
        self.markers.push(NamedMarker {
            longitude,
            latitude,
            label: label.into(),
        });
    }

    /// The longitude currently under the horizontal center of the canvas,
    /// wrapped into `[-180, 180)`. Returns `0.0` before an asset is loaded.
    #[must_use]
    pub fn center_longitude(&self) -> f64 {
        if self.asset.is_none() {
            return 0.0;
        }
        let image = self.image_size();
        let layout = GlobeLayout::new(self.canvas, image, self.state.scale);
        let unit = layout.fit_scale * self.state.scale;
        if !unit.is_finite() || unit <= 0.0 {
            return 0.0;
        }
        let world_x = (self.canvas.width / 2.0 - self.state.offset_x) / unit;
        longitude_at(world_x, image)
    }

    /// Builds the frame for the current state: wrapped backdrop copies, then
    /// terrain markers in paint order, then named markers, per copy.
    #[must_use]
    pub fn redraw(&self) -> Scene {
        let mut scene = Scene::new(self.canvas.width, self.canvas.height);
        let Some(asset) = self.asset.as_ref() else {
            return scene;
        };
        let image = self.image_size();
        let layout = GlobeLayout::new(self.canvas, image, self.state.scale);
        let (base, copies) = layout.wrap_copies(self.canvas.width, self.state.offset_x);

        for copy in copies {
            let transform =
                layout.copy_transform(copy, base, self.state.offset_y, self.state.scale);
            scene.ops.push(SceneOp::Backdrop { transform });
            self.push_terrain_ops(&mut scene, asset, transform);
            self.push_marker_ops(&mut scene, image, transform);
        }
        scene
    }

    fn push_terrain_ops(&self, scene: &mut Scene, asset: &MapAsset, copy_transform: Affine) {
        for point in &asset.points {
            match asset.icons.get(point.terrain) {
                Some(icon) => {
                    let transform = copy_transform
                        * Affine::translate((point.x, point.y))
                        * Affine::scale(ICON_SCALE)
                        * Affine::translate(-icon.center.to_vec2());
                    scene.ops.push(SceneOp::IconGlyph {
                        transform,
                        terrain: point.terrain,
                        color: paint_color(point.terrain.icon_stroke()),
                        width: ICON_STROKE_WIDTH,
                    });
                }
                None => {
                    scene.ops.push(SceneOp::Dot {
                        transform: copy_transform,
                        center: Point::new(point.x, point.y),
                        radius: DOT_RADIUS,
                        color: paint_color(point.terrain.marker_color()),
                    });
                }
            }
        }
    }

    fn push_marker_ops(&self, scene: &mut Scene, image: Size, copy_transform: Affine) {
        for marker in &self.markers {
            scene.ops.push(SceneOp::Marker {
                transform: copy_transform,
                position: project(marker.longitude, marker.latitude, image),
                radius: MARKER_RADIUS,
                fill: MARKER_FILL,
                stroke: MARKER_STROKE,
                label: marker.label.clone(),
            });
        }
    }

    /// Tears the controller down: cancels momentum, drops the asset and
    /// markers, and deactivates the event subscriptions.
    pub fn destroy(&mut self) {
        if let Some(task) = self.momentum.as_mut() {
            task.cancel();
        }
        self.momentum = None;
        self.state.is_momentum_active = false;
        self.state.is_dragging = false;
        self.asset = None;
        self.markers.clear();
        self.listeners.set(false);
    }

    fn image_size(&self) -> Size {
        self.asset.as_ref().map_or(
            Size::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1),
            |a| Size::new(a.width, a.height),
        )
    }

    fn clamp_vertical(&mut self) {
        let layout = GlobeLayout::new(self.canvas, self.image_size(), self.state.scale);
        let (min, max) = layout.vertical_bounds(self.canvas.height);
        self.state.offset_y = self.state.offset_y.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MAX_SCALE, MIN_SCALE, Phase};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CANVAS: Size = Size::new(1280.0, 800.0);

    const WORLD: &str = r##"
        <svg xmlns="http://www.w3.org/2000/svg"
             xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
             width="352" height="178">
          <path id="path1" d="M 20 30 L 330 30 L 330 150 L 20 150 Z"/>
          <g inkscape:label="Icons">
            <path inkscape:label="icon_tree" d="M 5 0 L 10 10 L 0 10 Z"/>
          </g>
          <g inkscape:label="Forest">
            <path d="M 40 50 L 140 50 L 140 120 L 40 120 Z"/>
          </g>
        </svg>"##;

    fn controller_with_asset() -> (MapController, ListenerGuard) {
        let (mut controller, guard) = MapController::new(CANVAS);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        controller.set_asset(MapAsset::load_str(WORLD, &mut rng).unwrap());
        (controller, guard)
    }

    fn assert_vertically_clamped(controller: &MapController) {
        let image = controller.image_size();
        let layout = GlobeLayout::new(controller.canvas, image, controller.state.scale);
        let (min, max) = layout.vertical_bounds(controller.canvas.height);
        let y = controller.state.offset_y;
        assert!(y >= min - 1e-9 && y <= max + 1e-9, "offset_y {y} outside [{min}, {max}]");
    }

    #[test]
    fn drag_moves_offsets_and_tracks_velocity() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerMove {
            pos: Point::new(130.0, 100.0),
            time_ms: 10,
        });
        assert_eq!(c.state().phase(), Phase::Dragging);
        assert_eq!(c.state().offset_x, 30.0);
        assert_eq!(c.state().velocity, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn vertical_offset_stays_zero_at_minimum_scale() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerMove {
            pos: Point::new(100.0, 400.0),
            time_ms: 20,
        });
        assert_eq!(c.state().scale, MIN_SCALE);
        assert_eq!(c.state().offset_y, 0.0, "small globe must stay centered");
    }

    #[test]
    fn fast_release_starts_momentum_and_it_decays_to_rest() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerMove {
            pos: Point::new(200.0, 100.0),
            time_ms: 10,
        });
        c.handle_event(InputEvent::PointerUp);
        assert_eq!(c.state().phase(), Phase::Momentum);

        let mut frames = 0;
        while c.momentum_step() {
            frames += 1;
            assert!(frames < 1000, "momentum failed to terminate");
            assert_vertically_clamped(&c);
        }
        assert_eq!(c.state().phase(), Phase::Idle);
        assert!(c.state().offset_x > 100.0, "coasting must extend the drag");
    }

    #[test]
    fn slow_release_goes_straight_to_idle() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerMove {
            pos: Point::new(101.0, 100.0),
            time_ms: 100,
        });
        c.handle_event(InputEvent::PointerUp);
        assert_eq!(c.state().phase(), Phase::Idle);
        assert!(!c.momentum_step());
    }

    #[test]
    fn pointer_leave_ends_a_drag_like_a_release() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerLeave);
        assert!(!c.state().is_dragging);
    }

    #[test]
    fn new_drag_cancels_running_momentum() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerMove {
            pos: Point::new(300.0, 100.0),
            time_ms: 10,
        });
        c.handle_event(InputEvent::PointerUp);
        assert_eq!(c.state().phase(), Phase::Momentum);

        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(500.0, 100.0),
            time_ms: 200,
        });
        assert_eq!(c.state().phase(), Phase::Dragging);
        let before = c.state().offset_x;
        assert!(!c.momentum_step(), "cancelled task must not move the view");
        assert_eq!(c.state().offset_x, before);
    }

    #[test]
    fn multi_finger_touches_are_ignored() {
        let (mut c, _guard) = controller_with_asset();
        c.handle_event(InputEvent::TouchStart {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
            touches: 2,
        });
        assert_eq!(c.state().phase(), Phase::Idle);

        c.handle_event(InputEvent::TouchStart {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
            touches: 1,
        });
        c.handle_event(InputEvent::TouchMove {
            pos: Point::new(150.0, 100.0),
            time_ms: 10,
            touches: 2,
        });
        assert_eq!(c.state().offset_x, 0.0, "second finger must not drag");
    }

    #[test]
    fn wheel_zoom_is_anchored_at_the_cursor() {
        let (mut c, _guard) = controller_with_asset();
        let anchor = Point::new(640.0, 400.0);
        let image = c.image_size();

        let layout = GlobeLayout::new(CANVAS, image, c.state().scale);
        let unit = layout.fit_scale * c.state().scale;
        let world_before = Point::new(
            (anchor.x - c.state().offset_x) / unit,
            (anchor.y - layout.globe_y - c.state().offset_y) / unit,
        );

        c.handle_event(InputEvent::Wheel {
            pos: anchor,
            delta_y: -1.0,
        });
        assert!((c.state().scale - 1.1).abs() < 1e-12);

        let layout = GlobeLayout::new(CANVAS, image, c.state().scale);
        let unit = layout.fit_scale * c.state().scale;
        let world_after = Point::new(
            (anchor.x - c.state().offset_x) / unit,
            (anchor.y - layout.globe_y - c.state().offset_y) / unit,
        );
        assert!((world_before.x - world_after.x).abs() < 1e-9);
        assert!((world_before.y - world_after.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_respects_both_scale_limits() {
        let (mut c, _guard) = controller_with_asset();
        for _ in 0..10 {
            c.handle_event(InputEvent::Wheel {
                pos: Point::new(640.0, 400.0),
                delta_y: 1.0,
            });
        }
        assert_eq!(c.state().scale, MIN_SCALE);

        for _ in 0..100 {
            c.handle_event(InputEvent::Wheel {
                pos: Point::new(640.0, 400.0),
                delta_y: -1.0,
            });
        }
        assert_eq!(c.state().scale, MAX_SCALE);
        assert_vertically_clamped(&c);
    }

    #[test]
    fn clamp_holds_through_arbitrary_gesture_sequences() {
        let (mut c, _guard) = controller_with_asset();
        let mut time = 0;
        for i in 0..40 {
            let x = 100.0 + (i as f64 * 37.0) % 900.0;
            let y = 100.0 + (i as f64 * 53.0) % 600.0;
            match i % 4 {
                0 => c.handle_event(InputEvent::Wheel {
                    pos: Point::new(x, y),
                    delta_y: if i % 8 == 0 { -1.0 } else { 1.0 },
                }),
                1 => c.handle_event(InputEvent::PointerDown {
                    pos: Point::new(x, y),
                    time_ms: time,
                }),
                2 => c.handle_event(InputEvent::PointerMove {
                    pos: Point::new(x + 120.0, y - 250.0),
                    time_ms: time + 8,
                }),
                _ => c.handle_event(InputEvent::PointerUp),
            }
            time += 16;
            assert_vertically_clamped(&c);
        }
        c.resize(Size::new(700.0, 500.0));
        assert_vertically_clamped(&c);
    }

    #[test]
    fn redraw_without_asset_is_empty() {
        let (c, _guard) = MapController::new(CANVAS);
        let scene = c.redraw();
        assert!(scene.ops.is_empty());
        assert!(!scene.smoothing, "the map always renders crisp");
        assert_eq!(c.center_longitude(), 0.0);
    }

    #[test]
    fn redraw_degrades_to_a_clear_when_the_canvas_has_no_usable_height() {
        let (mut c, _guard) = controller_with_asset();
        c.draw_marker(0.0, 0.0, "Origin");
        // Exactly the header band tall: the globe has zero usable height.
        c.resize(Size::new(1280.0, 80.0));
        let scene = c.redraw();
        assert!(scene.ops.is_empty(), "degenerate canvas must draw nothing");
        assert_eq!(c.center_longitude(), 0.0);

        // A hair taller must stay bounded rather than emit unbounded copies.
        c.resize(Size::new(1280.0, 80.001));
        let scene = c.redraw();
        let backdrops = scene
            .ops
            .iter()
            .filter(|op| matches!(op, SceneOp::Backdrop { .. }))
            .count();
        assert!(backdrops as i64 <= crate::layout::MAX_WRAP_COPIES + 3);
    }

    #[test]
    fn redraw_emits_backdrop_icons_and_markers_per_copy() {
        let (mut c, _guard) = controller_with_asset();
        c.draw_marker(139.69, 35.69, "Tokyo");
        let scene = c.redraw();

        let backdrops = scene
            .ops
            .iter()
            .filter(|op| matches!(op, SceneOp::Backdrop { .. }))
            .count();
        let icons = scene
            .ops
            .iter()
            .filter(|op| matches!(op, SceneOp::IconGlyph { .. }))
            .count();
        let markers = scene
            .ops
            .iter()
            .filter(|op| matches!(op, SceneOp::Marker { label, .. } if label == "Tokyo"))
            .count();
        assert!(backdrops >= 3, "wrap must paint extra copies");
        // Forest has an icon glyph, so no dots are emitted for it.
        assert_eq!(icons, backdrops * c.asset.as_ref().unwrap().points.len());
        assert_eq!(markers, backdrops);
        assert!(
            !scene.ops.iter().any(|op| matches!(op, SceneOp::Dot { .. })),
            "icon categories must not fall back to dots"
        );
    }

    #[test]
    fn center_longitude_follows_horizontal_panning() {
        let (mut c, _guard) = controller_with_asset();
        let start = c.center_longitude();

        let image = c.image_size();
        let layout = GlobeLayout::new(CANVAS, image, c.state().scale);
        // Pan a quarter of the globe to the left: the center moves 90 east.
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(0.0, 0.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::PointerMove {
            pos: Point::new(-layout.scaled_width / 4.0, 0.0),
            time_ms: 1000,
        });
        c.handle_event(InputEvent::PointerUp);

        let mut moved = c.center_longitude() - start;
        if moved < -180.0 {
            moved += 360.0;
        }
        assert!((moved - 90.0).abs() < 1e-6, "moved {moved}");
    }

    #[test]
    fn disposed_guard_makes_the_controller_inert() {
        let (mut c, guard) = controller_with_asset();
        guard.dispose();
        c.handle_event(InputEvent::PointerDown {
            pos: Point::new(100.0, 100.0),
            time_ms: 0,
        });
        c.handle_event(InputEvent::Wheel {
            pos: Point::new(100.0, 100.0),
            delta_y: -1.0,
        });
        assert_eq!(c.state().phase(), Phase::Idle);
        assert_eq!(c.state().scale, MIN_SCALE);
    }

    #[test]
    fn destroy_unsubscribes_and_clears_everything() {
        let (mut c, guard) = controller_with_asset();
        c.draw_marker(0.0, 0.0, "Origin");
        c.destroy();
        assert!(!guard.is_active());
        assert!(c.redraw().ops.is_empty());
    }
}
