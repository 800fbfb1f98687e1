// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overworld View: the pannable, zoomable map viewport.
//!
//! [`MapController`] owns the single [`ViewState`] and turns normalized
//! [`InputEvent`]s into state changes:
//!
//! - dragging by mouse or single touch, with velocity tracking;
//! - inertial coasting after a fast release ([`MomentumTask`]), cancelled
//!   cleanly when a new gesture starts;
//! - cursor-anchored wheel zoom between scales 1 and 51;
//! - vertical clamping (the globe never detaches from the canvas edges) and
//!   seamless horizontal wrapping.
//!
//! Each redraw produces a [`Scene`]: an ordered list of paint operations the
//! embedding replays against its surface, one backdrop copy plus terrain and
//! named markers per wrapped copy. Named markers are placed by
//! longitude/latitude through an equirectangular projection
//! ([`layout::project`]).
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use overworld_view::{InputEvent, MapController};
//!
//! let (mut controller, guard) = MapController::new(Size::new(1280.0, 800.0));
//! controller.handle_event(InputEvent::Wheel {
//!     pos: Point::new(640.0, 400.0),
//!     delta_y: -1.0,
//! });
//! assert!((controller.state().scale - 1.1).abs() < 1e-12);
//! guard.dispose();
//! ```

mod controller;
mod events;
pub mod layout;
mod momentum;
mod scene;
mod state;

pub use controller::MapController;
pub use events::{InputEvent, ListenerGuard};
pub use momentum::{FRAME_MS, FRICTION, MomentumTask, START_THRESHOLD, STOP_THRESHOLD};
pub use scene::{
    DOT_RADIUS, ICON_SCALE, ICON_STROKE_WIDTH, MARKER_FILL, MARKER_RADIUS, MARKER_STROKE, Scene,
    SceneOp,
};
pub use state::{MAX_SCALE, MIN_SCALE, Phase, ViewState};
