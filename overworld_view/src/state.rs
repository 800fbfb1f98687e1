// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Minimum zoom: the globe exactly fills the usable canvas height.
pub const MIN_SCALE: f64 = 1.0;

/// Maximum zoom.
pub const MAX_SCALE: f64 = 51.0;

/// Interaction phase of the viewport. The three phases are mutually
/// exclusive; entering [`Phase::Dragging`] cancels any active momentum.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No gesture in progress.
    Idle,
    /// A pointer or single touch is dragging the map.
    Dragging,
    /// Post-drag inertial motion is decaying.
    Momentum,
}

/// The viewport state record.
///
/// There is exactly one of these per controller; every input handler mutates
/// it in place through the controller, so no handler can act on a stale copy.
/// Invariants: `min_scale <= scale <= max_scale` always, and `offset_y` is
/// kept inside the vertical clamp bounds for the current scale and canvas
/// (re-established after every mutation by the controller).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Current zoom factor on top of the height-fitting base scale.
    pub scale: f64,
    /// Horizontal pan offset in canvas pixels. Never clamped; the draw
    /// routine wraps it instead.
    pub offset_x: f64,
    /// Vertical pan offset in canvas pixels, always within clamp bounds.
    pub offset_y: f64,
    /// Lower zoom limit.
    pub min_scale: f64,
    /// Upper zoom limit.
    pub max_scale: f64,
    /// Whether a drag gesture is in progress.
    pub is_dragging: bool,
    /// Last observed pointer position during a gesture.
    pub last_pointer: Point,
    /// Timestamp of the last pointer event, in milliseconds.
    pub last_event_ms: u64,
    /// Instantaneous drag velocity in pixels per millisecond.
    pub velocity: Vec2,
    /// Whether momentum animation is running.
    pub is_momentum_active: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            is_dragging: false,
            last_pointer: Point::ZERO,
            last_event_ms: 0,
            velocity: Vec2::ZERO,
            is_momentum_active: false,
        }
    }
}

impl ViewState {
    /// The current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_dragging {
            Phase::Dragging
        } else if self.is_momentum_active {
            Phase::Momentum
        } else {
            Phase::Idle
        }
    }
}
