// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;

/// A normalized input event fed to the controller.
///
/// Pointer and touch events carry the position in canvas pixels and a
/// monotonic timestamp in milliseconds (used for velocity estimation).
/// Multi-finger touches are ignored wholesale; a second finger neither
/// drags nor ends the current gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed over the canvas.
    PointerDown {
        /// Position in canvas pixels.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Mouse moved. Only meaningful while a drag is in progress.
    PointerMove {
        /// Position in canvas pixels.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Mouse button released anywhere (global listener).
    PointerUp,
    /// Pointer left the window entirely (global listener); ends a drag the
    /// same way a release does.
    PointerLeave,
    /// Touch began.
    TouchStart {
        /// Position of the first touch in canvas pixels.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
        /// Number of active touches; anything other than 1 is ignored.
        touches: u8,
    },
    /// Touch moved.
    TouchMove {
        /// Position of the first touch in canvas pixels.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
        /// Number of active touches; anything other than 1 is ignored.
        touches: u8,
    },
    /// Last touch lifted.
    TouchEnd,
    /// Scroll wheel turned over the canvas.
    Wheel {
        /// Cursor position in canvas pixels; the zoom anchor.
        pos: Point,
        /// Positive values zoom out, negative zoom in.
        delta_y: f64,
    },
}

/// Handle tying the controller's event subscriptions to a lifetime.
///
/// The controller registers listeners on surfaces it does not own (the
/// window, for global pointer-up and pointer-leave), so teardown must be
/// explicit: [`dispose`](Self::dispose) or dropping the guard deactivates
/// every subscription, after which routed events are silently ignored.
#[derive(Debug)]
pub struct ListenerGuard {
    active: Rc<Cell<bool>>,
}

impl ListenerGuard {
    pub(crate) fn new() -> (Self, Rc<Cell<bool>>) {
        let active = Rc::new(Cell::new(true));
        (
            Self {
                active: Rc::clone(&active),
            },
            active,
        )
    }

    /// Whether the subscriptions are still live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Deactivates all subscriptions now instead of at drop.
    pub fn dispose(&self) {
        self.active.set(false);
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.active.set(false);
    }
}
