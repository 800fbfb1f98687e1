// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Per-frame velocity decay factor.
pub const FRICTION: f64 = 0.95;

/// Velocity magnitude (px/ms, per axis) below which momentum stops.
pub const STOP_THRESHOLD: f64 = 0.01;

/// Release velocity (px/ms, per axis) required to start momentum at all.
pub const START_THRESHOLD: f64 = 0.1;

/// Nominal frame interval the decay is calibrated against.
pub const FRAME_MS: f64 = 16.0;

/// A cancellable inertial-scroll animation.
///
/// Each [`step`](Self::step) yields the displacement for one nominal frame
/// and decays the velocity; the task finishes on its own once both velocity
/// components drop below [`STOP_THRESHOLD`], or immediately when cancelled.
/// A new drag gesture cancels the old task rather than racing it, so two
/// animations never fight over the same offsets.
#[derive(Clone, Debug)]
pub struct MomentumTask {
    velocity: Vec2,
    active: bool,
    cancelled: bool,
}

impl MomentumTask {
    /// Starts a task from a release velocity in px/ms, or `None` when the
    /// release was too slow to coast.
    #[must_use]
    pub fn start(velocity: Vec2) -> Option<Self> {
        if velocity.x.abs() > START_THRESHOLD || velocity.y.abs() > START_THRESHOLD {
            Some(Self {
                velocity,
                active: true,
                cancelled: false,
            })
        } else {
            None
        }
    }

    /// Whether the task is still producing displacements.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active && !self.cancelled
    }

    /// Marks the task cancelled; all further [`step`](Self::step) calls
    /// return `None`.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.active = false;
    }

    /// Advances one frame, returning the displacement to apply or `None`
    /// once the task is finished or cancelled.
    pub fn step(&mut self) -> Option<Vec2> {
        if !self.is_active() {
            return None;
        }
        let displacement = self.velocity * FRAME_MS;
        self.velocity = self.velocity * FRICTION;
        if self.velocity.x.abs() < STOP_THRESHOLD && self.velocity.y.abs() < STOP_THRESHOLD {
            self.active = false;
        }
        Some(displacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_release_never_starts() {
        assert!(MomentumTask::start(Vec2::new(0.05, 0.09)).is_none());
        assert!(MomentumTask::start(Vec2::ZERO).is_none());
    }

    #[test]
    fn one_fast_axis_is_enough_to_start() {
        assert!(MomentumTask::start(Vec2::new(0.0, 0.5)).is_some());
        assert!(MomentumTask::start(Vec2::new(-0.2, 0.0)).is_some());
    }

    #[test]
    fn displacement_magnitude_strictly_decays() {
        let mut task = MomentumTask::start(Vec2::new(2.0, -1.0)).unwrap();
        let mut previous = f64::INFINITY;
        while let Some(d) = task.step() {
            let mag = d.hypot();
            assert!(mag < previous, "momentum must decay monotonically");
            previous = mag;
        }
    }

    #[test]
    fn task_terminates_in_finitely_many_frames() {
        let mut task = MomentumTask::start(Vec2::new(5.0, 5.0)).unwrap();
        let mut frames = 0;
        while task.step().is_some() {
            frames += 1;
            assert!(frames < 1000, "momentum failed to terminate");
        }
        assert!(!task.is_active());
        // 5.0 * 0.95^n < 0.01 needs n > log(0.002)/log(0.95) ~ 121 frames.
        assert!(frames > 100);
    }

    #[test]
    fn cancel_stops_immediately() {
        let mut task = MomentumTask::start(Vec2::new(3.0, 0.0)).unwrap();
        assert!(task.step().is_some());
        task.cancel();
        assert!(task.step().is_none());
        assert!(!task.is_active());
    }

    #[test]
    fn first_step_covers_one_frame_at_release_velocity() {
        let mut task = MomentumTask::start(Vec2::new(1.5, -0.5)).unwrap();
        let d = task.step().unwrap();
        assert_eq!(d, Vec2::new(1.5 * FRAME_MS, -0.5 * FRAME_MS));
    }
}
