// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overworld Sky: longitude-derived local time and day/night sky colors.
//!
//! This crate turns the map's current center longitude into a smooth sky
//! color for the page header. The pipeline is:
//!
//! 1. [`timezone_from_longitude`] buckets the longitude into a whole-hour
//!    timezone offset in `[-12, 14]`.
//! 2. [`local_hour`] combines that offset with the caller's wall clock to
//!    get the local hour (fractional part = minutes).
//! 3. [`SkyEngine::sky_colors`] interpolates a fixed 24-entry diurnal table
//!    ([`SKY_TABLE`]) between the two hours bracketing that local time.
//! 4. [`SkyEngine::smooth_sky_colors`] wraps the query with a debounce
//!    window (rapid pan/zoom does not thrash recomputation) and an easing
//!    blend toward the previous result (no visible color snapping).
//!
//! Time is an explicit input everywhere: the wall clock arrives as a
//! [`WallClock`] value and the debounce clock as an `Instant` on the `_at`
//! variants, so the whole crate is deterministic under test and does not
//! depend on the host's timezone database.
//!
//! ## Minimal example
//!
//! ```rust
//! use overworld_sky::{SkyEngine, WallClock};
//!
//! let engine = SkyEngine::new();
//! let colors = engine.sky_colors(139.7, WallClock::utc(3.0)).unwrap();
//! assert_eq!(colors.timezone_offset, 11);
//! assert_eq!(colors.time_name, "Afternoon");
//! ```

mod engine;
mod table;
mod theme;

pub use engine::{
    DEFAULT_DEBOUNCE, SkyColors, SkyEngine, WallClock, local_hour, timezone_from_longitude,
};
pub use table::{SKY_TABLE, SkyEntry};
pub use theme::HeaderTheme;
