// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

use overworld_color::{ColorError, interpolate};

use crate::table::SKY_TABLE;

/// Easing factor applied when blending a fresh query toward the previous one.
const EASING_FACTOR: f64 = 0.25;

/// Default debounce window between full recomputations.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// The caller's wall clock, supplied explicitly so queries are deterministic
/// and host-agnostic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallClock {
    /// Local wall-clock hour in `[0, 24)`; the fractional part is minutes.
    pub hour: f64,
    /// Hours to add to the local hour to reach UTC. A machine running at
    /// UTC+2 has `utc_offset_hours == -2.0`.
    pub utc_offset_hours: f64,
}

impl WallClock {
    /// A clock already in UTC.
    #[must_use]
    pub const fn utc(hour: f64) -> Self {
        Self {
            hour,
            utc_offset_hours: 0.0,
        }
    }
}

/// Result of a sky-color query.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyColors {
    /// Interpolated header color as `#rrggbb`.
    pub header_color: String,
    /// Interpolated page-background color as `#rrggbb`.
    pub background_color: String,
    /// Timezone offset derived from the query longitude, in whole hours.
    pub timezone_offset: i32,
    /// Local hour at that timezone, in `[0, 24)`.
    pub local_hour: f64,
    /// Display name of the hour the query fell into.
    pub time_name: &'static str,
}

/// Derives a whole-hour timezone offset from a longitude.
///
/// The longitude is first normalized into `[-180, 180]` (so the result is
/// periodic in full turns), then shifted east by 30° — an empirical nudge
/// that lines the 15°-per-hour bands up better with real-world timezone
/// boundaries — divided by 15, rounded, and clamped to `[-12, 14]`.
#[must_use]
pub fn timezone_from_longitude(longitude: f64) -> i32 {
    let mut wrapped = longitude;
    while wrapped > 180.0 {
        wrapped -= 360.0;
    }
    while wrapped < -180.0 {
        wrapped += 360.0;
    }
    let offset = ((wrapped + 30.0) / 15.0).round() as i32;
    offset.clamp(-12, 14)
}

/// Resolves the local hour in the given timezone from the caller's clock.
///
/// The result is in `[0, 24)`; the fractional part carries minutes.
#[must_use]
pub fn local_hour(timezone_offset: i32, clock: WallClock) -> f64 {
    let hour =
        (clock.hour + clock.utc_offset_hours + f64::from(timezone_offset)).rem_euclid(24.0);
    // rem_euclid rounds up to exactly 24.0 when the sum is a tiny negative;
    // fold that back to the start of the day to keep the result below 24.
    if hour >= 24.0 { 0.0 } else { hour }
}

/// Sky-color query engine with a time-based debounce window.
///
/// [`SkyEngine::sky_colors`] is a pure table lookup + interpolation.
/// [`SkyEngine::smooth_sky_colors_at`] adds two stabilizers for interactive
/// use: a debounce window that suppresses recomputation during rapid viewport
/// manipulation, and an easing blend toward the previously returned colors so
/// the header never visibly snaps.
#[derive(Clone, Debug)]
pub struct SkyEngine {
    last_update: Option<Instant>,
    debounce: Duration,
}

impl Default for SkyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyEngine {
    /// Creates an engine with the default 50 ms debounce window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_debounce(DEFAULT_DEBOUNCE)
    }

    /// Creates an engine with a custom debounce window.
    #[must_use]
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            last_update: None,
            debounce,
        }
    }

    /// Computes the sky colors for a longitude at the given wall clock.
    ///
    /// The two table entries bracketing the local hour are interpolated by
    /// the minute fraction; the result is tagged with the earlier entry's
    /// name.
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError`] from interpolation. The static table always
    /// parses, so this only fires if the table is edited to invalid hex.
    pub fn sky_colors(&self, longitude: f64, clock: WallClock) -> Result<SkyColors, ColorError> {
        let timezone_offset = timezone_from_longitude(longitude);
        let local = local_hour(timezone_offset, clock);

        let h1 = local.floor() as usize;
        let h2 = (h1 + 1) % 24;
        let factor = local - local.floor();

        let from = &SKY_TABLE[h1];
        let to = &SKY_TABLE[h2];

        Ok(SkyColors {
            header_color: interpolate(from.header, to.header, factor)?,
            background_color: interpolate(from.background, to.background, factor)?,
            timezone_offset,
            local_hour: local,
            time_name: from.name,
        })
    }

    /// Debounced, eased variant of [`SkyEngine::sky_colors`] using the
    /// current instant. See [`SkyEngine::smooth_sky_colors_at`].
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError`] from interpolation.
    pub fn smooth_sky_colors(
        &mut self,
        longitude: f64,
        clock: WallClock,
        previous: Option<&SkyColors>,
    ) -> Result<SkyColors, ColorError> {
        self.smooth_sky_colors_at(longitude, clock, previous, Instant::now())
    }

    /// Debounced, eased sky-color query at an explicit instant.
    ///
    /// If less than the debounce window has elapsed since the last
    /// non-debounced computation, `previous` is returned unchanged (or a
    /// fresh non-eased computation when there is no previous result).
    /// Otherwise a fresh result is computed and, when a previous result
    /// exists, both color channels are eased from it toward the fresh value
    /// by a fixed factor.
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError`] from interpolation.
    pub fn smooth_sky_colors_at(
        &mut self,
        longitude: f64,
        clock: WallClock,
        previous: Option<&SkyColors>,
        now: Instant,
    ) -> Result<SkyColors, ColorError> {
        if let Some(last) = self.last_update {
            if now.saturating_duration_since(last) < self.debounce {
                return match previous {
                    Some(prev) => Ok(prev.clone()),
                    None => self.sky_colors(longitude, clock),
                };
            }
        }

        let mut fresh = self.sky_colors(longitude, clock)?;
        self.last_update = Some(now);

        if let Some(prev) = previous {
            fresh.header_color =
                interpolate(&prev.header_color, &fresh.header_color, EASING_FACTOR)?;
            fresh.background_color = interpolate(
                &prev.background_color,
                &fresh.background_color,
                EASING_FACTOR,
            )?;
        }
        Ok(fresh)
    }

    /// Clears the debounce timestamp so the next query recomputes
    /// immediately. Collaborators call this when a manipulation gesture ends.
    pub fn reset_debounce(&mut self) {
        self.last_update = None;
    }
}
