// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use tracing::debug;

use crate::engine::SkyColors;

/// Transition applied by hosts when the header color changes.
const TRANSITION: Duration = Duration::from_millis(800);

/// Headless sink for the header region's sky color.
///
/// This is the engine-side half of `applyColors`: it records the color the
/// host should paint the header with, plus the ease-out transition to use.
/// The page shell (an external collaborator) reads [`HeaderTheme::background`]
/// and applies it to its actual header element. Redundant applications of an
/// unchanged color are skipped so hosts do not restart transitions.
#[derive(Clone, Debug, Default)]
pub struct HeaderTheme {
    background: Option<String>,
    last_applied: Option<SkyColors>,
}

impl HeaderTheme {
    /// Creates an empty theme; no color has been applied yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a query result to the header region.
    ///
    /// Returns `true` if the stored color changed.
    pub fn apply(&mut self, colors: &SkyColors) -> bool {
        if let Some(last) = &self.last_applied {
            if last.header_color == colors.header_color {
                return false;
            }
        }
        debug!(
            timezone = colors.timezone_offset,
            local_hour = colors.local_hour,
            time = colors.time_name,
            header = %colors.header_color,
            "applying sky colors"
        );
        self.background = Some(colors.header_color.clone());
        self.last_applied = Some(colors.clone());
        true
    }

    /// The header background color the host should show, if any has been
    /// applied.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// The ease-out duration hosts should use when transitioning to a new
    /// background color.
    #[must_use]
    pub fn transition(&self) -> Duration {
        TRANSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{SkyEngine, WallClock};

    #[test]
    fn apply_records_color_and_skips_repeats() {
        let engine = SkyEngine::new();
        let colors = engine.sky_colors(0.0, WallClock::utc(10.0)).unwrap();

        let mut theme = HeaderTheme::new();
        assert!(theme.background().is_none());
        assert!(theme.apply(&colors));
        assert_eq!(theme.background(), Some(colors.header_color.as_str()));

        // Same color again: no change reported.
        assert!(!theme.apply(&colors));

        let night = engine.sky_colors(0.0, WallClock::utc(22.0)).unwrap();
        assert!(theme.apply(&night));
        assert_eq!(theme.background(), Some(night.header_color.as_str()));
    }
}
