// Copyright 2026 the Overworld Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One hour of the diurnal cycle: header and page-background colors plus a
/// human-readable name for the time of day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SkyEntry {
    /// Hour of the day, `0..=23`.
    pub hour: u8,
    /// Header region color as `#rrggbb`.
    pub header: &'static str,
    /// Page background color as `#rrggbb`.
    pub background: &'static str,
    /// Display name for this hour.
    pub name: &'static str,
}

const fn entry(hour: u8, color: &'static str, name: &'static str) -> SkyEntry {
    SkyEntry {
        hour,
        header: color,
        background: color,
        name,
    }
}

/// The fixed 24-entry diurnal color table, indexed by hour.
///
/// The header and background channels currently share a palette; they are
/// kept as separate fields because queries return them independently.
pub static SKY_TABLE: [SkyEntry; 24] = [
    // Midnight through pre-dawn.
    entry(0, "#0a0a0f", "Deep Night"),
    entry(1, "#0a0a0f", "Late Night"),
    entry(2, "#0f0f1a", "Night"),
    entry(3, "#0f0f1a", "Early Night"),
    entry(4, "#1a0f0a", "Pre-Dawn"),
    entry(5, "#2a1a0a", "Early Dawn"),
    // Sunrise ramp.
    entry(6, "#3a2a1a", "Dawn"),
    entry(7, "#5a3a2a", "Early Sunrise"),
    entry(8, "#8a5a3a", "Sunrise"),
    entry(9, "#b0d0e0", "Early Morning"),
    entry(10, "#a0c0d0", "Morning"),
    entry(11, "#90b0c0", "Late Morning"),
    // Daytime blues.
    entry(12, "#e8f4fd", "Noon"),
    entry(13, "#d0e8fd", "Early Afternoon"),
    entry(14, "#b8dcfd", "Afternoon"),
    entry(15, "#a0d0fd", "Late Afternoon"),
    entry(16, "#88c4fd", "Golden Hour"),
    entry(17, "#ffe6cc", "Late Golden Hour"),
    // Sunset and back into night.
    entry(18, "#ffe6d6", "Sunset"),
    entry(19, "#ffe6d6", "Dusk"),
    entry(20, "#2a1a0a", "Early Evening"),
    entry(21, "#1a0f0a", "Evening"),
    entry(22, "#0f0f1a", "Late Evening"),
    entry(23, "#0a0a0f", "Night"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use overworld_color::Rgb;

    #[test]
    fn table_covers_every_hour_in_order() {
        for (i, entry) in SKY_TABLE.iter().enumerate() {
            assert_eq!(usize::from(entry.hour), i);
        }
    }

    #[test]
    fn every_entry_parses_as_hex() {
        for entry in &SKY_TABLE {
            assert!(Rgb::from_hex(entry.header).is_ok(), "{}", entry.name);
            assert!(Rgb::from_hex(entry.background).is_ok(), "{}", entry.name);
        }
    }
}
