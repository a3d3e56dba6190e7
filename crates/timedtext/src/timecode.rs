//! SubRip timecode formatting.

/// Format a second offset as `HH:MM:SS,mmm`.
///
/// Every unit truncates rather than rounds; this decomposition defines the
/// on-disk subtitle format, and rounding would silently drift sync for cues
/// with fractional-second starts (e.g. `0.9999` must stay at millisecond
/// `999`, never roll over to `1000`).
pub fn format_timecode(total_seconds: f64) -> String {
    let hours = (total_seconds / 3600.0) as u64;
    let minutes = ((total_seconds % 3600.0) / 60.0) as u64;
    let seconds = ((total_seconds % 3600.0) % 60.0) as u64;
    let milliseconds = ((total_seconds % 1.0) * 1000.0) as u64;
    format!("{hours:02}:{minutes:02}:{seconds:02},{milliseconds:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mixed_units() {
        assert_eq!(format_timecode(3661.25), "01:01:01,250");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_timecode(0.0), "00:00:00,000");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(format_timecode(59.999), "00:00:59,999");
        assert_eq!(format_timecode(0.9999), "00:00:00,999");
    }

    #[test]
    fn pads_every_unit_to_fixed_width() {
        assert_eq!(format_timecode(2.5), "00:00:02,500");
        assert_eq!(format_timecode(36_000.0), "10:00:00,000");
    }
}
