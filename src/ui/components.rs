//! Reusable UI components
//!
//! Small presentation helpers shared by the render code in main.rs.

use chrono::{DateTime, FixedOffset};

/// Format the wall clock, 24-hour or 12-hour
pub fn format_clock(dt: &DateTime<FixedOffset>, use_24h: bool) -> String {
    if use_24h {
        dt.format("%H:%M").to_string()
    } else {
        dt.format("%-I:%M %p").to_string()
    }
}

/// Weekday name for the world time service's 0-based, Sunday-first index
pub fn weekday_name(day_of_week: u8) -> &'static str {
    match day_of_week {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "N/A",
    }
}

/// Render a "+02:00" style offset as "UTC+02:00"
pub fn utc_offset_label(offset: &str) -> String {
    format!("UTC{}", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_time(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn clock_formats_24h() {
        let dt = sample_time("2024-06-21T14:05:09+02:00");
        assert_eq!(format_clock(&dt, true), "14:05");
    }

    #[test]
    fn clock_formats_12h() {
        let dt = sample_time("2024-06-21T14:05:09+02:00");
        assert_eq!(format_clock(&dt, false), "2:05 PM");

        let dt = sample_time("2024-06-21T00:30:00+02:00");
        assert_eq!(format_clock(&dt, false), "12:30 AM");
    }

    #[test]
    fn weekday_names_cover_service_range() {
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(6), "Saturday");
        assert_eq!(weekday_name(7), "N/A");
    }

    #[test]
    fn offset_label() {
        assert_eq!(utc_offset_label("+02:00"), "UTC+02:00");
        assert_eq!(utc_offset_label("-05:00"), "UTC-05:00");
    }
}
