//! Common types and data structures

use chrono::{DateTime, FixedOffset};
use std::time::Instant;

/// Fetch status for a single endpoint slot
#[derive(Clone, PartialEq, Debug)]
pub enum FetchStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Latest payload plus fetch status for one endpoint.
///
/// `data` always holds the last successful payload; a failed refresh
/// updates `status` but never clears `data`.
pub struct FetchSlot<T> {
    pub data: Option<T>,
    pub status: FetchStatus,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: FetchStatus::Idle,
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn resolve(&mut self, value: T) {
        self.data = Some(value);
        self.status = FetchStatus::Ready;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

/// Shared state for the three dashboard endpoints, updated by fetch
/// tasks and read by the UI thread.
#[derive(Default)]
pub struct DashboardState {
    pub quote: FetchSlot<Quote>,
    pub location: FetchSlot<GeoLocation>,
    pub time: FetchSlot<WorldTime>,
    /// When the current `time` payload arrived, for advancing the clock.
    pub time_received: Option<Instant>,
}

/// Random quotation from the quote service
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// IP-derived location from the geolocation service
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GeoLocation {
    pub city: String,
    #[serde(default)]
    pub region_name: String,
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
}

/// Current time and calendar details from the world time service
#[derive(Debug, Clone, serde::Deserialize)]
pub struct WorldTime {
    pub datetime: String,
    pub timezone: String,
    pub abbreviation: String,
    pub utc_offset: String,
    /// 0-based, Sunday first
    pub day_of_week: u8,
    pub day_of_year: u16,
    pub week_number: u8,
}

impl WorldTime {
    /// Parse the payload timestamp, which carries the local UTC offset.
    pub fn local_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.datetime).ok()
    }
}

/// Time-of-day classification driving the greeting and theme palette
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Classify an hour of day. Pre-dawn hours count as evening so the
    /// widget is never left unclassified.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Good morning",
            DayPeriod::Afternoon => "Good afternoon",
            DayPeriod::Evening => "Good evening",
        }
    }

    pub fn is_daytime(self) -> bool {
        !matches!(self, DayPeriod::Evening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn quote_deserializes() {
        let json = r#"{
            "_id": "JQa24dI3vW",
            "content": "Simplicity is the soul of efficiency.",
            "author": "Austin Freeman",
            "tags": ["technology"],
            "length": 37
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.author, "Austin Freeman");
        assert!(quote.content.starts_with("Simplicity"));
    }

    #[test]
    fn geolocation_deserializes() {
        let json = r#"{
            "ip": "203.0.113.7",
            "country_code": "NL",
            "country_name": "Netherlands",
            "region_code": "NH",
            "region_name": "North Holland",
            "city": "Amsterdam",
            "zip_code": "1012",
            "time_zone": "Europe/Amsterdam",
            "latitude": 52.37,
            "longitude": 4.9,
            "metro_code": 0
        }"#;
        let loc: GeoLocation = serde_json::from_str(json).unwrap();
        assert_eq!(loc.city, "Amsterdam");
        assert_eq!(loc.country_code, "NL");
        assert_eq!(loc.region_name, "North Holland");
    }

    #[test]
    fn world_time_deserializes_and_parses() {
        let json = r#"{
            "abbreviation": "CEST",
            "client_ip": "203.0.113.7",
            "datetime": "2024-06-21T14:32:05.123456+02:00",
            "day_of_week": 5,
            "day_of_year": 173,
            "dst": true,
            "dst_offset": 3600,
            "timezone": "Europe/Amsterdam",
            "unixtime": 1718973125,
            "utc_datetime": "2024-06-21T12:32:05.123456+00:00",
            "utc_offset": "+02:00",
            "week_number": 25
        }"#;
        let time: WorldTime = serde_json::from_str(json).unwrap();
        assert_eq!(time.abbreviation, "CEST");
        assert_eq!(time.week_number, 25);

        let dt = time.local_datetime().unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 32);
    }

    #[test]
    fn day_period_boundaries() {
        assert_eq!(DayPeriod::from_hour(0), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(4), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(5), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(11), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(17), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(18), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(23), DayPeriod::Evening);
    }

    #[test]
    fn day_period_daytime() {
        assert!(DayPeriod::Morning.is_daytime());
        assert!(DayPeriod::Afternoon.is_daytime());
        assert!(!DayPeriod::Evening.is_daytime());
    }

    #[test]
    fn failed_refresh_keeps_last_payload() {
        let mut slot = FetchSlot::<Quote>::default();
        assert!(slot.data.is_none());

        slot.begin();
        assert!(slot.is_loading());

        slot.resolve(Quote {
            content: "first".into(),
            author: "a".into(),
        });
        assert_eq!(slot.status, FetchStatus::Ready);

        slot.begin();
        slot.fail("connection reset");
        assert_eq!(slot.status, FetchStatus::Failed("connection reset".into()));
        assert_eq!(slot.data.as_ref().unwrap().content, "first");
    }
}
