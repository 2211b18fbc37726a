//! Application constants and configuration

pub const GEOLOCATION_URL: &str = "https://freegeoip.app/json/";
pub const WORLD_TIME_URL: &str = "https://worldtimeapi.org/api/ip";
pub const QUOTE_URL: &str = "https://api.quotable.io/random";
pub const DEFAULT_QUOTE_TAGS: &str = "technology|famous-quotes";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed attempt count for the world time endpoint. No backoff between
/// attempts; the service fails transiently behind some resolvers.
pub const TIME_FETCH_ATTEMPTS: u32 = 3;

/// Per-request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
