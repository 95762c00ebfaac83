use chrono_tz::Tz;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Vacancy list refetch interval in milliseconds (30 seconds)
    pub const VACANCY_REFETCH_INTERVAL_MS: u32 = 30_000;

    /// Queue history refetch interval in milliseconds
    pub const ARCHIVE_REFETCH_INTERVAL_MS: u32 = 5_000;

    /// Granularity of the reservation deadline countdown
    pub const URGENCY_TICK_MS: u32 = 1_000;

    /// Delay before a typed filter value is applied
    pub const FILTER_DEBOUNCE_MS: u32 = 500;

    /// Attempts made by the retry helper before giving up
    pub const MAX_RETRY_ATTEMPTS: u32 = 4;

    /// Highest queue position included in the history chart
    pub const ARCHIVE_MAX_POSITION: u32 = 10;

    /// Monthly study grant (kr) that rent is compared against
    pub const STUDY_GRANT_KR: u32 = 13_156;

    /// Calendar all dates from the API are interpreted in
    pub const TIME_ZONE: Tz = chrono_tz::Europe::Stockholm;

    /// Initial map centre (latitude, longitude)
    pub const MAP_CENTER: (f64, f64) = (55.704261, 13.1915074);

    /// Initial map zoom level
    pub const MAP_ZOOM: u8 = 14;
}
