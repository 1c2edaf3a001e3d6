//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// PROVIDER DEFAULTS
// =============================================================================

/// Default base URL of the Codeforces public API
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://codeforces.com/api";

/// User agent sent with every provider request
pub const DEFAULT_PROVIDER_USER_AGENT: &str =
    concat!("friendboard/", env!("CARGO_PKG_VERSION"));

/// Provider endpoint names
pub mod endpoints {
    pub const USER_INFO: &str = "user.info";
    pub const USER_STATUS: &str = "user.status";
    pub const USER_RATING: &str = "user.rating";
}

/// Envelope status reported by the provider on success
pub const PROVIDER_STATUS_OK: &str = "OK";

// =============================================================================
// STORE DEFAULTS
// =============================================================================

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Default directory of the file-backed store
pub const DEFAULT_STORE_DIR: &str = "./data";

/// Key under which the tracked-user collection is persisted
pub const DEFAULT_STORE_KEY: &str = "friends";

/// Store backend identifiers
pub mod store_backends {
    pub const REDIS: &str = "redis";
    pub const FILE: &str = "file";
    pub const MEMORY: &str = "memory";

    /// All supported backends
    pub const ALL: &[&str] = &[REDIS, FILE, MEMORY];
}

// =============================================================================
// TIMEFRAMES
// =============================================================================

/// Timeframe identifiers accepted in queries and configuration
pub mod timeframes {
    pub const LAST_24_HOURS: &str = "24hrs";
    pub const LAST_WEEK: &str = "1week";
    pub const LAST_MONTH: &str = "1month";
    pub const LAST_YEAR: &str = "1year";
    pub const ALL_TIME: &str = "all";

    /// All timeframe identifiers
    pub const ALL: &[&str] = &[LAST_24_HOURS, LAST_WEEK, LAST_MONTH, LAST_YEAR, ALL_TIME];
}

/// Timeframe used when a request does not name one
pub const DEFAULT_TIMEFRAME: &str = timeframes::ALL_TIME;

/// Window lengths in seconds
pub mod windows {
    pub const DAY_SECS: i64 = 24 * 60 * 60;
    pub const WEEK_SECS: i64 = 7 * DAY_SECS;
    pub const MONTH_SECS: i64 = 30 * DAY_SECS;
    pub const YEAR_SECS: i64 = 365 * DAY_SECS;
}

// =============================================================================
// SCORING
// =============================================================================

/// Inclusive rating bands and the points a solve in that band is worth.
/// Ratings between bands, below the first band, or missing score nothing.
pub const RATING_BANDS: &[(i32, i32, u32)] = &[
    (800, 900, 1),
    (1000, 1100, 2),
    (1200, 1300, 3),
    (1400, 1500, 4),
    (1600, 1700, 5),
    (1800, 1900, 6),
    (2000, 2100, 7),
    (2200, 2300, 8),
    (2400, 2500, 9),
];

/// Ratings at or above this floor earn the top score
pub const TOP_RATING_FLOOR: i32 = 2600;

/// Points for a solve at or above [`TOP_RATING_FLOOR`]
pub const TOP_RATING_POINTS: u32 = 10;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Minimum handle length accepted by the provider
pub const MIN_HANDLE_LENGTH: u64 = 3;

/// Maximum handle length accepted by the provider
pub const MAX_HANDLE_LENGTH: u64 = 24;
