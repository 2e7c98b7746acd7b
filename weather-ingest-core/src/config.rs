use crate::model::{ArchiveRequest, Coordinates, QueryWindow};

pub const BUCKET_VAR: &str = "S3_BUCKET";
pub const CITY_VAR: &str = "CITY";

pub const DEFAULT_BUCKET: &str = "taxi-weather-analytics-s3-bucket";
/// Kept URL-encoded; it is embedded in the storage key as-is.
pub const DEFAULT_CITY: &str = "New%20York";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// New York City. Not derived from `CITY`.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates { latitude: 40.7128, longitude: -74.0060 };

/// Everything one invocation needs, resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestConfig {
    pub bucket: String,
    /// Path label only. The query always uses `coordinates`.
    pub city: String,
    pub coordinates: Coordinates,
    pub window: QueryWindow,
    pub timezone: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            city: DEFAULT_CITY.to_string(),
            coordinates: DEFAULT_COORDINATES,
            window: QueryWindow::default(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl IngestConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the environment. Only unset values
    /// fall back to the defaults; an empty value is kept as-is.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        Self { bucket: var(BUCKET_VAR, DEFAULT_BUCKET), city: var(CITY_VAR, DEFAULT_CITY), ..Self::default() }
    }

    pub fn with_window(mut self, window: QueryWindow) -> Self {
        self.window = window;
        self
    }

    pub fn archive_request(&self) -> ArchiveRequest {
        ArchiveRequest {
            coordinates: self.coordinates,
            window: self.window,
            timezone: self.timezone.clone(),
        }
    }

    /// True when `city` names something other than the place the
    /// coordinates point at.
    pub fn city_mismatches_coordinates(&self) -> bool {
        self.city != DEFAULT_CITY && self.coordinates == DEFAULT_COORDINATES
    }
}
