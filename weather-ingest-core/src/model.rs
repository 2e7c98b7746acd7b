use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InvalidMonth;

/// Daily aggregates requested from the archive, in query order.
pub const DAILY_METRICS: &[&str] = &["temperature_2m_max", "temperature_2m_min", "precipitation_sum"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Inclusive date range sent to the archive API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QueryWindow {
    /// Window covering every day of `year`-`month`.
    pub fn for_month(year: i32, month: u32) -> Result<Self, InvalidMonth> {
        let invalid = || InvalidMonth(format!("{year}-{month:02}"));

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM` into a whole-month window.
    pub fn parse_month(value: &str) -> Result<Self, InvalidMonth> {
        let (year, month) = value
            .trim()
            .split_once('-')
            .ok_or_else(|| InvalidMonth(value.to_string()))?;

        let year: i32 = year.parse().map_err(|_| InvalidMonth(value.to_string()))?;
        let month: u32 = month.parse().map_err(|_| InvalidMonth(value.to_string()))?;

        Self::for_month(year, month).map_err(|_| InvalidMonth(value.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }
}

impl Default for QueryWindow {
    /// July 2025.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid literal date"),
            end: NaiveDate::from_ymd_opt(2025, 7, 31).expect("valid literal date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRequest {
    pub coordinates: Coordinates,
    pub window: QueryWindow,
    pub timezone: String,
}

/// Archive response body. Never inspected, only carried to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherPayload(pub serde_json::Value);

impl WeatherPayload {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes).map(Self)
    }

    /// Compact JSON: no spaces after `,` or `:` and non-ASCII left unescaped.
    /// Same content as the archive response, not the same bytes.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        self.0.to_string().into_bytes()
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub bucket: String,
    pub key: String,
    pub bytes: usize,
}

/// Value handed back to the function host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InvocationResult {
    Success,
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_window_is_july_2025() {
        let w = QueryWindow::default();
        assert_eq!(w.start.to_string(), "2025-07-01");
        assert_eq!(w.end.to_string(), "2025-07-31");
        assert_eq!((w.year(), w.month()), (2025, 7));
    }

    #[test]
    fn for_month_handles_short_months_and_leap_years() {
        let feb = QueryWindow::for_month(2024, 2).unwrap();
        assert_eq!(feb.end.to_string(), "2024-02-29");

        let feb = QueryWindow::for_month(2025, 2).unwrap();
        assert_eq!(feb.end.to_string(), "2025-02-28");

        let dec = QueryWindow::for_month(2025, 12).unwrap();
        assert_eq!(dec.end.to_string(), "2025-12-31");
    }

    #[test]
    fn for_month_rejects_month_thirteen() {
        assert_eq!(QueryWindow::for_month(2025, 13), Err(InvalidMonth("2025-13".into())));
    }

    #[test]
    fn parse_month_accepts_year_dash_month() {
        assert_eq!(QueryWindow::parse_month("2025-07").unwrap(), QueryWindow::default());
        assert_eq!(QueryWindow::parse_month("2024-9").unwrap().end.to_string(), "2024-09-30");
    }

    #[test]
    fn parse_month_rejects_garbage() {
        for bad in ["", "2025", "2025-00", "july-2025", "2025-07-01"] {
            assert!(QueryWindow::parse_month(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn payload_keeps_key_order() {
        let payload = WeatherPayload::from_slice(br#"{"z": 1, "a": [1.5, null]}"#).unwrap();
        assert_eq!(payload.to_json_bytes(), br#"{"z":1,"a":[1.5,null]}"#.to_vec());
    }

    #[test]
    fn payload_bytes_are_compact_and_keep_non_ascii() {
        let payload = WeatherPayload::from_slice("{\"unit\": \"°C\", \"v\": [1, 2]}".as_bytes()).unwrap();
        assert_eq!(String::from_utf8(payload.to_json_bytes()).unwrap(), "{\"unit\":\"°C\",\"v\":[1,2]}");
    }

    #[test]
    fn invocation_result_shapes() {
        assert_eq!(serde_json::to_value(InvocationResult::Success).unwrap(), json!({"status": "success"}));
        assert_eq!(
            serde_json::to_value(InvocationResult::Error { message: "boom".into() }).unwrap(),
            json!({"status": "error", "message": "boom"})
        );
    }
}
