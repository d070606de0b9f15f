//! Open-Meteo weather API client
//!
//! This module fetches forecast data from the Open-Meteo API and parses it
//! into the raw response structures consumed by the forecast aligner. The
//! raw shape mirrors the wire format exactly: `current` is a single sample,
//! `hourly` and `daily` are parallel arrays aligned by index.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::locations;

/// Base URL for the Open-Meteo API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Timeout applied to every forecast request
///
/// The transport default is effectively unbounded, which would wedge the
/// refresh cycle on a stalled connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when fetching or processing forecast data
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be parsed as forecast JSON
    #[error("failed to parse forecast response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A required section or array was absent from the response
    #[error("missing forecast data: {0}")]
    MissingData(&'static str),

    /// A timestamp or date in the response could not be parsed
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Top-level Open-Meteo forecast response
///
/// The `current`, `hourly` and `daily` sections are optional so a response
/// missing one of them still deserializes; downstream processing decides
/// whether the absence is fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub current: Option<CurrentSample>,
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,
}

/// Current weather sample from Open-Meteo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSample {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: i32,
    pub apparent_temperature: f64,
    pub is_day: i32,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
}

/// Hourly forecast series from Open-Meteo
///
/// All arrays have equal length; index i across them describes the same
/// hour. `cloud_cover` is requested for wire parity but no forecast item
/// consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub cloud_cover: Vec<i32>,
    pub precipitation_probability: Vec<i32>,
    pub weather_code: Vec<i32>,
    pub is_day: Vec<i32>,
}

/// Daily forecast series from Open-Meteo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_probability_max: Vec<i32>,
}

/// Client for fetching forecast data from the Open-Meteo API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    /// Create a new WeatherClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the raw forecast for a location key
    ///
    /// The key is resolved against the static location table for coordinates
    /// (unknown keys fall back to the default location) and is passed through
    /// verbatim as the `timezone` query parameter.
    ///
    /// # Arguments
    /// * `timezone` - IANA timezone name identifying the location
    ///
    /// # Returns
    /// * `Ok(RawWeatherResponse)` - The parsed forecast payload
    /// * `Err(FetchError)` - On transport failure, non-success status or
    ///   unparseable body
    pub async fn fetch_forecast(&self, timezone: &str) -> Result<RawWeatherResponse, FetchError> {
        let location = locations::resolve_location(timezone);
        let url = build_url(location.latitude, location.longitude, timezone);
        debug!("requesting forecast: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let raw: RawWeatherResponse = serde_json::from_str(&text)?;

        Ok(raw)
    }
}

/// Builds the forecast request URL
///
/// The field lists match the upstream API contract consumed by the forecast
/// pipeline; changing them changes the inbound JSON shape.
fn build_url(latitude: f64, longitude: f64, timezone: &str) -> String {
    format!(
        "{}?latitude={}&longitude={}&timezone={}&current=temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m&hourly=temperature_2m,cloud_cover,precipitation_probability,weather_code,is_day&daily=weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max",
        OPEN_METEO_BASE_URL, latitude, longitude, timezone
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid Open-Meteo response covering all three sections
    const VALID_RESPONSE: &str = r#"{
        "latitude": 54.72,
        "longitude": 25.24,
        "generationtime_ms": 0.123,
        "utc_offset_seconds": 10800,
        "timezone": "Europe/Vilnius",
        "timezone_abbreviation": "EEST",
        "elevation": 112.0,
        "current": {
            "time": "2024-07-15T14:00",
            "interval": 900,
            "temperature_2m": 22.5,
            "relative_humidity_2m": 65,
            "apparent_temperature": 23.8,
            "is_day": 1,
            "weather_code": 2,
            "wind_speed_10m": 12.5
        },
        "hourly": {
            "time": [
                "2024-07-15T12:00", "2024-07-15T13:00", "2024-07-15T14:00",
                "2024-07-15T15:00", "2024-07-15T16:00", "2024-07-15T17:00"
            ],
            "temperature_2m": [21.0, 22.0, 22.5, 23.0, 22.8, 22.0],
            "cloud_cover": [40, 45, 50, 55, 60, 70],
            "precipitation_probability": [5, 10, 10, 20, 35, 40],
            "weather_code": [1, 2, 2, 3, 3, 61],
            "is_day": [1, 1, 1, 1, 1, 1]
        },
        "daily": {
            "time": ["2024-07-15", "2024-07-16", "2024-07-17"],
            "weather_code": [2, 61, 95],
            "temperature_2m_max": [24.5, 19.0, 21.5],
            "temperature_2m_min": [14.0, 12.5, 13.0],
            "precipitation_probability_max": [10, 80, 95]
        }
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let raw: RawWeatherResponse =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        assert!((raw.latitude - 54.72).abs() < 0.01);
        assert_eq!(raw.timezone, "Europe/Vilnius");

        let current = raw.current.expect("current section should be present");
        assert_eq!(current.time, "2024-07-15T14:00");
        assert!((current.temperature_2m - 22.5).abs() < 0.01);
        assert_eq!(current.relative_humidity_2m, 65);
        assert_eq!(current.is_day, 1);
        assert_eq!(current.weather_code, 2);

        let hourly = raw.hourly.expect("hourly section should be present");
        assert_eq!(hourly.time.len(), 6);
        assert_eq!(hourly.cloud_cover.len(), 6);
        assert_eq!(hourly.weather_code[5], 61);

        let daily = raw.daily.expect("daily section should be present");
        assert_eq!(daily.time.len(), 3);
        assert_eq!(daily.weather_code, vec![2, 61, 95]);
        assert_eq!(daily.precipitation_probability_max, vec![10, 80, 95]);
    }

    #[test]
    fn test_response_roundtrips_through_json() {
        let raw: RawWeatherResponse =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        let json = serde_json::to_string(&raw).expect("Failed to serialize response");
        let reparsed: RawWeatherResponse =
            serde_json::from_str(&json).expect("Failed to reparse response");

        let hourly = raw.hourly.unwrap();
        let reparsed_hourly = reparsed.hourly.unwrap();
        assert_eq!(hourly.time, reparsed_hourly.time);
        assert_eq!(hourly.cloud_cover, reparsed_hourly.cloud_cover);
        assert_eq!(hourly.is_day, reparsed_hourly.is_day);
        assert_eq!(
            raw.daily.unwrap().temperature_2m_max,
            reparsed.daily.unwrap().temperature_2m_max
        );
        assert_eq!(
            raw.current.unwrap().weather_code,
            reparsed.current.unwrap().weather_code
        );
    }

    #[test]
    fn test_missing_sections_parse_as_none() {
        let minimal = r#"{
            "latitude": 54.72,
            "longitude": 25.24,
            "timezone": "Europe/Vilnius"
        }"#;

        let raw: RawWeatherResponse =
            serde_json::from_str(minimal).expect("Failed to parse minimal response");

        assert!(raw.current.is_none());
        assert!(raw.hourly.is_none());
        assert!(raw.daily.is_none());
    }

    #[test]
    fn test_parse_malformed_json_fails() {
        let malformed = "{ invalid json }";
        let result: Result<RawWeatherResponse, _> = serde_json::from_str(malformed);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_url_contains_exact_field_lists() {
        let url = build_url(54.72, 25.24, "Europe/Vilnius");

        assert!(url.starts_with(OPEN_METEO_BASE_URL));
        assert!(url.contains("latitude=54.72"));
        assert!(url.contains("longitude=25.24"));
        assert!(url.contains("timezone=Europe/Vilnius"));
        assert!(url.contains(
            "current=temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m"
        ));
        assert!(url.contains(
            "hourly=temperature_2m,cloud_cover,precipitation_probability,weather_code,is_day"
        ));
        assert!(url.contains(
            "daily=weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max"
        ));
    }

    #[test]
    fn test_build_url_passes_unknown_timezone_verbatim() {
        // Coordinates fall back to the default location, but the requested
        // key still travels as the timezone parameter
        let url = build_url(54.72, 25.24, "Mars/Olympus-Mons");
        assert!(url.contains("timezone=Mars/Olympus-Mons"));
    }

    #[test]
    fn test_fetch_error_display_messages() {
        let err = FetchError::MissingData("hourly");
        assert!(err.to_string().contains("missing forecast data"));
        assert!(err.to_string().contains("hourly"));

        let err = FetchError::InvalidTimeFormat("not-a-time".to_string());
        assert!(err.to_string().contains("invalid time format"));
    }
}
