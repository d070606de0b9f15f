//! Core data models for skycast
//!
//! This module contains the processed forecast types produced from a raw
//! Open-Meteo response, plus the static location table and the API client in
//! its submodules.

pub mod locations;
pub mod weather;

pub use locations::{all_locations, get_location, resolve_location};
pub use weather::{FetchError, RawWeatherResponse, WeatherClient};

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// A forecast location keyed by its IANA timezone name
///
/// Uses `&'static str` for string fields to allow static initialization of
/// the LOCATIONS array, so the struct only implements `Serialize`. Look up
/// entries through `resolve_location` rather than deserializing them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    /// IANA timezone name, also used as the API `timezone` parameter
    pub timezone: &'static str,
    /// Human-readable city name
    pub city: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

/// Current weather conditions annotated with display info
///
/// Note: icon and description key are `&'static str` references into the
/// classifier's fixed tables, so this struct only implements `Serialize`
/// (not `Deserialize`); it is rebuilt from a raw response, never parsed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub apparent_temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Whether the sample falls in daylight hours
    pub is_day: bool,
    /// WMO weather code reported by the API
    pub weather_code: i32,
    /// Icon id for the current conditions
    pub icon: &'static str,
    /// Description key, resolved for display via `strings::localize`
    pub description_key: &'static str,
}

/// One hour of forecast data, aligned to the display window
///
/// Items are produced in ascending timestamp order and identified by their
/// position in the window (the first item is "Now"), so the type defines no
/// value equality.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyForecastItem {
    /// Time of the forecast sample
    pub time: NaiveDateTime,
    /// Display label: "Now" for the first window entry, else "HH:00"
    pub time_label: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_chance: i32,
    /// Icon id for this hour's conditions
    pub icon: &'static str,
    /// Description key for this hour's conditions
    pub description_key: &'static str,
}

/// One day of forecast data
#[derive(Debug, Clone, Serialize)]
pub struct DailyForecastItem {
    /// Calendar date of the forecast day
    pub date: NaiveDate,
    /// Display label: "Today" for the first entry, else the weekday name
    pub day_label: String,
    /// Short display date, e.g. "Jul 15"
    pub display_date: String,
    /// Daily maximum temperature in Celsius
    pub max_temp: f64,
    /// Daily minimum temperature in Celsius
    pub min_temp: f64,
    /// Maximum precipitation probability percentage for the day
    pub precipitation_probability: i32,
    /// Icon id for the day's conditions
    pub icon: &'static str,
    /// Description key for the day's conditions
    pub description_key: &'static str,
}

// Two daily items describe the same forecast slot exactly when they fall on
// the same calendar date, regardless of temperatures or labels.
impl PartialEq for DailyForecastItem {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DailyForecastItem {}

impl Hash for DailyForecastItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl fmt::Display for DailyForecastItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.day_label, self.display_date)
    }
}

/// A fully processed forecast, replaced wholesale on every fetch
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedForecast {
    /// Classified current conditions
    pub current: CurrentConditions,
    /// Hourly window: now plus up to the next 23 hours
    pub hourly: Vec<HourlyForecastItem>,
    /// Daily list: today plus the following days
    pub daily: Vec<DailyForecastItem>,
    /// When this forecast was fetched
    pub fetched_at: DateTime<Utc>,
}
