//! Forecast alignment
//!
//! Transforms the raw parallel-array series of an Open-Meteo response into
//! ordered, display-ready forecast item lists: a 24-hour window anchored at
//! the current timestamp and a day-labeled daily list. Classification of
//! each entry's weather code happens here as the items are built.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::conditions::classify;
use crate::data::weather::{DailySeries, FetchError, HourlySeries};
use crate::data::{DailyForecastItem, HourlyForecastItem};
use crate::strings;

/// Maximum number of hourly entries in the display window
const HOURLY_WINDOW: usize = 24;

/// Parse a datetime string in the API's ISO 8601 form (e.g. "2024-07-15T05:30")
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, FetchError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| FetchError::InvalidTimeFormat(datetime_str.to_string()))
}

/// Parse a date string in the API's daily form (e.g. "2024-07-15")
fn parse_date(date_str: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| FetchError::InvalidTimeFormat(date_str.to_string()))
}

/// Builds the daily forecast list from the raw daily series
///
/// Entries are consumed in input order, which the API guarantees to be
/// chronological with today first. The first entry is labeled "Today", the
/// rest by the weekday of their parsed date. Daily summaries always use the
/// daytime icon and description.
///
/// # Returns
/// * `Ok(items)` - One item per input entry; empty input gives an empty list
/// * `Err(FetchError::MissingData)` - If the section is absent or its arrays
///   disagree in length
/// * `Err(FetchError::InvalidTimeFormat)` - If a date fails to parse
pub fn build_daily(daily: Option<&DailySeries>) -> Result<Vec<DailyForecastItem>, FetchError> {
    let daily = daily.ok_or(FetchError::MissingData("daily"))?;

    let len = daily.time.len();
    if daily.weather_code.len() != len
        || daily.temperature_2m_max.len() != len
        || daily.temperature_2m_min.len() != len
        || daily.precipitation_probability_max.len() != len
    {
        return Err(FetchError::MissingData(
            "daily arrays have inconsistent lengths",
        ));
    }

    let mut items = Vec::with_capacity(len);
    for i in 0..len {
        let date = parse_date(&daily.time[i])?;
        let (icon, description_key) = classify(daily.weather_code[i], true);

        let day_label = if i == 0 {
            strings::LABEL_TODAY.to_string()
        } else {
            strings::localize(strings::weekday_key(date.weekday())).to_string()
        };

        items.push(DailyForecastItem {
            date,
            day_label,
            display_date: date.format("%b %-d").to_string(),
            max_temp: daily.temperature_2m_max[i],
            min_temp: daily.temperature_2m_min[i],
            precipitation_probability: daily.precipitation_probability_max[i],
            icon,
            description_key,
        });
    }

    Ok(items)
}

/// Builds the hourly forecast window from the raw hourly series
///
/// The window is a contiguous slice of at most 24 entries anchored at the
/// current timestamp (see [`start_index`]) and clamped to the array bounds.
/// The first window entry is labeled "Now", the rest by their hour; each
/// entry is classified with its own day/night flag.
///
/// # Arguments
/// * `current_time` - The current sample's timestamp string from the API
/// * `hourly` - The hourly series, if present in the response
///
/// # Returns
/// * `Ok(items)` - The aligned window; empty input gives an empty list
/// * `Err(FetchError::MissingData)` - If the section is absent or its arrays
///   disagree in length
/// * `Err(FetchError::InvalidTimeFormat)` - If a timestamp fails to parse
pub fn build_hourly(
    current_time: &str,
    hourly: Option<&HourlySeries>,
) -> Result<Vec<HourlyForecastItem>, FetchError> {
    let hourly = hourly.ok_or(FetchError::MissingData("hourly"))?;

    let len = hourly.time.len();
    if hourly.temperature_2m.len() != len
        || hourly.cloud_cover.len() != len
        || hourly.precipitation_probability.len() != len
        || hourly.weather_code.len() != len
        || hourly.is_day.len() != len
    {
        return Err(FetchError::MissingData(
            "hourly arrays have inconsistent lengths",
        ));
    }

    let start = start_index(current_time, &hourly.time)?;
    let end = (start + HOURLY_WINDOW).min(len);

    let mut items = Vec::with_capacity(end - start);
    for (offset, i) in (start..end).enumerate() {
        let time = parse_datetime(&hourly.time[i])?;
        let is_day = hourly.is_day[i] == 1;
        let (icon, description_key) = classify(hourly.weather_code[i], is_day);

        let time_label = if offset == 0 {
            strings::LABEL_NOW.to_string()
        } else {
            time.format("%H:00").to_string()
        };

        items.push(HourlyForecastItem {
            time,
            time_label,
            temperature: hourly.temperature_2m[i],
            precipitation_chance: hourly.precipitation_probability[i],
            icon,
            description_key,
        });
    }

    Ok(items)
}

/// Locates the hourly window's start index
///
/// Prefers an exact string match of the current timestamp. Failing that,
/// the first entry at or after the parsed current time; failing that too
/// (current time past the end of the series), index 0.
fn start_index(current_time: &str, times: &[String]) -> Result<usize, FetchError> {
    if let Some(index) = times.iter().position(|t| t == current_time) {
        return Ok(index);
    }

    let current = parse_datetime(current_time)?;
    for (index, t) in times.iter().enumerate() {
        if parse_datetime(t)? >= current {
            return Ok(index);
        }
    }

    Ok(0)
}
