//! Localized display strings for forecast output
//!
//! Forecast items carry stable description keys; this module resolves them to
//! display text at presentation time. Lookups that miss the table return the
//! key itself so new keys degrade visibly instead of panicking.

use chrono::Weekday;

/// Static table of display strings keyed by description key
///
/// Only the English strings ship with the binary; the table is the single
/// place a translation would plug into.
static STRINGS: [(&str, &str); 19] = [
    ("weather_clear", "Clear sky"),
    ("weather_mainly_clear", "Mainly clear"),
    ("weather_partly_cloudy", "Partly cloudy"),
    ("weather_overcast", "Overcast"),
    ("weather_fog", "Fog"),
    ("weather_drizzle", "Drizzle"),
    ("weather_rain", "Rain"),
    ("weather_rain_heavy", "Heavy rain"),
    ("weather_snow", "Snow"),
    ("weather_snow_heavy", "Heavy snow"),
    ("weather_thunderstorm", "Thunderstorm"),
    ("weather_unknown", "Unknown conditions"),
    ("weekday_monday", "Monday"),
    ("weekday_tuesday", "Tuesday"),
    ("weekday_wednesday", "Wednesday"),
    ("weekday_thursday", "Thursday"),
    ("weekday_friday", "Friday"),
    ("weekday_saturday", "Saturday"),
    ("weekday_sunday", "Sunday"),
];

/// Display label for the first daily entry
pub const LABEL_TODAY: &str = "Today";

/// Display label for the first hourly entry
pub const LABEL_NOW: &str = "Now";

/// Resolves a description key to its display string
///
/// Returns the key unchanged when it is not present in the table.
pub fn localize(key: &str) -> &str {
    STRINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}

/// Returns the description key for a weekday
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "weekday_monday",
        Weekday::Tue => "weekday_tuesday",
        Weekday::Wed => "weekday_wednesday",
        Weekday::Thu => "weekday_thursday",
        Weekday::Fri => "weekday_friday",
        Weekday::Sat => "weekday_saturday",
        Weekday::Sun => "weekday_sunday",
    }
}

/// Resolves a weekday directly to its display name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
