//! Integration test for the forecast processing pipeline
//!
//! Drives a canned Open-Meteo payload through deserialization and the full
//! processing pass, asserting on the display-ready output the way a caller
//! of the library would observe it.

use skycast::conditions::icons;
use skycast::data::RawWeatherResponse;
use skycast::service::process_response;
use skycast::strings;

/// A trimmed but shape-complete Open-Meteo response: 30 hourly entries with
/// the current time matching hourly index 3, and 4 daily entries.
fn payload() -> String {
    let times: Vec<String> = (0..30)
        .map(|i| format!("\"2024-07-{:02}T{:02}:00\"", 15 + i / 24, i % 24))
        .collect();
    let temps: Vec<String> = (0..30).map(|i| format!("{}.0", 12 + i % 12)).collect();
    let clouds: Vec<String> = (0..30).map(|i| format!("{}", i * 3 % 100)).collect();
    let precip: Vec<String> = (0..30).map(|i| format!("{}", i * 5 % 100)).collect();
    let codes: Vec<String> = (0..30)
        .map(|i| format!("{}", [0, 1, 2, 3, 61][i % 5]))
        .collect();
    let is_day: Vec<String> = (0..30)
        .map(|i| format!("{}", u8::from((6..20).contains(&(i % 24)))))
        .collect();

    format!(
        r#"{{
            "latitude": 54.72,
            "longitude": 25.24,
            "timezone": "Europe/Vilnius",
            "current": {{
                "time": "2024-07-15T03:00",
                "temperature_2m": 16.5,
                "relative_humidity_2m": 82,
                "apparent_temperature": 15.9,
                "is_day": 0,
                "weather_code": 3,
                "wind_speed_10m": 8.4
            }},
            "hourly": {{
                "time": [{times}],
                "temperature_2m": [{temps}],
                "cloud_cover": [{clouds}],
                "precipitation_probability": [{precip}],
                "weather_code": [{codes}],
                "is_day": [{is_day}]
            }},
            "daily": {{
                "time": ["2024-07-15", "2024-07-16", "2024-07-17", "2024-07-18"],
                "weather_code": [3, 61, 95, 0],
                "temperature_2m_max": [19.5, 18.0, 21.0, 24.0],
                "temperature_2m_min": [12.0, 11.5, 12.5, 13.0],
                "precipitation_probability_max": [40, 85, 95, 5]
            }}
        }}"#,
        times = times.join(", "),
        temps = temps.join(", "),
        clouds = clouds.join(", "),
        precip = precip.join(", "),
        codes = codes.join(", "),
        is_day = is_day.join(", "),
    )
}

#[test]
fn test_pipeline_produces_aligned_display_ready_forecast() {
    let raw: RawWeatherResponse =
        serde_json::from_str(&payload()).expect("payload should deserialize");
    let forecast = process_response(raw).expect("processing should succeed");

    // Current conditions: overcast at night
    assert_eq!(forecast.current.description_key, "weather_overcast");
    assert_eq!(forecast.current.icon, icons::MOON_CLOUD);
    assert!(!forecast.current.is_day);
    assert!((forecast.current.temperature - 16.5).abs() < 0.01);

    // Hourly window: anchored at the exact current-time match (index 3),
    // 24 entries long, "Now" first and hour labels after
    assert_eq!(forecast.hourly.len(), 24);
    assert_eq!(forecast.hourly[0].time_label, "Now");
    assert_eq!(
        forecast.hourly[0].time.format("%Y-%m-%dT%H:%M").to_string(),
        "2024-07-15T03:00"
    );
    assert_eq!(forecast.hourly[1].time_label, "04:00");
    assert_eq!(
        forecast.hourly[23].time.format("%Y-%m-%dT%H:%M").to_string(),
        "2024-07-16T02:00"
    );

    // Each hourly entry is classified with its own day flag: 03:00 is night
    // with code 3, 06:00 is day with code 1 (both cloud icons)
    assert_eq!(forecast.hourly[0].icon, icons::MOON_CLOUD);
    assert_eq!(forecast.hourly[3].icon, icons::SUN_CLOUD);

    // Daily list: today first, then weekday labels; summaries use day icons
    assert_eq!(forecast.daily.len(), 4);
    assert_eq!(forecast.daily[0].day_label, strings::LABEL_TODAY);
    assert_eq!(forecast.daily[1].day_label, "Tuesday");
    assert_eq!(forecast.daily[2].description_key, "weather_thunderstorm");
    assert_eq!(forecast.daily[3].icon, icons::SUN);

    // Description keys resolve to display strings
    assert_eq!(
        strings::localize(forecast.current.description_key),
        "Overcast"
    );
}

#[test]
fn test_pipeline_soft_fails_on_missing_series() {
    let minimal = r#"{
        "latitude": 54.72,
        "longitude": 25.24,
        "timezone": "Europe/Vilnius",
        "current": {
            "time": "2024-07-15T03:00",
            "temperature_2m": 16.5,
            "relative_humidity_2m": 82,
            "apparent_temperature": 15.9,
            "is_day": 1,
            "weather_code": 0,
            "wind_speed_10m": 8.4
        }
    }"#;

    let raw: RawWeatherResponse =
        serde_json::from_str(minimal).expect("payload should deserialize");
    let forecast = process_response(raw).expect("missing series are soft failures");

    assert!(forecast.hourly.is_empty());
    assert!(forecast.daily.is_empty());
    assert_eq!(forecast.current.description_key, "weather_clear");
    assert_eq!(forecast.current.icon, icons::SUN);
}

#[test]
fn test_pipeline_daily_items_equal_by_date() {
    let raw: RawWeatherResponse =
        serde_json::from_str(&payload()).expect("payload should deserialize");
    let forecast = process_response(raw).expect("processing should succeed");

    let mut relabeled = forecast.daily[0].clone();
    relabeled.day_label = "Monday".to_string();
    relabeled.max_temp = -40.0;

    assert_eq!(forecast.daily[0], relabeled);
    assert_ne!(forecast.daily[0], forecast.daily[1]);
}
