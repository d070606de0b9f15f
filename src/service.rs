//! Forecast fetch-and-process orchestration
//!
//! One fetch cycle: request the raw forecast, classify the current sample,
//! align the hourly and daily series, and bundle everything into a
//! [`ProcessedForecast`]. Each cycle fully replaces the previous result;
//! nothing is merged incrementally.

use chrono::Utc;
use log::{info, warn};

use crate::conditions::classify;
use crate::data::weather::{FetchError, RawWeatherResponse, WeatherClient};
use crate::data::{CurrentConditions, ProcessedForecast};
use crate::forecast::{build_daily, build_hourly};

/// Orchestrates forecast fetching and processing for one location at a time
#[derive(Debug, Clone, Default)]
pub struct ForecastService {
    client: WeatherClient,
}

impl ForecastService {
    /// Create a new ForecastService with a default API client
    pub fn new() -> Self {
        Self {
            client: WeatherClient::new(),
        }
    }

    /// Create a new ForecastService with a custom API client
    pub fn with_client(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch and process the forecast for a location key
    ///
    /// This is the single unit of work per refresh cycle. Transport,
    /// deserialization and missing-current failures surface as errors;
    /// absent hourly/daily sections degrade to empty item lists.
    ///
    /// # Arguments
    /// * `timezone` - IANA timezone name identifying the location
    pub async fn fetch_and_process(
        &self,
        timezone: &str,
    ) -> Result<ProcessedForecast, FetchError> {
        info!("fetching forecast for {}", timezone);
        let raw = self.client.fetch_forecast(timezone).await?;
        process_response(raw)
    }
}

/// Processes a raw response into a display-ready forecast
///
/// Split out from the fetch so the whole transformation can run against a
/// canned payload.
pub fn process_response(raw: RawWeatherResponse) -> Result<ProcessedForecast, FetchError> {
    let current_sample = raw.current.as_ref().ok_or(FetchError::MissingData("current"))?;
    let is_day = current_sample.is_day == 1;
    let (icon, description_key) = classify(current_sample.weather_code, is_day);

    let current = CurrentConditions {
        temperature: current_sample.temperature_2m,
        apparent_temperature: current_sample.apparent_temperature,
        humidity: current_sample.relative_humidity_2m,
        wind_speed: current_sample.wind_speed_10m,
        is_day,
        weather_code: current_sample.weather_code,
        icon,
        description_key,
    };

    let daily = match build_daily(raw.daily.as_ref()) {
        Ok(items) => items,
        Err(FetchError::MissingData(section)) => {
            warn!("no daily forecast available: {}", section);
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    let hourly = match build_hourly(&current_sample.time, raw.hourly.as_ref()) {
        Ok(items) => items,
        Err(FetchError::MissingData(section)) => {
            warn!("no hourly forecast available: {}", section);
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    info!(
        "processed forecast: {} hourly, {} daily entries",
        hourly.len(),
        daily.len()
    );

    Ok(ProcessedForecast {
        current,
        hourly,
        daily,
        fetched_at: Utc::now(),
    })
}
