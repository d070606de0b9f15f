//! Application state management for skycast
//!
//! Holds the caller-observed fetch state machine and the single
//! latest-result slot. One `App` owns at most one in-flight fetch: a refresh
//! requested while another is loading is dropped, not queued. A failed fetch
//! keeps the previous successful forecast so stale data beats no data.

use chrono::{DateTime, Local};
use log::error;

use crate::data::weather::FetchError;
use crate::data::ProcessedForecast;
use crate::service::ForecastService;

/// Display message recorded when a fetch fails
const UPDATE_FAILED: &str = "Update failed.";

/// Caller-observed state of the fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch has run yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch completed and replaced the result slot
    Success,
    /// The last fetch failed; any previous result is preserved
    Failed,
}

/// Main application struct managing fetch state and the latest forecast
pub struct App {
    /// Current fetch state
    pub state: FetchState,
    /// Latest successful forecast, replaced wholesale on success
    pub latest: Option<ProcessedForecast>,
    /// Failure message for display, cleared on success
    pub last_error: Option<String>,
    /// Local time of the last successful refresh
    pub last_updated: Option<DateTime<Local>>,
    /// Location key used for every fetch
    location: String,
    /// Fetch-and-process orchestrator
    service: ForecastService,
}

impl App {
    /// Creates a new App for a location key with default state
    pub fn new(location: impl Into<String>) -> Self {
        Self::with_service(location, ForecastService::new())
    }

    /// Creates a new App with a custom service (for testing)
    pub fn with_service(location: impl Into<String>, service: ForecastService) -> Self {
        Self {
            state: FetchState::Idle,
            latest: None,
            last_error: None,
            last_updated: None,
            location: location.into(),
            service,
        }
    }

    /// Returns the location key this app fetches for
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Runs one fetch-and-process cycle
    ///
    /// Returns `false` without doing anything when a fetch is already in
    /// flight (single-flight guard); returns `true` once the cycle has
    /// completed, whether it succeeded or failed. Errors never escape; they
    /// are recorded as a failure state with a generic message.
    pub async fn refresh(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = FetchState::Loading;

        let result = self.service.fetch_and_process(&self.location).await;
        self.apply_result(result);
        true
    }

    /// Applies a completed fetch result to the state machine
    fn apply_result(&mut self, result: Result<ProcessedForecast, FetchError>) {
        match result {
            Ok(forecast) => {
                self.latest = Some(forecast);
                self.last_error = None;
                self.last_updated = Some(Local::now());
                self.state = FetchState::Success;
            }
            Err(err) => {
                error!("forecast refresh failed: {}", err);
                // Keep the previous forecast; stale data beats no data
                self.last_error = Some(UPDATE_FAILED.to_string());
                self.state = FetchState::Failed;
            }
        }
    }
}
