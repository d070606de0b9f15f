//! skycast library
//!
//! Fetches current, hourly and daily weather forecasts from the Open-Meteo
//! API and transforms them into display-ready, time-aligned item lists.
//! The `skycast` binary and the integration tests both build on these
//! modules.

pub mod app;
pub mod cli;
pub mod conditions;
pub mod data;
pub mod forecast;
pub mod logging;
pub mod refresh;
pub mod service;
pub mod strings;
