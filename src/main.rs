//! skycast - view current, hourly and daily weather forecasts
//!
//! A terminal application that fetches forecasts from the Open-Meteo API,
//! prints them, and optionally keeps refreshing them on a timer.

use clap::Parser;

use skycast::app::{App, FetchState};
use skycast::cli::{Cli, RunConfig};
use skycast::data::{all_locations, ProcessedForecast};
use skycast::logging;
use skycast::refresh::{RefreshConfig, RefreshHandle, RefreshMessage};
use skycast::strings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli)?;

    if config.list_locations {
        for location in all_locations() {
            println!("{:<18} {}", location.timezone, location.city);
        }
        return Ok(());
    }

    logging::init(config.verbose)?;

    let mut app = App::new(config.location.clone());

    // Initial fetch before any timer starts
    app.refresh().await;
    render(&app);

    if config.watch {
        let handle = RefreshHandle::spawn(RefreshConfig {
            interval: config.interval,
            enabled: true,
        });
        run_watch_loop(&mut app, handle).await;
    }

    Ok(())
}

/// Drives the periodic refresh loop until the channel closes or Ctrl-C
async fn run_watch_loop(app: &mut App, mut handle: RefreshHandle) {
    loop {
        tokio::select! {
            message = handle.receiver.recv() => {
                match message {
                    Some(RefreshMessage::Tick) => {
                        if app.refresh().await {
                            render(app);
                        }
                    }
                    None => return,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }
    handle.shutdown().await;
}

/// Renders the latest application state to stdout
fn render(app: &App) {
    if app.state == FetchState::Failed {
        if let Some(message) = &app.last_error {
            println!("{}", message);
        }
    }

    match &app.latest {
        Some(forecast) => print_forecast(forecast, app),
        None => println!("No forecast available."),
    }
}

/// Prints one processed forecast
fn print_forecast(forecast: &ProcessedForecast, app: &App) {
    let current = &forecast.current;

    println!();
    println!(
        "{}  {}  {:.1}°C (feels like {:.1}°C)",
        current.icon,
        strings::localize(current.description_key),
        current.temperature,
        current.apparent_temperature
    );
    println!(
        "humidity {}%  wind {:.1} km/h",
        current.humidity, current.wind_speed
    );
    if let Some(updated) = app.last_updated {
        println!("Last updated: {}", updated.format("%H:%M"));
    }

    if !forecast.hourly.is_empty() {
        println!();
        println!("Next hours:");
        for item in &forecast.hourly {
            println!(
                "  {:>5}  {:>5.1}°C  {:>3}%  {}",
                item.time_label,
                item.temperature,
                item.precipitation_chance,
                strings::localize(item.description_key)
            );
        }
    }

    if !forecast.daily.is_empty() {
        println!();
        println!("Daily:");
        for item in &forecast.daily {
            println!(
                "  {:<20}  {:>5.1}° / {:>5.1}°  {:>3}%  {}",
                item,
                item.max_temp,
                item.min_temp,
                item.precipitation_probability,
                strings::localize(item.description_key)
            );
        }
    }
}
