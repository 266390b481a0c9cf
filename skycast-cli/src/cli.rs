use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{
    CityResolver, Config, OpenWeatherFetcher, WeatherObservation, WeatherService,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for lookups.
    Configure,

    /// Show current weather for a city.
    City {
        /// City name; close misspellings of well-known European cities are
        /// corrected automatically.
        name: String,
    },

    /// Show current weather for a coordinate pair.
    Coords {
        /// Latitude in degrees, -90 to 90.
        #[arg(long)]
        lat: f64,

        /// Longitude in degrees, -180 to 180.
        #[arg(long)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { name } => {
                let observation = build_service()?
                    .weather_by_city(&name)
                    .await
                    .context("Weather lookup failed")?;
                print_observation(&observation);
                Ok(())
            }
            Command::Coords { lat, lon } => {
                let observation = build_service()?
                    .weather_by_coordinates(lat, lon)
                    .await
                    .context("Weather lookup failed")?;
                print_observation(&observation);
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let config = Config::new(api_key);
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_service() -> anyhow::Result<WeatherService> {
    let config = Config::load()?;
    let fetcher = OpenWeatherFetcher::new(config.api_key, config.base_url);

    let resolver = CityResolver::default().with_observer(Box::new(|input: &str, corrected: &str| {
        eprintln!("Note: interpreting '{input}' as '{corrected}'");
    }));

    Ok(WeatherService::new(Arc::new(fetcher), resolver))
}

fn print_observation(observation: &WeatherObservation) {
    println!("{}", observation.city);
    println!("  conditions:  {}", observation.description);
    println!("  temperature: {}", observation.temperature);
    println!("  feels like:  {}", observation.feels_like);
    println!("  humidity:    {}", observation.humidity);
    println!("  wind:        {}", observation.wind_speed);
}
