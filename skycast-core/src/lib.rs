//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Input validation and fuzzy city-name resolution
//! - Response-shape validation and fault classification
//! - The fetch abstraction over the weather provider, plus the
//!   deterministic mock fallback used while an API key is not active yet
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services.

pub mod classify;
pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod provider;
pub mod resolve;
pub mod response;
pub mod service;
pub mod validate;

pub use classify::{FailureAction, FailureKind, TransportFailure, classify_failure};
pub use config::Config;
pub use error::WeatherError;
pub use model::{ProviderPayload, WeatherObservation, WeatherQuery};
pub use provider::{WeatherFetcher, openweather::OpenWeatherFetcher};
pub use resolve::{CityResolver, CorrectionObserver};
pub use service::WeatherService;
