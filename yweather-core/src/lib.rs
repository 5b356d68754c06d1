//! Client library for the Yahoo! Weather RSS feed.
//!
//! This crate defines:
//! - Location lookups (WOEID from free text, LID from a WOEID)
//! - Weather fetching for the two-day (WOEID) and five-day (LID) feeds
//! - Normalization of the namespaced feed XML into typed reports
//! - Configuration of default units and upstream endpoints
//!
//! Network access goes through the [`XmlFetcher`] trait, so the parsing logic can be
//! exercised against stored documents.

pub mod client;
pub mod compass;
pub mod config;
pub mod endpoints;
pub mod fetcher;
pub mod location;
pub mod model;
pub mod normalize;

pub use client::Client;
pub use compass::{CompassPoint, degrees_to_direction};
pub use config::Config;
pub use endpoints::Endpoints;
pub use fetcher::{FetchError, HttpFetcher, XmlFetcher};
pub use location::{LocationId, LocationIdError};
pub use model::{
    AstronomyData, AtmosphereData, ConditionData, ForecastDay, GeoData, LocationData,
    PressureState, UnitSystem, Units, WeatherReport, WindData,
};
