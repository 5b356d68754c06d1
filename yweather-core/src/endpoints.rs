use serde::{Deserialize, Serialize};

use crate::{location::LocationId, model::UnitSystem};

pub const DEFAULT_WOEID_LOOKUP_URL: &str = "http://locdrop.query.yahoo.com/v1/public/yql";
pub const DEFAULT_WEATHER_URL: &str = "http://xml.weather.yahoo.com/forecastrss";
pub const DEFAULT_CONDITION_IMAGE_URL: &str = "http://l.yimg.com/a/i/us/we/52";

/// Base URLs of the upstream services.
///
/// Example TOML:
/// [endpoints]
/// weather = "http://xml.weather.yahoo.com/forecastrss"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub woeid_lookup: String,
    pub weather: String,
    pub condition_image: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            woeid_lookup: DEFAULT_WOEID_LOOKUP_URL.to_string(),
            weather: DEFAULT_WEATHER_URL.to_string(),
            condition_image: DEFAULT_CONDITION_IMAGE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// YQL placefinder query returning the WOEID of a free-text location.
    pub fn woeid_url(&self, location: &str) -> String {
        format!(
            "{}?q=select%20woeid%20from%20locdrop.placefinder%20where%20text='{}'",
            self.woeid_lookup,
            escape_location(location),
        )
    }

    pub fn weather_url(&self, id: &LocationId, units: UnitSystem) -> String {
        match id {
            LocationId::Woeid(woeid) => format!("{}?w={}&u={}", self.weather, woeid, units.code()),
            LocationId::Lid(lid) => format!("{}/{}_{}.xml", self.weather, lid, units.code()),
        }
    }

    pub fn condition_image_url(&self, code: &str) -> String {
        format!("{}/{}.gif", self.condition_image, code)
    }
}

/// Percent-encode a location, leaving `/` intact.
fn escape_location(location: &str) -> String {
    urlencoding::encode(location).replace("%2F", "/")
}
