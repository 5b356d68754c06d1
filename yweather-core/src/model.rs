use serde::{Deserialize, Serialize};

use crate::compass::CompassPoint;

/// Unit system requested from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    #[default]
    Imperial,
}

impl UnitSystem {
    pub fn from_metric_flag(metric: bool) -> Self {
        if metric { UnitSystem::Metric } else { UnitSystem::Imperial }
    }

    /// Value of the `u` parameter understood by the feed.
    pub fn code(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "c",
            UnitSystem::Imperial => "f",
        }
    }

    pub fn units(&self) -> Units {
        match self {
            UnitSystem::Metric => Units::metric(),
            UnitSystem::Imperial => Units::imperial(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindUnits {
    pub chill: String,
    pub direction: String,
    pub speed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereUnits {
    pub humidity: String,
    pub visibility: String,
    pub pressure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionUnits {
    pub temp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastUnits {
    pub low: String,
    pub high: String,
}

/// Unit symbols for every measured value of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub wind: WindUnits,
    pub atmosphere: AtmosphereUnits,
    pub condition: ConditionUnits,
    pub forecast: ForecastUnits,
}

impl Units {
    pub fn metric() -> Self {
        Self::with_symbols("°C", "km/h", "km", "mb")
    }

    pub fn imperial() -> Self {
        Self::with_symbols("°F", "mph", "mi", "in")
    }

    fn with_symbols(temperature: &str, speed: &str, distance: &str, pressure: &str) -> Self {
        Self {
            wind: WindUnits {
                chill: temperature.to_string(),
                direction: "°".to_string(),
                speed: speed.to_string(),
            },
            atmosphere: AtmosphereUnits {
                humidity: "%".to_string(),
                visibility: distance.to_string(),
                pressure: pressure.to_string(),
            },
            condition: ConditionUnits { temp: temperature.to_string() },
            forecast: ForecastUnits { low: temperature.to_string(), high: temperature.to_string() },
        }
    }
}

/// Qualitative barometric pressure trend derived from the `rising` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureState {
    Steady,
    Rising,
    Falling,
}

impl PressureState {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(PressureState::Steady),
            "1" => Some(PressureState::Rising),
            "2" => Some(PressureState::Falling),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationData {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindData {
    pub chill: Option<String>,
    pub direction: Option<String>,
    pub speed: Option<String>,
    /// Derived from `direction`.
    pub compass: Option<CompassPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AtmosphereData {
    pub humidity: Option<String>,
    pub visibility: Option<String>,
    pub pressure: Option<String>,
    pub rising: Option<String>,
    /// Derived from `rising`.
    pub state: Option<PressureState>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AstronomyData {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionData {
    pub code: Option<String>,
    pub temp: Option<String>,
    pub text: Option<String>,
    pub date: Option<String>,
    /// Derived from `code`.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoData {
    pub lat: String,
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: Option<String>,
    pub date: Option<String>,
    pub low: Option<String>,
    pub high: Option<String>,
    pub text: Option<String>,
    pub code: Option<String>,
}

/// Normalized contents of one weather feed document.
///
/// Any field the feed did not carry is `None`. `forecast` is `None` only when the
/// feed had no item at all; an item without forecast entries gives an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub title: Option<String>,
    pub link: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub last_build_date: Option<String>,
    pub ttl: Option<String>,
    pub logo: Option<String>,
    pub guid: Option<String>,
    pub units: Units,
    pub location: Option<LocationData>,
    pub wind: Option<WindData>,
    pub atmosphere: Option<AtmosphereData>,
    pub astronomy: Option<AstronomyData>,
    pub condition: Option<ConditionData>,
    pub geo: Option<GeoData>,
    pub forecast: Option<Vec<ForecastDay>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_flag_selects_unit_system() {
        assert_eq!(UnitSystem::from_metric_flag(true), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_metric_flag(false), UnitSystem::Imperial);
        assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Metric.code(), "c");
        assert_eq!(UnitSystem::Imperial.code(), "f");
    }

    #[test]
    fn unit_tables_differ_by_system() {
        let metric = UnitSystem::Metric.units();
        assert_eq!(metric.wind.speed, "km/h");
        assert_eq!(metric.atmosphere.visibility, "km");
        assert_eq!(metric.forecast.high, "°C");

        let imperial = UnitSystem::Imperial.units();
        assert_eq!(imperial.wind.chill, "°F");
        assert_eq!(imperial.atmosphere.pressure, "in");
        assert_eq!(imperial.atmosphere.humidity, "%");
        assert_eq!(imperial.condition.temp, "°F");
    }

    #[test]
    fn pressure_state_from_rising_code() {
        assert_eq!(PressureState::from_code("0"), Some(PressureState::Steady));
        assert_eq!(PressureState::from_code("1"), Some(PressureState::Rising));
        assert_eq!(PressureState::from_code("2"), Some(PressureState::Falling));
        assert_eq!(PressureState::from_code("3"), None);
        assert_eq!(PressureState::from_code(""), None);
    }
}
