//! Conversion of parsed feed documents into [`WeatherReport`] values.
//!
//! Lookups never fail: a missing element or attribute becomes `None` at the
//! smallest enclosing field, and the rest of the report is still filled in.

use std::borrow::Cow;

use xmltree::{Element, XMLNode};

use crate::{
    compass::degrees_to_direction,
    endpoints::Endpoints,
    model::{
        AstronomyData, AtmosphereData, ConditionData, ForecastDay, GeoData, LocationData,
        PressureState, UnitSystem, WeatherReport, WindData,
    },
};

pub const WEATHER_NS: &str = "http://xml.weather.yahoo.com/ns/rss/1.0";
pub const GEO_NS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

/// Title the feed puts on its only item when the location is unknown.
pub const CITY_NOT_FOUND: &str = "City not found";

/// Element name qualified by an optional namespace URI.
#[derive(Debug, Clone, Copy)]
struct Tag {
    name: &'static str,
    namespace: Option<&'static str>,
}

const fn rss(name: &'static str) -> Tag {
    Tag { name, namespace: None }
}

const fn yweather(name: &'static str) -> Tag {
    Tag { name, namespace: Some(WEATHER_NS) }
}

const fn geo(name: &'static str) -> Tag {
    Tag { name, namespace: Some(GEO_NS) }
}

const CHANNEL: Tag = rss("channel");
const ITEM: Tag = rss("item");

impl Tag {
    fn matches(&self, element: &Element) -> bool {
        let namespace = element.namespace.as_deref().filter(|ns| !ns.is_empty());
        element.name == self.name && namespace == self.namespace
    }
}

fn child_elements(parent: &Element) -> impl Iterator<Item = &Element> {
    parent.children.iter().filter_map(|node| match node {
        XMLNode::Element(element) => Some(element),
        _ => None,
    })
}

fn find<'a>(root: &'a Element, path: &[Tag]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |parent, tag| child_elements(parent).find(|e| tag.matches(e)))
}

fn text(root: &Element, path: &[Tag]) -> Option<String> {
    find(root, path)?.get_text().map(Cow::into_owned)
}

fn attr(element: &Element, name: &str) -> Option<String> {
    element.attributes.get(name).cloned()
}

/// First WOEID of a placefinder lookup result.
pub fn woeid(root: &Element) -> Option<String> {
    text(root, &[rss("results"), rss("Result"), rss("woeid")])
}

/// Channel permalink of a weather feed.
pub fn permalink(root: &Element) -> Option<String> {
    text(root, &[CHANNEL, rss("link")])
}

pub fn is_city_not_found(root: &Element) -> bool {
    text(root, &[CHANNEL, ITEM, rss("title")]).as_deref() == Some(CITY_NOT_FOUND)
}

/// Normalize a weather feed document.
///
/// Returns `None` when the feed reports that the city was not found.
pub fn weather_report(
    root: &Element,
    units: UnitSystem,
    endpoints: &Endpoints,
) -> Option<WeatherReport> {
    if is_city_not_found(root) {
        return None;
    }

    let channel_text = |name: &'static str| text(root, &[CHANNEL, rss(name)]);

    let mut condition = find(root, &[CHANNEL, ITEM, yweather("condition")]).map(condition);
    if let Some(condition) = condition.as_mut() {
        condition.image = condition.code.as_deref().map(|code| endpoints.condition_image_url(code));
    }

    let mut atmosphere = find(root, &[CHANNEL, yweather("atmosphere")]).map(atmosphere);
    if let Some(atmosphere) = atmosphere.as_mut() {
        atmosphere.state = atmosphere.rising.as_deref().and_then(PressureState::from_code);
    }

    let mut wind = find(root, &[CHANNEL, yweather("wind")]).map(wind);
    if let Some(wind) = wind.as_mut() {
        wind.compass = wind.direction.as_deref().and_then(degrees_to_direction);
    }

    Some(WeatherReport {
        title: channel_text("title"),
        link: channel_text("link"),
        language: channel_text("language"),
        description: channel_text("description"),
        last_build_date: channel_text("lastBuildDate"),
        ttl: channel_text("ttl"),
        logo: text(root, &[CHANNEL, rss("image"), rss("url")]),
        guid: text(root, &[CHANNEL, ITEM, rss("guid")]),
        units: units.units(),
        location: find(root, &[CHANNEL, yweather("location")]).map(location),
        wind,
        atmosphere,
        astronomy: find(root, &[CHANNEL, yweather("astronomy")]).map(astronomy),
        condition,
        geo: geo_data(root),
        forecast: forecast(root),
    })
}

fn location(e: &Element) -> LocationData {
    LocationData {
        city: attr(e, "city"),
        region: attr(e, "region"),
        country: attr(e, "country"),
    }
}

fn wind(e: &Element) -> WindData {
    WindData {
        chill: attr(e, "chill"),
        direction: attr(e, "direction"),
        speed: attr(e, "speed"),
        compass: None,
    }
}

fn atmosphere(e: &Element) -> AtmosphereData {
    AtmosphereData {
        humidity: attr(e, "humidity"),
        visibility: attr(e, "visibility"),
        pressure: attr(e, "pressure"),
        rising: attr(e, "rising"),
        state: None,
    }
}

fn astronomy(e: &Element) -> AstronomyData {
    AstronomyData { sunrise: attr(e, "sunrise"), sunset: attr(e, "sunset") }
}

fn condition(e: &Element) -> ConditionData {
    ConditionData {
        code: attr(e, "code"),
        temp: attr(e, "temp"),
        text: attr(e, "text"),
        date: attr(e, "date"),
        image: None,
    }
}

fn forecast_day(e: &Element) -> ForecastDay {
    ForecastDay {
        day: attr(e, "day"),
        date: attr(e, "date"),
        low: attr(e, "low"),
        high: attr(e, "high"),
        text: attr(e, "text"),
        code: attr(e, "code"),
    }
}

/// Forecast entries of the feed item in document order.
fn forecast(root: &Element) -> Option<Vec<ForecastDay>> {
    let item = find(root, &[CHANNEL, ITEM])?;
    let tag = yweather("forecast");

    Some(child_elements(item).filter(|e| tag.matches(e)).map(forecast_day).collect())
}

/// Coordinates are only reported when both are present.
fn geo_data(root: &Element) -> Option<GeoData> {
    let lat = text(root, &[CHANNEL, ITEM, geo("lat")])?;
    let long = text(root, &[CHANNEL, ITEM, geo("long")])?;

    Some(GeoData { lat, long })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::CompassPoint;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).expect("test XML should parse")
    }

    fn feed(channel: &str) -> Element {
        parse(&format!(
            r#"<rss version="2.0" xmlns:yweather="{WEATHER_NS}" xmlns:geo="{GEO_NS}"><channel>{channel}</channel></rss>"#
        ))
    }

    fn report(root: &Element) -> WeatherReport {
        weather_report(root, UnitSystem::Imperial, &Endpoints::default()).expect("report")
    }

    #[test]
    fn empty_channel_degrades_to_absence() {
        let report = report(&feed(""));

        assert_eq!(report.title, None);
        assert_eq!(report.ttl, None);
        assert_eq!(report.wind, None);
        assert_eq!(report.condition, None);
        assert_eq!(report.geo, None);
        assert_eq!(report.forecast, None);
        assert_eq!(report.units, UnitSystem::Imperial.units());
    }

    #[test]
    fn item_without_forecasts_gives_empty_list() {
        let report = report(&feed("<item><title>Conditions</title></item>"));
        assert_eq!(report.forecast, Some(Vec::new()));
    }

    #[test]
    fn city_not_found_sentinel() {
        let root = feed("<item><title>City not found</title></item>");
        assert!(is_city_not_found(&root));
        assert_eq!(weather_report(&root, UnitSystem::Metric, &Endpoints::default()), None);
    }

    #[test]
    fn unqualified_vendor_elements_are_ignored() {
        let report = report(&feed(r#"<wind chill="1" direction="90" speed="2"/>"#));
        assert_eq!(report.wind, None);
    }

    #[test]
    fn wind_compass_and_missing_attributes() {
        let report = report(&feed(r#"<yweather:wind direction="95"/>"#));
        let wind = report.wind.expect("wind");

        assert_eq!(wind.direction.as_deref(), Some("95"));
        assert_eq!(wind.compass, Some(CompassPoint::E));
        assert_eq!(wind.chill, None);
        assert_eq!(wind.speed, None);
    }

    #[test]
    fn unparseable_wind_direction_has_no_compass() {
        let report = report(&feed(r#"<yweather:wind direction="calm" speed="0"/>"#));
        let wind = report.wind.expect("wind");
        assert_eq!(wind.compass, None);
        assert_eq!(wind.speed.as_deref(), Some("0"));
    }

    #[test]
    fn unknown_rising_code_has_no_state() {
        let report = report(&feed(r#"<yweather:atmosphere humidity="40" rising="7"/>"#));
        let atmosphere = report.atmosphere.expect("atmosphere");
        assert_eq!(atmosphere.rising.as_deref(), Some("7"));
        assert_eq!(atmosphere.state, None);
    }

    #[test]
    fn condition_without_code_has_no_image() {
        let report = report(&feed(r#"<item><yweather:condition text="Fair" temp="45"/></item>"#));
        let condition = report.condition.expect("condition");
        assert_eq!(condition.text.as_deref(), Some("Fair"));
        assert_eq!(condition.image, None);
    }

    #[test]
    fn condition_image_uses_configured_base() {
        let endpoints = Endpoints {
            condition_image: "http://images.test".to_string(),
            ..Endpoints::default()
        };
        let root = feed(r#"<item><yweather:condition code="26"/></item>"#);
        let report = weather_report(&root, UnitSystem::Metric, &endpoints).expect("report");

        let condition = report.condition.expect("condition");
        assert_eq!(condition.image.as_deref(), Some("http://images.test/26.gif"));
    }

    #[test]
    fn partial_geo_is_dropped() {
        let report = report(&feed("<item><geo:lat>35.79</geo:lat></item>"));
        assert_eq!(report.geo, None);
    }

    #[test]
    fn woeid_from_lookup_result() {
        let root = parse("<query><results><Result><woeid>12767391</woeid></Result></results></query>");
        assert_eq!(woeid(&root).as_deref(), Some("12767391"));

        let root = parse("<query><results/></query>");
        assert_eq!(woeid(&root), None);
    }
}
