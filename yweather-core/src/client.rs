use log::{debug, warn};

use crate::{
    config::Config,
    endpoints::Endpoints,
    fetcher::{FetchError, HttpFetcher, XmlFetcher},
    location::{LocationId, lid_from_permalink},
    model::{UnitSystem, WeatherReport},
    normalize,
};

/// Interface to the Yahoo! Weather RSS feed.
///
/// Each operation performs exactly one fetch. `Err` carries transport and parse
/// failures from the fetcher; `Ok(None)` means the location could not be resolved.
#[derive(Debug)]
pub struct Client {
    fetcher: Box<dyn XmlFetcher>,
    endpoints: Endpoints,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_fetcher(HttpFetcher::new())
    }

    pub fn with_fetcher(fetcher: impl XmlFetcher + 'static) -> Self {
        Self { fetcher: Box::new(fetcher), endpoints: Endpoints::default() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new().with_endpoints(config.endpoints.clone())
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the WOEID of a location such as `"23454"` or `"Berlin, Germany"`.
    pub async fn fetch_woeid(&self, location: &str) -> Result<Option<String>, FetchError> {
        let root = self.fetcher.fetch(&self.endpoints.woeid_url(location)).await?;

        let woeid = normalize::woeid(&root);
        if woeid.is_none() {
            debug!("no WOEID found for location {location:?}");
        }

        Ok(woeid)
    }

    /// Fetch the LID of a WOEID, which unlocks the five-day feed.
    ///
    /// The LID is read from the feed permalink; the units of the request do not matter.
    pub async fn fetch_lid(&self, woeid: &str) -> Result<Option<String>, FetchError> {
        let id = LocationId::Woeid(woeid.to_string());
        let root = self.fetcher.fetch(&self.endpoints.weather_url(&id, UnitSystem::Imperial)).await?;

        let Some(link) = normalize::permalink(&root) else {
            debug!("feed for WOEID {woeid} has no permalink");
            return Ok(None);
        };

        let lid = lid_from_permalink(&link);
        if lid.is_none() {
            warn!("could not extract LID from permalink {link:?}");
        }

        Ok(lid)
    }

    /// Fetch current conditions and forecast for a WOEID or LID.
    ///
    /// A LID (first character alphabetic) selects the five-day feed.
    pub async fn fetch_weather(
        &self,
        code: &str,
        metric: bool,
    ) -> Result<Option<WeatherReport>, FetchError> {
        let id: LocationId = match code.parse() {
            Ok(id) => id,
            Err(err) => {
                debug!("not fetching weather: {err}");
                return Ok(None);
            }
        };

        self.fetch_weather_for(&id, UnitSystem::from_metric_flag(metric)).await
    }

    pub async fn fetch_weather_for(
        &self,
        id: &LocationId,
        units: UnitSystem,
    ) -> Result<Option<WeatherReport>, FetchError> {
        let root = self.fetcher.fetch(&self.endpoints.weather_url(id, units)).await?;

        let report = normalize::weather_report(&root, units, &self.endpoints);
        if report.is_none() {
            debug!("weather feed reports city not found for {id}");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use xmltree::Element;

    #[derive(Debug, Default)]
    struct RecordingFetcher {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl XmlFetcher for RecordingFetcher {
        async fn fetch(&self, url: &str) -> Result<Element, FetchError> {
            self.urls.lock().expect("lock").push(url.to_string());
            Ok(Element::parse("<rss><channel/></rss>".as_bytes())?)
        }
    }

    #[tokio::test]
    async fn empty_code_is_not_fetched() {
        let client = Client::with_fetcher(RecordingFetcher::default());
        let report = client.fetch_weather("", false).await.expect("no fetch error");
        assert_eq!(report, None);
    }

    #[test]
    fn from_config_uses_configured_endpoints() {
        let mut cfg = Config::default();
        cfg.endpoints.weather = "http://localhost:8080/forecastrss".to_string();

        let client = Client::from_config(&cfg);
        assert_eq!(client.endpoints().weather, "http://localhost:8080/forecastrss");
    }

    #[tokio::test]
    async fn lid_lookup_without_permalink_is_none() {
        let client = Client::with_fetcher(RecordingFetcher::default());
        let lid = client.fetch_lid("2478307").await.expect("no fetch error");
        assert_eq!(lid, None);
    }
}
