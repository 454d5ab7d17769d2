use crate::settings::ApiSettings;
use crate::types::page_range::PageRange;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::response::{parse_page, WeatherEntry};
use crate::world_weather::LatLon;
use log::{debug, warn};
use reqwest::blocking::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

pub const WORLD_WEATHER_ONLINE_API: &str =
    "https://api.worldweatheronline.com/premium/v1/past-weather.ashx";

/// Number of samples per day requested from the API (`tp`). 12 means one
/// sample every 12 hours, so the first sample is the night one.
const TIME_RESOLUTION_HOURS: u8 = 12;

/// Provides the day entries of a single month page.
///
/// The fetch loop only talks to this trait, so the transport can be swapped
/// out without touching pagination.
pub trait PageSource {
    fn fetch_page(
        &self,
        location: LatLon,
        page: PageRange,
    ) -> Result<Vec<WeatherEntry>, WeatherDataError>;
}

/// Blocking HTTP client for the World Weather Online past-weather endpoint.
pub struct HttpPageSource {
    client: Client,
    endpoint: String,
    api_key: Secret<String>,
}

impl HttpPageSource {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherDataError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(WeatherDataError::ClientBuild)?;
        Ok(Self::with_client(client, endpoint, api_key))
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, WeatherDataError> {
        Self::new(
            settings.endpoint.clone(),
            settings.key.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        api_key: Secret<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    fn query(&self, location: LatLon, page: PageRange) -> Vec<(&'static str, String)> {
        vec![
            ("q", format!("{},{}", location.0, location.1)),
            ("key", self.api_key.expose_secret().clone()),
            ("date", page.start.to_string()),
            ("enddate", page.end.to_string()),
            ("format", "json".to_string()),
            ("tp", TIME_RESOLUTION_HOURS.to_string()),
            ("extra", "isDayTime".to_string()),
        ]
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(
        &self,
        location: LatLon,
        page: PageRange,
    ) -> Result<Vec<WeatherEntry>, WeatherDataError> {
        debug!("Requesting {} for {:?} from {}", page, location, self.endpoint);

        // reqwest errors carry the full URL, which includes the API key.
        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query(location, page))
            .send()
            .map_err(|e| {
                WeatherDataError::NetworkRequest(self.endpoint.clone(), e.without_url())
            })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                warn!("HTTP error for {} ({}): {}", self.endpoint, page, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url: self.endpoint.clone(),
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(self.endpoint.clone(), e)
                });
            }
        };

        let body = response.text().map_err(|e| {
            WeatherDataError::ResponseBody(self.endpoint.clone(), e.without_url())
        })?;
        parse_page(&body, page)
    }
}
