use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error("Failed to parse weather JSON for {start} to {end}")]
    JsonParse {
        start: NaiveDate,
        end: NaiveDate,
        #[source]
        source: serde_json::Error,
    },

    #[error("Weather API returned an error for {start} to {end}: {message}")]
    Api {
        start: NaiveDate,
        end: NaiveDate,
        message: String,
    },

    #[error("Weather response for {start} to {end} has no 'weather' list")]
    MissingWeather { start: NaiveDate, end: NaiveDate },

    #[error("No hourly sample found for {0}")]
    MissingHourlySample(NaiveDate),
}
