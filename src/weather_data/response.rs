//! Shape of the past-weather JSON body.
//!
//! Numbers are sent as strings (`"tempC": "12"`), plain numbers are accepted too.

use crate::types::page_range::PageRange;
use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug, Deserialize)]
struct PastWeatherResponse {
    data: PastWeatherData,
}

#[derive(Debug, Deserialize)]
struct PastWeatherData {
    weather: Option<Vec<WeatherEntry>>,
    #[serde(default)]
    error: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    msg: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub hourly: Vec<HourlySample>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlySample {
    #[serde(rename = "tempC", deserialize_with = "deserialize_number_from_string")]
    pub temp_c: f64,
    #[serde(rename = "FeelsLikeC", deserialize_with = "deserialize_number_from_string")]
    pub feels_like_c: f64,
    #[serde(rename = "windspeedKmph", deserialize_with = "deserialize_number_from_string")]
    pub windspeed_kmph: f64,
    #[serde(rename = "winddirDegree", deserialize_with = "deserialize_number_from_string")]
    pub winddir_degree: f64,
    #[serde(rename = "precipMM", deserialize_with = "deserialize_number_from_string")]
    pub precip_mm: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub humidity: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub pressure: f64,
}

/// Parses one page worth of JSON into its day entries.
///
/// An error list inside the body is reported as [`WeatherDataError::Api`], even
/// when the HTTP status was successful.
pub fn parse_page(body: &str, page: PageRange) -> Result<Vec<WeatherEntry>, WeatherDataError> {
    let response: PastWeatherResponse =
        serde_json::from_str(body).map_err(|source| WeatherDataError::JsonParse {
            start: page.start,
            end: page.end,
            source,
        })?;

    if !response.data.error.is_empty() {
        let message = response
            .data
            .error
            .into_iter()
            .map(|e| e.msg)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(WeatherDataError::Api {
            start: page.start,
            end: page.end,
            message,
        });
    }

    response.data.weather.ok_or(WeatherDataError::MissingWeather {
        start: page.start,
        end: page.end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageRange {
        PageRange {
            start: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
        }
    }

    const BODY: &str = r#"{
        "data": {
            "request": [{"type": "LatLon", "query": "Lat 40.75 and Lon -74.00"}],
            "weather": [
                {
                    "date": "2020-03-01",
                    "maxtempC": "9",
                    "hourly": [
                        {"time": "0", "tempC": "4", "FeelsLikeC": "1", "windspeedKmph": "18",
                         "winddirDegree": "291", "precipMM": "0.0", "humidity": "52", "pressure": "1021"},
                        {"time": "1200", "tempC": "8", "FeelsLikeC": "6", "windspeedKmph": "22",
                         "winddirDegree": "300", "precipMM": "0.1", "humidity": "40", "pressure": "1019"}
                    ]
                },
                {
                    "date": "2020-03-02",
                    "hourly": [
                        {"tempC": 10, "FeelsLikeC": 9.5, "windspeedKmph": 7,
                         "winddirDegree": 180, "precipMM": 1.2, "humidity": 80, "pressure": 1008}
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_page_reads_string_and_plain_numbers() -> Result<(), WeatherDataError> {
        let entries = parse_page(BODY, page())?;
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        assert_eq!(first.hourly.len(), 2);
        assert_eq!(first.hourly[0].temp_c, 4.0);
        assert_eq!(first.hourly[0].windspeed_kmph, 18.0);
        assert_eq!(first.hourly[0].winddir_degree, 291.0);
        assert_eq!(first.hourly[0].humidity, 52.0);

        let second = &entries[1];
        assert_eq!(second.hourly[0].feels_like_c, 9.5);
        assert_eq!(second.hourly[0].precip_mm, 1.2);
        Ok(())
    }

    #[test]
    fn test_parse_page_rejects_malformed_json() {
        let result = parse_page(r#"{"data": {"weather": [ {"date": "2020-03-01""#, page());
        assert!(matches!(result, Err(WeatherDataError::JsonParse { .. })));
    }

    #[test]
    fn test_parse_page_rejects_non_numeric_value() {
        let body = r#"{"data": {"weather": [{"date": "2020-03-01", "hourly": [
            {"tempC": "warm", "FeelsLikeC": "1", "windspeedKmph": "18",
             "winddirDegree": "291", "precipMM": "0.0", "humidity": "52", "pressure": "1021"}
        ]}]}}"#;
        assert!(matches!(
            parse_page(body, page()),
            Err(WeatherDataError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_parse_page_reports_api_error() {
        let body = r#"{"data": {"error": [{"msg": "API key has reached calls per day allowed limit."}]}}"#;
        match parse_page(body, page()) {
            Err(WeatherDataError::Api { message, start, .. }) => {
                assert_eq!(message, "API key has reached calls per day allowed limit.");
                assert_eq!(start, page().start);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_page_without_weather_list() {
        assert!(matches!(
            parse_page(r#"{"data": {}}"#, page()),
            Err(WeatherDataError::MissingWeather { .. })
        ));
    }
}
