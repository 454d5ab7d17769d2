use crate::weather_data::error::WeatherDataError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsabilityError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error("Required column '{0}' not found in DataFrame")]
    MissingColumn(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Unexpected data state: {0}")]
    UnexpectedData(String),

    #[error("Failed to load settings")]
    Settings(#[from] config::ConfigError),

    #[error("Failed to render chart to '{path}': {message}")]
    Chart { path: String, message: String },
}
