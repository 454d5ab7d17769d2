mod classify;
mod error;
mod expectations;
mod frame_ext;
mod settings;
mod types;
mod utils;
mod weather_data;
mod world_weather;

#[cfg(feature = "chart")]
mod chart;

pub use error::UsabilityError;
pub use world_weather::*;

pub use classify::classify;
pub use expectations::{monthly_expectations, MonthlyAggregate, MonthlyExpectations};
pub use frame_ext::UsabilityFrameExt;
pub use settings::{ApiSettings, ChartSettings, Settings, SiteSettings};

pub use types::criterion::UsabilityCriterion;
pub use types::observation::{observations_to_frame, WeatherObservation};
pub use types::page_range::{last_day_of_month, MonthPages, PageRange};

pub use weather_data::error::WeatherDataError;
pub use weather_data::page_source::{HttpPageSource, PageSource, WORLD_WEATHER_ONLINE_API};
pub use weather_data::response::{HourlySample, WeatherEntry};

#[cfg(feature = "chart")]
pub use chart::render_chart;
