//! This module provides the main entry point of the crate. It fetches past weather
//! for a location from World Weather Online and classifies every day against a
//! [`UsabilityCriterion`].

use crate::error::UsabilityError;
use crate::expectations::MonthlyExpectations;
use crate::frame_ext::UsabilityFrameExt;
use crate::settings::ApiSettings;
use crate::types::criterion::UsabilityCriterion;
use crate::types::observation::observations_to_frame;
use crate::weather_data::fetcher::WeatherFetcher;
use crate::weather_data::page_source::{HttpPageSource, PageSource};
use bon::bon;
use chrono::{Local, NaiveDate, TimeDelta};
use log::info;
use polars::prelude::DataFrame;

/// How far back the fetch starts when no start date is given.
pub const DEFAULT_LOOKBACK_WEEKS: i64 = 52 * 5;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use weather_usability::LatLon;
///
/// let hudson_yards = LatLon(40.754380, -74.000610);
/// assert_eq!(hudson_yards.0, 40.754380); // Latitude
/// assert_eq!(hudson_yards.1, -74.000610); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The daily and monthly result of a usability run.
#[derive(Debug, Clone)]
pub struct UsabilityReport {
    /// One row per day with the `month`, `weekday` and `isusable` columns added.
    pub daily: DataFrame,
    /// Averages per calendar month.
    pub monthly: MonthlyExpectations,
}

/// The client for fetching past weather and computing usability.
///
/// Requests are blocking and sequential: one request per calendar month in the
/// requested range. The first failing request aborts the run; there is no retry,
/// backoff or rate limiting.
///
/// # Examples
///
/// ```no_run
/// # use weather_usability::{Settings, UsabilityError, WorldWeather};
/// # fn run() -> Result<(), UsabilityError> {
/// let settings = Settings::load(None)?;
/// let client = WorldWeather::new(&settings.api)?;
///
/// let report = client
///     .usability()
///     .location(settings.site.location())
///     .criterion(&settings.criterion)
///     .call()?;
///
/// println!("{}", report.monthly);
/// # Ok(())
/// # }
/// ```
pub struct WorldWeather<S = HttpPageSource> {
    fetcher: WeatherFetcher<S>,
}

impl WorldWeather<HttpPageSource> {
    /// Creates a client talking to the configured endpoint with the configured key.
    ///
    /// # Errors
    ///
    /// Returns [`UsabilityError::WeatherData`] if the HTTP client cannot be built.
    pub fn new(settings: &ApiSettings) -> Result<Self, UsabilityError> {
        Ok(Self::with_source(HttpPageSource::from_settings(settings)?))
    }
}

#[bon]
impl<S: PageSource> WorldWeather<S> {
    /// Creates a client that reads its pages from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            fetcher: WeatherFetcher::new(source),
        }
    }

    pub fn source(&self) -> &S {
        self.fetcher.source()
    }

    /// Fetches one observation per day for a location.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The point to fetch weather for.
    /// * `.since(NaiveDate)`: Optional. First day to fetch. Defaults to
    ///   [`DEFAULT_LOOKBACK_WEEKS`] weeks before `until`.
    /// * `.until(NaiveDate)`: Optional. Last day to fetch. Defaults to today.
    ///
    /// # Returns
    ///
    /// A `DataFrame` with columns `date`, `temp`, `feelslike`, `windspeed`,
    /// `winddir`, `precipitation`, `humidity` and `pressure`, sorted by unique date.
    ///
    /// # Errors
    ///
    /// Returns [`UsabilityError::WeatherData`] on the first request that fails,
    /// returns a non-2xx status, or has a body that cannot be parsed.
    #[builder]
    pub fn observations(
        &self,
        location: LatLon,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Result<DataFrame, UsabilityError> {
        let until = until.unwrap_or_else(|| Local::now().date_naive());
        let since = since.unwrap_or_else(|| default_since(until));
        info!("Fetching weather for {:?} from {} to {}", location, since, until);

        let observations = self.fetcher.observations(location, since, until)?;
        Ok(observations_to_frame(&observations)?)
    }

    /// Fetches observations and classifies them.
    ///
    /// Takes the same arguments as [`WorldWeather::observations`] plus
    /// `.criterion(&UsabilityCriterion)` (**required**).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use weather_usability::{LatLon, Settings, UsabilityCriterion, UsabilityError, WorldWeather};
    /// # use chrono::NaiveDate;
    /// # fn run() -> Result<(), UsabilityError> {
    /// # let settings = Settings::load(None)?;
    /// let client = WorldWeather::new(&settings.api)?;
    /// let report = client
    ///     .usability()
    ///     .location(LatLon(40.754380, -74.000610))
    ///     .criterion(&UsabilityCriterion::hudson_yards())
    ///     .since(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
    ///     .until(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap())
    ///     .call()?;
    ///
    /// for month in report.monthly.rows()? {
    ///     println!("{}: {:.0}% usable", month.month.name(), month.usable_fraction * 100.0);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn usability(
        &self,
        location: LatLon,
        criterion: &UsabilityCriterion,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Result<UsabilityReport, UsabilityError> {
        let observations = self
            .observations()
            .location(location)
            .maybe_since(since)
            .maybe_until(until)
            .call()?;

        let daily = observations.classify_usability(criterion)?;
        let monthly = daily.monthly_expectations()?;
        info!(
            "Classified {} days into {} months",
            daily.height(),
            monthly.len()
        );
        Ok(UsabilityReport { daily, monthly })
    }
}

fn default_since(until: NaiveDate) -> NaiveDate {
    until
        .checked_sub_signed(TimeDelta::weeks(DEFAULT_LOOKBACK_WEEKS))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::page_range::PageRange;
    use crate::weather_data::fetcher::tests::RecordingSource;
    use chrono::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_since_is_five_years_of_weeks() {
        assert_eq!(default_since(date(2025, 1, 1)), date(2020, 1, 8));
        assert_eq!(
            date(2025, 1, 1) - default_since(date(2025, 1, 1)),
            TimeDelta::days(7 * 52 * 5)
        );
    }

    #[test]
    fn test_observations_frame() -> Result<(), Box<dyn std::error::Error>> {
        let client = WorldWeather::with_source(RecordingSource::default());
        let frame = client
            .observations()
            .location(LatLon(40.75, -74.0))
            .since(date(2024, 2, 20))
            .until(date(2024, 3, 10))
            .call()?;

        // 2024 is a leap year.
        assert_eq!(frame.height(), 10 + 10);
        let wind = frame.column("windspeed")?.f64()?.get(0);
        assert!(wind.is_some_and(|w| (w - 1.0).abs() < 1e-9));
        let humidity = frame.column("humidity")?.f64()?.get(0);
        assert_eq!(humidity, Some(0.5));

        let pages = client.source().pages.borrow().clone();
        assert_eq!(
            pages,
            vec![
                PageRange {
                    start: date(2024, 2, 20),
                    end: date(2024, 2, 29)
                },
                PageRange {
                    start: date(2024, 3, 1),
                    end: date(2024, 3, 10)
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_usability_report() -> Result<(), Box<dyn std::error::Error>> {
        let client = WorldWeather::with_source(RecordingSource::default());
        let report = client
            .usability()
            .location(LatLon(40.75, -74.0))
            .criterion(&UsabilityCriterion::hudson_yards())
            .since(date(2023, 11, 15))
            .until(date(2024, 1, 15))
            .call()?;

        assert_eq!(report.daily.height(), 16 + 31 + 15);
        let months: Vec<Month> = report.monthly.rows()?.iter().map(|row| row.month).collect();
        assert_eq!(months, vec![Month::January, Month::November, Month::December]);
        // Stub days are 20 °C, 50 % humidity, dry and calm.
        assert!(report
            .monthly
            .rows()?
            .iter()
            .all(|row| (row.usable_fraction - 1.0).abs() < 1e-9));
        Ok(())
    }

    #[test]
    fn test_usability_with_strict_criterion() -> Result<(), Box<dyn std::error::Error>> {
        let client = WorldWeather::with_source(RecordingSource::default());
        let too_warm_for_stub = UsabilityCriterion {
            min_temp: 21.0,
            ..UsabilityCriterion::hudson_yards()
        };
        let report = client
            .usability()
            .location(LatLon(40.75, -74.0))
            .criterion(&too_warm_for_stub)
            .since(date(2023, 5, 1))
            .until(date(2023, 5, 31))
            .call()?;

        let rows = report.monthly.rows()?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].usable_fraction, 0.0);
        Ok(())
    }

    #[test]
    fn test_failing_page_fails_report() {
        let client = WorldWeather::with_source(RecordingSource {
            fail_on: Some(date(2023, 6, 1)),
            ..Default::default()
        });
        let result = client
            .usability()
            .location(LatLon(40.75, -74.0))
            .criterion(&UsabilityCriterion::hudson_yards())
            .since(date(2023, 5, 1))
            .until(date(2023, 7, 31))
            .call();
        assert!(matches!(result, Err(UsabilityError::WeatherData(_))));
    }
}
