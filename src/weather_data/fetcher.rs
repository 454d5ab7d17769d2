use crate::types::observation::WeatherObservation;
use crate::types::page_range::MonthPages;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::page_source::PageSource;
use crate::world_weather::LatLon;
use chrono::NaiveDate;
use log::{info, warn};

/// Walks a date range month by month and collects one observation per day.
pub struct WeatherFetcher<S> {
    source: S,
}

impl<S: PageSource> WeatherFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches every month page in `[since, until]`, in order.
    ///
    /// The first failing page aborts the whole fetch, nothing is retried.
    /// The result is sorted by date. A repeated date keeps the entry fetched first.
    pub fn observations(
        &self,
        location: LatLon,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<WeatherObservation>, WeatherDataError> {
        let mut observations = Vec::new();
        for page in MonthPages::new(since, until) {
            let entries = self.source.fetch_page(location, page)?;
            info!("Fetched {} days for {}", entries.len(), page);
            for entry in entries {
                observations.push(WeatherObservation::try_from(entry)?);
            }
        }

        observations.sort_by_key(|o| o.date);
        let fetched = observations.len();
        observations.dedup_by_key(|o| o.date);
        if observations.len() != fetched {
            warn!(
                "Dropped {} duplicate days between {} and {}",
                fetched - observations.len(),
                since,
                until
            );
        }
        Ok(observations)
    }
}
