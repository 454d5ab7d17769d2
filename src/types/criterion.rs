//! Threshold based classification of a single day's weather.

use crate::types::observation::WeatherObservation;
use bon::Builder;
use serde::Deserialize;

/// The thresholds a day has to meet to be considered usable.
///
/// All ranges are inclusive. Wind is not compared directly: only the component
/// of the wind blowing against the site's facing direction is limited, see
/// [`UsabilityCriterion::wind_projection`].
///
/// # Examples
///
/// ```
/// use weather_usability::UsabilityCriterion;
///
/// let criterion = UsabilityCriterion::builder()
///     .facing(90.0)
///     .max_wind_projection(5.0)
///     .min_temp(15.0)
///     .max_temp(28.0)
///     .max_precipitation(0.5)
///     .min_humidity(0.2)
///     .max_humidity(0.8)
///     .build();
///
/// assert!(criterion.is_usable(20.0, 0.5, 0.0, 3.0, 270.0));
/// assert!(!criterion.is_usable(30.0, 0.5, 0.0, 3.0, 270.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Builder)]
pub struct UsabilityCriterion {
    /// Direction the site faces, in degrees from north.
    pub facing: f64,
    /// Maximum wind projection onto the facing direction, in m/s.
    pub max_wind_projection: f64,
    /// Minimum temperature in °C.
    pub min_temp: f64,
    /// Maximum temperature in °C.
    pub max_temp: f64,
    /// Maximum precipitation in mm.
    pub max_precipitation: f64,
    /// Minimum relative humidity as a fraction in `[0, 1]`.
    pub min_humidity: f64,
    /// Maximum relative humidity as a fraction in `[0, 1]`.
    pub max_humidity: f64,
}

impl UsabilityCriterion {
    /// Thresholds for an outdoor space at Hudson Yards, New York.
    pub fn hudson_yards() -> Self {
        Self {
            facing: -19.0,
            max_wind_projection: 6.0,
            min_temp: 18.3333,
            max_temp: 29.4444,
            max_precipitation: 0.254,
            min_humidity: 0.2,
            max_humidity: 0.8,
        }
    }

    /// Component of the wind along the facing direction, in the unit of `windspeed`.
    ///
    /// `winddir` is the direction the wind comes from, in degrees from north.
    /// Wind coming from straight behind the site (`facing + 180°`) projects
    /// fully, wind from the side projects to roughly zero.
    pub fn wind_projection(&self, windspeed: f64, winddir: f64) -> f64 {
        windspeed * (winddir - self.facing - 180.0).to_radians().cos()
    }

    /// Returns `true` iff every threshold is met.
    ///
    /// # Arguments
    ///
    /// * `temp` - Temperature in °C.
    /// * `humidity` - Relative humidity as a fraction in `[0, 1]`.
    /// * `precipitation` - Precipitation in mm.
    /// * `windspeed` - Wind speed in m/s.
    /// * `winddir` - Wind direction in degrees from north.
    pub fn is_usable(
        &self,
        temp: f64,
        humidity: f64,
        precipitation: f64,
        windspeed: f64,
        winddir: f64,
    ) -> bool {
        (self.min_temp..=self.max_temp).contains(&temp)
            && (self.min_humidity..=self.max_humidity).contains(&humidity)
            && self.wind_projection(windspeed, winddir) <= self.max_wind_projection
            && precipitation <= self.max_precipitation
    }

    /// [`UsabilityCriterion::is_usable`] applied to one observation.
    pub fn is_usable_observation(&self, observation: &WeatherObservation) -> bool {
        self.is_usable(
            observation.temp,
            observation.humidity,
            observation.precipitation,
            observation.windspeed,
            observation.winddir,
        )
    }
}
