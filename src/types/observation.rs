use crate::weather_data::error::WeatherDataError;
use crate::weather_data::response::WeatherEntry;
use chrono::NaiveDate;
use polars::prelude::*;

const KMPH_TO_MS: f64 = 1000.0 / 3600.0;

/// One day of weather, taken from the first hourly sample of that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    /// °C
    pub temp: f64,
    /// °C
    pub feelslike: f64,
    /// m/s
    pub windspeed: f64,
    /// Degrees from north the wind blows from.
    pub winddir: f64,
    /// mm
    pub precipitation: f64,
    /// Fraction in `[0, 1]`.
    pub humidity: f64,
    /// hPa
    pub pressure: f64,
}

impl TryFrom<WeatherEntry> for WeatherObservation {
    type Error = WeatherDataError;

    fn try_from(entry: WeatherEntry) -> Result<Self, Self::Error> {
        let sample = entry
            .hourly
            .first()
            .ok_or(WeatherDataError::MissingHourlySample(entry.date))?;
        Ok(Self {
            date: entry.date,
            temp: sample.temp_c,
            feelslike: sample.feels_like_c,
            windspeed: sample.windspeed_kmph * KMPH_TO_MS,
            winddir: sample.winddir_degree,
            precipitation: sample.precip_mm,
            humidity: sample.humidity / 100.0,
            pressure: sample.pressure,
        })
    }
}

/// Builds the observation table, one row per observation in the given order.
pub fn observations_to_frame(observations: &[WeatherObservation]) -> PolarsResult<DataFrame> {
    let field =
        |f: fn(&WeatherObservation) -> f64| observations.iter().map(f).collect::<Vec<_>>();
    df!(
        "date" => observations.iter().map(|o| o.date).collect::<Vec<_>>(),
        "temp" => field(|o| o.temp),
        "feelslike" => field(|o| o.feelslike),
        "windspeed" => field(|o| o.windspeed),
        "winddir" => field(|o| o.winddir),
        "precipitation" => field(|o| o.precipitation),
        "humidity" => field(|o| o.humidity),
        "pressure" => field(|o| o.pressure),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather_data::response::HourlySample;

    fn sample(windspeed_kmph: f64, humidity: f64) -> HourlySample {
        HourlySample {
            temp_c: 21.0,
            feels_like_c: 20.0,
            windspeed_kmph,
            winddir_degree: 250.0,
            precip_mm: 0.1,
            humidity,
            pressure: 1012.0,
        }
    }

    #[test]
    fn test_entry_converts_units_from_first_sample() -> Result<(), WeatherDataError> {
        let date = NaiveDate::from_ymd_opt(2022, 5, 3).unwrap();
        let entry = WeatherEntry {
            date,
            hourly: vec![sample(36.0, 65.0), sample(0.0, 10.0)],
        };

        let observation = WeatherObservation::try_from(entry)?;
        assert_eq!(observation.date, date);
        assert!((observation.windspeed - 10.0).abs() < 1e-9);
        assert!((observation.humidity - 0.65).abs() < 1e-9);
        assert_eq!(observation.temp, 21.0);
        assert_eq!(observation.feelslike, 20.0);
        assert_eq!(observation.winddir, 250.0);
        assert_eq!(observation.precipitation, 0.1);
        assert_eq!(observation.pressure, 1012.0);
        Ok(())
    }

    #[test]
    fn test_entry_without_samples_fails() {
        let date = NaiveDate::from_ymd_opt(2022, 5, 3).unwrap();
        let entry = WeatherEntry {
            date,
            hourly: vec![],
        };
        match WeatherObservation::try_from(entry) {
            Err(WeatherDataError::MissingHourlySample(d)) => assert_eq!(d, date),
            other => panic!("expected MissingHourlySample, got {:?}", other),
        }
    }

    #[test]
    fn test_observations_to_frame_schema() -> Result<(), Box<dyn std::error::Error>> {
        let observations: Vec<WeatherObservation> = (1..=3)
            .map(|day| WeatherObservation {
                date: NaiveDate::from_ymd_opt(2021, 2, day).unwrap(),
                temp: day as f64,
                feelslike: 0.0,
                windspeed: 0.0,
                winddir: 0.0,
                precipitation: 0.0,
                humidity: 0.5,
                pressure: 1000.0,
            })
            .collect();

        let frame = observations_to_frame(&observations)?;
        assert_eq!(frame.shape(), (3, 8));
        let names: Vec<&str> = frame
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "date",
                "temp",
                "feelslike",
                "windspeed",
                "winddir",
                "precipitation",
                "humidity",
                "pressure"
            ]
        );
        assert_eq!(frame.column("date")?.dtype(), &DataType::Date);
        assert_eq!(frame.column("temp")?.f64()?.get(2), Some(3.0));
        Ok(())
    }

    #[test]
    fn test_empty_observations_give_empty_frame() -> Result<(), PolarsError> {
        let frame = observations_to_frame(&[])?;
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), 8);
        Ok(())
    }
}
