//! Marks every observed day as usable or not.

use crate::error::UsabilityError;
use crate::types::criterion::UsabilityCriterion;
use crate::utils::{float_column, required_column};
use chrono::Datelike;
use polars::prelude::*;

/// Returns a copy of `observations` with `month`, `weekday` and `isusable` columns added.
///
/// * `month` - calendar month of `date`, `1..=12`.
/// * `weekday` - ISO weekday of `date`, Monday is `1`, Sunday is `7`.
/// * `isusable` - [`UsabilityCriterion::is_usable`] applied to the row.
///
/// Rows with a missing value in any input column get a null `isusable`.
///
/// # Errors
///
/// Returns [`UsabilityError::MissingColumn`] if `date`, `temp`, `humidity`,
/// `precipitation`, `windspeed` or `winddir` is absent.
pub fn classify(
    observations: &DataFrame,
    criterion: &UsabilityCriterion,
) -> Result<DataFrame, UsabilityError> {
    let dates = required_column(observations, "date")?
        .cast(&DataType::Date)?
        .date()?
        .clone();
    let temp = float_column(observations, "temp")?;
    let humidity = float_column(observations, "humidity")?;
    let precipitation = float_column(observations, "precipitation")?;
    let windspeed = float_column(observations, "windspeed")?;
    let winddir = float_column(observations, "winddir")?;

    let (months, weekdays): (Vec<Option<u32>>, Vec<Option<u32>>) = dates
        .as_date_iter()
        .map(|date| {
            (
                date.map(|d| d.month()),
                date.map(|d| d.weekday().number_from_monday()),
            )
        })
        .unzip();

    let usable: Vec<Option<bool>> = temp
        .into_iter()
        .zip(humidity.into_iter())
        .zip(precipitation.into_iter())
        .zip(windspeed.into_iter())
        .zip(winddir.into_iter())
        .map(|((((temp, humidity), precipitation), windspeed), winddir)| {
            Some(criterion.is_usable(temp?, humidity?, precipitation?, windspeed?, winddir?))
        })
        .collect();

    let mut classified = observations.clone();
    classified.with_column(Column::new("month".into(), months))?;
    classified.with_column(Column::new("weekday".into(), weekdays))?;
    classified.with_column(Column::new("isusable".into(), usable))?;
    Ok(classified)
}
