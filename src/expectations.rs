//! Monthly averages of classified observations.

use crate::error::UsabilityError;
use crate::utils::{float_column, is_averageable, month_name, required_column};
use chrono::Month;
use polars::prelude::*;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Averages of one calendar month, taken over every observed day in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAggregate {
    pub month: Month,
    pub temp: f64,
    pub feelslike: f64,
    pub windspeed: f64,
    pub winddir: f64,
    pub precipitation: f64,
    pub humidity: f64,
    pub pressure: f64,
    /// Share of days that were usable, in `[0, 1]`.
    pub usable_fraction: f64,
}

/// The expected weather per calendar month.
///
/// One row per month present in the input, ordered January to December. The
/// `month` column holds the month name, every other column is the mean of the
/// corresponding daily column. `isusable` therefore becomes the fraction of
/// usable days.
#[derive(Debug, Clone)]
pub struct MonthlyExpectations {
    pub frame: DataFrame,
}

impl MonthlyExpectations {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Number of months in the table.
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Collects the table into typed rows.
    ///
    /// # Errors
    ///
    /// Returns [`UsabilityError::MissingColumn`] if one of the observation columns
    /// was not part of the averaged table, and [`UsabilityError::UnexpectedData`]
    /// if a month label is not a month name.
    pub fn rows(&self) -> Result<Vec<MonthlyAggregate>, UsabilityError> {
        let frame = &self.frame;
        let months = required_column(frame, "month")?.str()?.clone();
        let temp = float_column(frame, "temp")?;
        let feelslike = float_column(frame, "feelslike")?;
        let windspeed = float_column(frame, "windspeed")?;
        let winddir = float_column(frame, "winddir")?;
        let precipitation = float_column(frame, "precipitation")?;
        let humidity = float_column(frame, "humidity")?;
        let pressure = float_column(frame, "pressure")?;
        let usable = float_column(frame, "isusable")?;

        let value = |ca: &Float64Chunked, idx: usize| ca.get(idx).unwrap_or(f64::NAN);

        (0..frame.height())
            .map(|idx| {
                let label = months.get(idx).unwrap_or_default();
                let month = label.parse::<Month>().map_err(|_| {
                    UsabilityError::UnexpectedData(format!("'{}' is not a month name", label))
                })?;
                Ok(MonthlyAggregate {
                    month,
                    temp: value(&temp, idx),
                    feelslike: value(&feelslike, idx),
                    windspeed: value(&windspeed, idx),
                    winddir: value(&winddir, idx),
                    precipitation: value(&precipitation, idx),
                    humidity: value(&humidity, idx),
                    pressure: value(&pressure, idx),
                    usable_fraction: value(&usable, idx),
                })
            })
            .collect()
    }
}

impl Display for MonthlyExpectations {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame)
    }
}

/// Groups classified observations by `month` and averages every numeric column.
///
/// Booleans are averaged as `0`/`1`, `weekday` is dropped and non numeric
/// columns such as `date` are left out. Only months that occur in the input
/// produce a row.
///
/// # Errors
///
/// Returns [`UsabilityError::MissingColumn`] if there is no `month` column.
pub fn monthly_expectations(
    classified: &DataFrame,
) -> Result<MonthlyExpectations, UsabilityError> {
    required_column(classified, "month")?;

    let averages: Vec<Expr> = classified
        .get_columns()
        .iter()
        .filter(|column| !matches!(column.name().as_str(), "month" | "weekday"))
        .filter(|column| is_averageable(column.dtype()))
        .map(|column| col(column.name().clone()).cast(DataType::Float64).mean())
        .collect();

    let mut frame = classified
        .clone()
        .lazy()
        .group_by([col("month")])
        .agg(averages)
        .sort(["month"], SortMultipleOptions::default())
        .collect()?;

    let names = frame
        .column("month")?
        .cast(&DataType::UInt32)?
        .u32()?
        .into_iter()
        .map(|month| {
            month.and_then(month_name).ok_or_else(|| {
                UsabilityError::UnexpectedData(format!("invalid month number {:?}", month))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    frame.with_column(Column::new("month".into(), names))?;

    Ok(MonthlyExpectations::new(frame))
}
