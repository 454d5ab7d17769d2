use crate::error::UsabilityError;
use polars::prelude::*;

/// Looks up a column, reporting its name when it is missing.
pub fn required_column<'a>(
    frame: &'a DataFrame,
    name: &str,
) -> Result<&'a Column, UsabilityError> {
    frame
        .column(name)
        .map_err(|e| UsabilityError::MissingColumn(name.to_string(), e))
}

/// Any numeric column as `f64` values.
pub fn float_column(frame: &DataFrame, name: &str) -> Result<Float64Chunked, UsabilityError> {
    let column = required_column(frame, name)?;
    Ok(column.cast(&DataType::Float64)?.f64()?.clone())
}

/// Whether the arithmetic mean of a column of this type is meaningful.
pub fn is_averageable(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// English name of a month number in `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    chrono::Month::try_from(month).ok().map(|m| m.name())
}
