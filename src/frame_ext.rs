use crate::classify::classify;
use crate::error::UsabilityError;
use crate::expectations::{monthly_expectations, MonthlyExpectations};
use crate::types::criterion::UsabilityCriterion;
use polars::prelude::DataFrame;

/// Usability steps callable directly on an observation `DataFrame`.
pub trait UsabilityFrameExt {
    /// Adds `month`, `weekday` and `isusable` columns to an observation table.
    /// See [`crate::classify`].
    fn classify_usability(
        &self,
        criterion: &UsabilityCriterion,
    ) -> Result<DataFrame, UsabilityError>;

    /// Averages a classified table per calendar month.
    /// See [`crate::monthly_expectations`].
    fn monthly_expectations(&self) -> Result<MonthlyExpectations, UsabilityError>;
}

impl UsabilityFrameExt for DataFrame {
    fn classify_usability(
        &self,
        criterion: &UsabilityCriterion,
    ) -> Result<DataFrame, UsabilityError> {
        classify(self, criterion)
    }

    fn monthly_expectations(&self) -> Result<MonthlyExpectations, UsabilityError> {
        monthly_expectations(self)
    }
}
