use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An inclusive range of days fetched with a single request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PageRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Display for PageRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Last day of the month `date` falls in.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Splits `[since, until]` into calendar month pages.
///
/// The first page starts at `since`, every following page at the first of a
/// month. The last page is cut off at `until`. Yields nothing when `since`
/// is after `until`.
#[derive(Debug, Clone)]
pub struct MonthPages {
    next: Option<NaiveDate>,
    until: NaiveDate,
}

impl MonthPages {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Self {
        Self {
            next: Some(since),
            until,
        }
    }
}

impl Iterator for MonthPages {
    type Item = PageRange;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next.filter(|start| *start <= self.until)?;
        let end = last_day_of_month(start).map_or(self.until, |end| end.min(self.until));
        self.next = end.succ_opt();
        Some(PageRange { start, end })
    }
}
