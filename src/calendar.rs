use chrono::{Datelike, NaiveDate};

use crate::{error::EstimateError, quantity::time::Months};

/// Count billing months in the inclusive date range.
///
/// Day-of-month is ignored: a range within a single calendar month counts as
/// one month, regardless of the actual days.
pub fn count_months(start: NaiveDate, end: NaiveDate) -> Result<Months, EstimateError> {
    if end < start {
        return Err(EstimateError::InvalidRange(format!(
            "end date {end} precedes start date {start}"
        )));
    }
    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1;
    #[expect(clippy::cast_sign_loss)]
    let months = months as u32;
    Ok(Months(months))
}
