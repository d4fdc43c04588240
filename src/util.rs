use crate::error::{GitYearError, Result};
use crate::model::DateRange;
use chrono::{Datelike, NaiveDate};

/// Every day from `start` to `end` inclusive. Empty when `start > end`.
pub fn build_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Same month and day one year earlier, clamped to the end of a short month.
pub fn one_year_ago(date: NaiveDate) -> Result<NaiveDate> {
    let year = date.year() - 1;
    let day = date.day().min(days_in_month(year, date.month())?);
    NaiveDate::from_ymd_opt(year, date.month(), day)
        .ok_or_else(|| GitYearError::InvalidDate(format!("No date one year before {date}")))
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| GitYearError::InvalidDate(format!("Invalid month {year}-{month:02}")))
}

/// Resolve the displayed period: a whole calendar year, year-to-date for the
/// current year, or the trailing year ending `today` when no year is given.
pub fn resolve_period(year: Option<i32>, today: NaiveDate) -> Result<DateRange> {
    let Some(year) = year else {
        return DateRange::new(one_year_ago(today)?, today);
    };

    if year <= 0 {
        return Err(GitYearError::InvalidYear(year));
    }
    if year > today.year() {
        return Err(GitYearError::FutureYear(year));
    }

    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(GitYearError::InvalidYear(year))?;
    let end = if year == today.year() {
        today
    } else {
        NaiveDate::from_ymd_opt(year, 12, 31).ok_or(GitYearError::InvalidYear(year))?
    };
    DateRange::new(start, end)
}
