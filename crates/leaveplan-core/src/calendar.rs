//! Calendar primitives.
//!
//! Days are compared by calendar identity only: a [`CalendarDay`] wraps a
//! `chrono::NaiveDate`, so there is no time-of-day or timezone to get in
//! the way. Months use the 0-based index (0 = January) throughout the
//! engine; the CLI converts from the 1-based form users type.
//!
//! "Week" always means the ISO week (`chrono::IsoWeek`).

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Duration, IsoWeek, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Years the engine accepts.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 2020..=2030;

/// A single Gregorian day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Build a day from a year, a 0-based month and a 1-based day of month.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day).map(Self)
    }

    /// Same as [`CalendarDay::new`] but reports the bad triple.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        Self::new(year, month, day).ok_or(ValidationError::InvalidDate { year, month, day })
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 0-based month.
    pub fn month(self) -> u32 {
        self.0.month0()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn iso_week(self) -> IsoWeek {
        self.0.iso_week()
    }

    /// The day `days` away, or `None` past the end of chrono's range.
    pub fn offset(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::InvalidValue {
                field: "date".to_string(),
                message: format!("'{s}' is not a YYYY-MM-DD date: {e}"),
            })
    }
}

/// A calendar month, identified by year and 0-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first: CalendarDay,
}

impl Month {
    /// Validates the month index. The year is only checked for being
    /// representable; the supported range is enforced by the engine.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if month > 11 {
            return Err(ValidationError::MonthOutOfRange { month });
        }
        let first = CalendarDay::try_new(year, month, 1)?;
        Ok(Self { first })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-based month index.
    pub fn index(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> CalendarDay {
        self.first
    }

    /// Every day of the month in chronological order.
    pub fn days(&self) -> Vec<CalendarDay> {
        let month = self.index();
        self.first
            .date()
            .iter_days()
            .take_while(|d| d.month0() == month)
            .map(CalendarDay)
            .collect()
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        day.year() == self.year() && day.month() == self.index()
    }

    /// English month name.
    pub fn name(&self) -> &'static str {
        month_name(self.index()).unwrap_or_default()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

/// English name for a 0-based month index.
pub fn month_name(month: u32) -> Option<&'static str> {
    let one_based = u8::try_from(month.checked_add(1)?).ok()?;
    chrono::Month::try_from(one_based).ok().map(|m| m.name())
}
