//! Holiday catalog.
//!
//! A catalog is an ordered list of fixed calendar-day holidays for a
//! jurisdiction and year, optionally unioned with ad-hoc custom holidays
//! (company-declared days and the like). Custom holidays are plain regular
//! holidays with a synthetic name.
//!
//! Catalogs are read-only once built and can be shared across engine calls.

mod philippines;

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDay, Month};

/// Name given to caller-supplied holidays.
pub const CUSTOM_HOLIDAY_NAME: &str = "Custom Holiday";

/// A single holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub day: CalendarDay,
    pub name: String,
    /// `false` = regular (mandatory) holiday, `true` = special (optional)
    pub is_special: bool,
}

impl Holiday {
    pub fn regular(day: CalendarDay, name: impl Into<String>) -> Self {
        Self {
            day,
            name: name.into(),
            is_special: false,
        }
    }

    pub fn special(day: CalendarDay, name: impl Into<String>) -> Self {
        Self {
            day,
            name: name.into(),
            is_special: true,
        }
    }

    pub fn custom(day: CalendarDay) -> Self {
        Self::regular(day, CUSTOM_HOLIDAY_NAME)
    }
}

/// Ordered holiday list for one jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCatalog {
    holidays: Vec<Holiday>,
}

impl HolidayCatalog {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Philippine regular and special non-working holidays for 2025.
    pub fn philippines_2025() -> Self {
        Self::from_table(2025, philippines::HOLIDAYS_2025)
    }

    /// Bundled catalog for a jurisdiction code and year, if there is one.
    pub fn for_jurisdiction(code: &str, year: i32) -> Option<Self> {
        match (code.to_ascii_uppercase().as_str(), year) {
            ("PH", 2025) => Some(Self::philippines_2025()),
            _ => None,
        }
    }

    fn from_table(year: i32, table: &[(u32, u32, &str, bool)]) -> Self {
        let holidays = table
            .iter()
            .filter_map(|&(month, day, name, is_special)| {
                let day = CalendarDay::new(year, month, day)?;
                Some(Holiday {
                    day,
                    name: name.to_string(),
                    is_special,
                })
            })
            .collect();
        Self { holidays }
    }

    /// Union with custom holiday days.
    ///
    /// Catalog entries keep their position; custom days follow in the
    /// given order. A custom day that is already a holiday (or repeated)
    /// is skipped.
    pub fn with_custom(&self, days: &[CalendarDay]) -> Self {
        let mut holidays = self.holidays.clone();
        for &day in days {
            if !holidays.iter().any(|h| h.day == day) {
                holidays.push(Holiday::custom(day));
            }
        }
        Self { holidays }
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// The holiday on `day`, if any.
    pub fn find(&self, day: CalendarDay) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.day == day)
    }

    /// Holidays falling in `month`, chronologically.
    pub fn in_month(&self, month: &Month) -> Vec<Holiday> {
        let mut found: Vec<Holiday> = self
            .holidays
            .iter()
            .filter(|h| month.contains(h.day))
            .cloned()
            .collect();
        found.sort_by_key(|h| h.day);
        found
    }
}

impl From<Vec<Holiday>> for HolidayCatalog {
    fn from(holidays: Vec<Holiday>) -> Self {
        Self::new(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, d: u32) -> CalendarDay {
        CalendarDay::new(year, month, d).unwrap()
    }

    #[test]
    fn test_philippines_2025_counts() {
        let catalog = HolidayCatalog::philippines_2025();
        assert_eq!(catalog.len(), 19);
        let regular = catalog.holidays().iter().filter(|h| !h.is_special).count();
        assert_eq!(regular, 10);
    }

    #[test]
    fn test_find_matches_calendar_identity() {
        let catalog = HolidayCatalog::philippines_2025();
        let good_friday = catalog.find(day(2025, 3, 18)).unwrap();
        assert_eq!(good_friday.name, "Good Friday");
        assert!(!good_friday.is_special);
        assert!(catalog.find(day(2024, 3, 18)).is_none());
    }

    #[test]
    fn test_for_jurisdiction() {
        assert!(HolidayCatalog::for_jurisdiction("ph", 2025).is_some());
        assert!(HolidayCatalog::for_jurisdiction("PH", 2026).is_none());
        assert!(HolidayCatalog::for_jurisdiction("US", 2025).is_none());
    }

    #[test]
    fn test_with_custom_skips_duplicates() {
        let catalog = HolidayCatalog::philippines_2025();
        let merged = catalog.with_custom(&[
            day(2025, 3, 16),
            day(2025, 3, 17), // already Maundy Thursday
            day(2025, 3, 16),
        ]);
        assert_eq!(merged.len(), catalog.len() + 1);
        let last = merged.holidays().last().unwrap();
        assert_eq!(last.day, day(2025, 3, 16));
        assert_eq!(last.name, CUSTOM_HOLIDAY_NAME);
        assert!(!last.is_special);
    }

    #[test]
    fn test_in_month_is_chronological() {
        let catalog = HolidayCatalog::philippines_2025();
        let december = Month::new(2025, 11).unwrap();
        let names: Vec<_> = catalog
            .in_month(&december)
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Feast of the Immaculate Conception",
                "Christmas Eve",
                "Christmas Day",
                "Rizal Day",
                "New Year's Eve",
            ]
        );
    }
}
