//! Text rendering helpers for plan output.

use crate::calendar::CalendarDay;
use crate::streak::OffDayPeriod;

pub use crate::calendar::month_name;

/// Day-of-month numbers joined by `", "`, or `"None"` when empty.
pub fn format_day_list(days: &[CalendarDay]) -> String {
    if days.is_empty() {
        return "None".to_string();
    }
    days.iter()
        .map(|d| d.day().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"Apr 17 - Apr 20 (4 days)"`, or `"Apr 9 (1 day)"` for a single day.
pub fn format_period(period: &OffDayPeriod) -> String {
    let start = period.start.date().format("%b %-d");
    let unit = if period.length == 1 { "day" } else { "days" };
    if period.start == period.end {
        format!("{start} ({} {unit})", period.length)
    } else {
        let end = period.end.date().format("%b %-d");
        format!("{start} - {end} ({} {unit})", period.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, d: u32) -> CalendarDay {
        CalendarDay::new(year, month, d).unwrap()
    }

    #[test]
    fn test_format_day_list() {
        assert_eq!(format_day_list(&[]), "None");
        let days = [day(2025, 3, 3), day(2025, 3, 4), day(2025, 3, 17)];
        assert_eq!(format_day_list(&days), "3, 4, 17");
    }

    #[test]
    fn test_format_period() {
        let holy_week = OffDayPeriod {
            start: day(2025, 3, 17),
            end: day(2025, 3, 20),
            length: 4,
        };
        assert_eq!(format_period(&holy_week), "Apr 17 - Apr 20 (4 days)");

        let single = OffDayPeriod {
            start: day(2025, 3, 9),
            end: day(2025, 3, 9),
            length: 1,
        };
        assert_eq!(format_period(&single), "Apr 9 (1 day)");
    }

    #[test]
    fn test_period_across_months_keeps_both_names() {
        let period = OffDayPeriod {
            start: day(2025, 10, 29),
            end: day(2025, 11, 1),
            length: 3,
        };
        assert_eq!(format_period(&period), "Nov 29 - Dec 1 (3 days)");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }
}
