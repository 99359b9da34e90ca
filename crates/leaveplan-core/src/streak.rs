//! Off-day streaks.
//!
//! Walks a month in chronological order and reports every maximal run of
//! off days. Runs touching the first or last day of the month are reported
//! as-is; nothing outside the given days is looked at.
//!
//! Each call is O(days) with O(1) membership checks.

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDay;
use crate::classify::{Assignments, DayClassifier};

/// A maximal run of consecutive off days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffDayPeriod {
    pub start: CalendarDay,
    pub end: CalendarDay,
    pub length: u32,
}

impl OffDayPeriod {
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Runs of days for which `is_off` holds. `days` must be chronological
/// and contiguous.
pub fn off_periods_by<F>(days: &[CalendarDay], is_off: F) -> Vec<OffDayPeriod>
where
    F: Fn(CalendarDay) -> bool,
{
    let mut periods = Vec::new();
    let mut current: Option<OffDayPeriod> = None;

    for &day in days {
        if is_off(day) {
            match current.as_mut() {
                Some(period) => {
                    period.end = day;
                    period.length += 1;
                }
                None => {
                    current = Some(OffDayPeriod {
                        start: day,
                        end: day,
                        length: 1,
                    });
                }
            }
        } else if let Some(period) = current.take() {
            periods.push(period);
        }
    }

    // Month ends inside a run
    if let Some(period) = current {
        periods.push(period);
    }

    periods
}

/// Off periods given the holiday calendar and the current selections.
pub fn compute_off_periods(
    days: &[CalendarDay],
    classifier: &DayClassifier,
    assignments: &Assignments,
) -> Vec<OffDayPeriod> {
    off_periods_by(days, |day| classifier.is_off(day, assignments))
}

/// Length of the longest period, `0` if there is none.
pub fn longest_streak(periods: &[OffDayPeriod]) -> u32 {
    periods.iter().map(|p| p.length).max().unwrap_or(0)
}

/// Longest streak the month would have if `candidate` were also off.
pub fn potential_longest_streak(
    days: &[CalendarDay],
    classifier: &DayClassifier,
    assignments: &Assignments,
    candidate: CalendarDay,
) -> u32 {
    let periods = off_periods_by(days, |day| {
        day == candidate || classifier.is_off(day, assignments)
    });
    longest_streak(&periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;
    use crate::holiday::Holiday;

    fn day(year: i32, month: u32, d: u32) -> CalendarDay {
        CalendarDay::new(year, month, d).unwrap()
    }

    #[test]
    fn test_weekends_only_month() {
        // June 2025 starts on a Sunday and ends on a Monday
        let days = Month::new(2025, 5).unwrap().days();
        let classifier = DayClassifier::new(&[]);
        let periods = compute_off_periods(&days, &classifier, &Assignments::new());

        assert_eq!(periods.len(), 5);
        assert_eq!(periods[0].start, day(2025, 5, 1));
        assert_eq!(periods[0].length, 1);
        assert_eq!(periods[1].start, day(2025, 5, 7));
        assert_eq!(periods[1].end, day(2025, 5, 8));
        assert_eq!(periods[4].end, day(2025, 5, 29));
        assert_eq!(longest_streak(&periods), 2);
    }

    #[test]
    fn test_run_at_month_end_is_reported() {
        // May 2025 ends on Saturday 31
        let days = Month::new(2025, 4).unwrap().days();
        let classifier = DayClassifier::new(&[]);
        let periods = compute_off_periods(&days, &classifier, &Assignments::new());
        let last = periods.last().unwrap();
        assert_eq!(last.start, day(2025, 4, 31));
        assert_eq!(last.end, day(2025, 4, 31));
        assert_eq!(last.length, 1);
    }

    #[test]
    fn test_holy_week_streak() {
        let holidays = vec![
            Holiday::regular(day(2025, 3, 17), "Maundy Thursday"),
            Holiday::regular(day(2025, 3, 18), "Good Friday"),
            Holiday::special(day(2025, 3, 19), "Black Saturday"),
        ];
        let days = Month::new(2025, 3).unwrap().days();
        let classifier = DayClassifier::new(&holidays);
        let mut assignments = Assignments::new();

        let periods = compute_off_periods(&days, &classifier, &assignments);
        assert_eq!(longest_streak(&periods), 4);

        assignments.add_leave(day(2025, 3, 16));
        assignments.add_remote(day(2025, 3, 15));
        let periods = compute_off_periods(&days, &classifier, &assignments);
        assert_eq!(longest_streak(&periods), 6);
        let holy_week = periods.iter().find(|p| p.length == 6).unwrap();
        assert_eq!(holy_week.start, day(2025, 3, 15));
        assert_eq!(holy_week.end, day(2025, 3, 20));
        assert!(holy_week.contains(day(2025, 3, 18)));
    }

    #[test]
    fn test_potential_streak_does_not_mutate() {
        let days = Month::new(2025, 5).unwrap().days();
        let classifier = DayClassifier::new(&[]);
        let assignments = Assignments::new();
        // Friday 2025-06-06 joins the weekend of 7-8
        let potential = potential_longest_streak(&days, &classifier, &assignments, day(2025, 5, 6));
        assert_eq!(potential, 3);
        assert_eq!(assignments.leave_count(), 0);
    }

    #[test]
    fn test_periods_partition_month() {
        let days = Month::new(2025, 1).unwrap().days();
        let classifier = DayClassifier::new(&[]);
        let periods = compute_off_periods(&days, &classifier, &Assignments::new());
        let covered: u32 = periods.iter().map(|p| p.length).sum();
        let off = days.iter().filter(|d| d.is_weekend()).count() as u32;
        assert_eq!(covered, off);
        for pair in periods.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn test_empty_input() {
        let periods = off_periods_by(&[], |_| true);
        assert!(periods.is_empty());
        assert_eq!(longest_streak(&periods), 0);
    }
}
