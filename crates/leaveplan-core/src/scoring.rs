//! Candidate scoring.
//!
//! Two scores rank workdays against each other when they tie on the
//! potential longest streak:
//!
//! - **Desirability**: a static estimate of how valuable a workday is to
//!   take off, based only on the weekend/holiday calendar around it.
//! - **Opportunity**: a per-iteration bonus for workdays next to long off
//!   runs or inside short gaps between two off runs.
//!
//! Neither score is an optimization objective on its own.
//!
//! ## Desirability rules
//!
//! | Rule | Points |
//! |------|--------|
//! | Both neighbors off | +20 |
//! | Exactly one neighbor off | +15 |
//! | Friday before a Monday holiday, Monday after a Friday holiday | +12 |
//! | Monday or Friday | +8 |
//! | Isolated Thursday/Friday | +2 |
//! | Isolated Monday/Tuesday | -2 |

use std::collections::HashMap;

use chrono::Weekday;

use crate::calendar::CalendarDay;
use crate::classify::DayClassifier;
use crate::streak::off_periods_by;

/// Score of days that are not candidates at all (weekends, holidays).
pub const NOT_A_CANDIDATE: i32 = -1;

const SANDWICHED: i32 = 20;
const ADJACENT: i32 = 15;
const BRIDGE: i32 = 12;
const WEEKEND_EXTENSION: i32 = 8;
const ISOLATED_NUDGE: i32 = 2;

/// Runs at least this long make their neighbors an opportunity.
pub const MIN_OPPORTUNITY_RUN: u32 = 3;
/// Widest workday gap between two runs still worth bridging.
pub const MAX_BRIDGE_GAP: usize = 2;

/// Friday whose following Monday is a holiday, or Monday whose preceding
/// Friday is a holiday.
pub fn is_bridge_opportunity(day: CalendarDay, classifier: &DayClassifier) -> bool {
    let other = match day.weekday() {
        Weekday::Fri => day.offset(3),
        Weekday::Mon => day.offset(-3),
        _ => None,
    };
    other.is_some_and(|d| classifier.is_holiday(d))
}

/// Desirability of taking `day` off. Weekends and holidays score
/// [`NOT_A_CANDIDATE`].
pub fn desirability(day: CalendarDay, classifier: &DayClassifier) -> i32 {
    if classifier.is_naturally_off(day) {
        return NOT_A_CANDIDATE;
    }

    let prev_off = day.pred().is_some_and(|d| classifier.is_naturally_off(d));
    let next_off = day.succ().is_some_and(|d| classifier.is_naturally_off(d));
    let weekday = day.weekday();
    let mut score = 0;

    if prev_off && next_off {
        score += SANDWICHED;
    } else if prev_off || next_off {
        score += ADJACENT;
    }

    if is_bridge_opportunity(day, classifier) {
        score += BRIDGE;
    }

    if matches!(weekday, Weekday::Mon | Weekday::Fri) {
        score += WEEKEND_EXTENSION;
    }

    if !prev_off && !next_off {
        match weekday {
            Weekday::Thu | Weekday::Fri => score += ISOLATED_NUDGE,
            Weekday::Mon | Weekday::Tue => score -= ISOLATED_NUDGE,
            _ => {}
        }
    }

    score
}

/// Opportunity bonus per candidate day for one allocation iteration.
#[derive(Debug, Clone, Default)]
pub struct OpportunityMap {
    scores: HashMap<CalendarDay, u32>,
}

impl OpportunityMap {
    /// Scan `days` (chronological, contiguous) for off runs.
    ///
    /// - Next to a run of length `L >= 3`, the first candidate on each
    ///   side gets `2L`, and so does the second one out when the day in
    ///   between is a candidate as well.
    /// - Inside a gap of one or two candidates between two runs whose
    ///   joined length would be `T >= 3`, every gap day gets `2T`.
    ///
    /// Contributions add up.
    pub fn scan<F, C>(days: &[CalendarDay], is_off: F, is_candidate: C) -> Self
    where
        F: Fn(CalendarDay) -> bool,
        C: Fn(CalendarDay) -> bool,
    {
        let mut map = Self::default();
        let runs = off_periods_by(days, is_off);
        let index_of = |day: CalendarDay| days.binary_search(&day).ok();
        let candidate_at = |index: Option<usize>| {
            index
                .and_then(|i| days.get(i).copied())
                .filter(|&d| is_candidate(d))
        };

        for run in runs.iter().filter(|r| r.length >= MIN_OPPORTUNITY_RUN) {
            let (Some(start), Some(end)) = (index_of(run.start), index_of(run.end)) else {
                continue;
            };
            let weight = run.length * 2;
            let sides = [
                (start.checked_sub(1), start.checked_sub(2)),
                (end.checked_add(1), end.checked_add(2)),
            ];
            for (near, far) in sides {
                if let Some(day) = candidate_at(near) {
                    map.add(day, weight);
                    if let Some(day) = candidate_at(far) {
                        map.add(day, weight);
                    }
                }
            }
        }

        for pair in runs.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            let (Some(left_end), Some(right_start)) = (index_of(left.end), index_of(right.start))
            else {
                continue;
            };
            let gap = &days[left_end + 1..right_start];
            if gap.is_empty() || gap.len() > MAX_BRIDGE_GAP {
                continue;
            }
            if !gap.iter().all(|&d| is_candidate(d)) {
                continue;
            }
            let joined = left.length + gap.len() as u32 + right.length;
            if joined >= MIN_OPPORTUNITY_RUN {
                for &day in gap {
                    map.add(day, joined * 2);
                }
            }
        }

        map
    }

    fn add(&mut self, day: CalendarDay, weight: u32) {
        *self.scores.entry(day).or_insert(0) += weight;
    }

    /// Bonus for `day`, `0` when it was not flagged.
    pub fn get(&self, day: CalendarDay) -> u32 {
        self.scores.get(&day).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;
    use crate::holiday::{Holiday, HolidayCatalog};

    fn day(year: i32, month: u32, d: u32) -> CalendarDay {
        CalendarDay::new(year, month, d).unwrap()
    }

    fn ph_classifier() -> DayClassifier {
        DayClassifier::new(HolidayCatalog::philippines_2025().holidays())
    }

    #[test]
    fn test_weekends_and_holidays_are_not_candidates() {
        let classifier = ph_classifier();
        assert_eq!(desirability(day(2025, 3, 19), &classifier), NOT_A_CANDIDATE);
        assert_eq!(desirability(day(2025, 3, 18), &classifier), NOT_A_CANDIDATE);
    }

    #[test]
    fn test_sandwiched_friday_before_monday_holiday() {
        // Thu 2025-08-21 Ninoy Aquino Day, Mon 2025-08-25 National Heroes Day
        let classifier = ph_classifier();
        let friday = day(2025, 7, 22);
        assert!(is_bridge_opportunity(friday, &classifier));
        assert_eq!(desirability(friday, &classifier), 20 + 12 + 8);
    }

    #[test]
    fn test_monday_after_good_friday() {
        let classifier = ph_classifier();
        let monday = day(2025, 3, 21);
        assert!(is_bridge_opportunity(monday, &classifier));
        assert_eq!(desirability(monday, &classifier), 15 + 12 + 8);
    }

    #[test]
    fn test_adjacent_midweek_day() {
        // Tue 2025-08-26 follows the Monday holiday
        let classifier = ph_classifier();
        assert_eq!(desirability(day(2025, 7, 26), &classifier), 15);
    }

    #[test]
    fn test_isolated_day_nudges() {
        // Week of 2025-10-06 has no holidays
        let classifier = DayClassifier::new(&[]);
        assert_eq!(desirability(day(2025, 9, 7), &classifier), -2); // Tue
        assert_eq!(desirability(day(2025, 9, 8), &classifier), 0); // Wed
        assert_eq!(desirability(day(2025, 9, 9), &classifier), 2); // Thu
        // Plain Friday: adjacent to Saturday
        assert_eq!(desirability(day(2025, 9, 10), &classifier), 15 + 8);
    }

    #[test]
    fn test_opportunity_bridges_midweek_holiday() {
        // Wed 2025-10-15 is the only holiday
        let holidays = vec![Holiday::custom(day(2025, 9, 15))];
        let classifier = DayClassifier::new(&holidays);
        let days = Month::new(2025, 9).unwrap().days();
        let map = OpportunityMap::scan(
            &days,
            |d| classifier.is_naturally_off(d),
            |d| classifier.is_workday(d),
        );

        // Weekend (2) + gap (2) + holiday (1) = 5
        assert_eq!(map.get(day(2025, 9, 13)), 10);
        assert_eq!(map.get(day(2025, 9, 14)), 10);
        assert_eq!(map.get(day(2025, 9, 16)), 10);
        assert_eq!(map.get(day(2025, 9, 17)), 10);
        assert_eq!(map.get(day(2025, 9, 3)), 0);
        assert_eq!(map.get(day(2025, 9, 8)), 0);
    }

    #[test]
    fn test_opportunity_extends_long_runs() {
        // Holy week 2025: Thu 17 .. Sun 20 is a 4-day run
        let classifier = ph_classifier();
        let days = Month::new(2025, 3).unwrap().days();
        let map = OpportunityMap::scan(
            &days,
            |d| classifier.is_naturally_off(d),
            |d| classifier.is_workday(d),
        );

        assert_eq!(map.get(day(2025, 3, 16)), 8);
        assert_eq!(map.get(day(2025, 3, 15)), 8);
        assert_eq!(map.get(day(2025, 3, 21)), 8);
        assert_eq!(map.get(day(2025, 3, 22)), 8);
        assert_eq!(map.get(day(2025, 3, 14)), 0);
        // Araw ng Kagitingan (Wed 9) is bridged from both weekends
        assert_eq!(map.get(day(2025, 3, 7)), 10);
        assert_eq!(map.get(day(2025, 3, 11)), 10);
    }

    #[test]
    fn test_opportunity_ignores_non_candidates() {
        let holidays = vec![Holiday::custom(day(2025, 9, 15))];
        let classifier = DayClassifier::new(&holidays);
        let days = Month::new(2025, 9).unwrap().days();
        let blocked = day(2025, 9, 14);
        let map = OpportunityMap::scan(
            &days,
            |d| classifier.is_naturally_off(d),
            |d| classifier.is_workday(d) && d != blocked,
        );

        // The 13-14 gap can no longer be bridged
        assert_eq!(map.get(day(2025, 9, 13)), 0);
        assert_eq!(map.get(blocked), 0);
        assert_eq!(map.get(day(2025, 9, 16)), 10);
    }
}
