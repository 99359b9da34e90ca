//! Scarce resources handed out by the allocation engine.

use std::collections::BTreeMap;

use chrono::IsoWeek;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDay;

/// Leave credits for one optimization: current credits plus carryover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveBudget {
    total: u32,
    remaining: u32,
}

impl LeaveBudget {
    pub fn new(credits: u32, carryover: u32) -> Self {
        let total = credits.saturating_add(carryover);
        Self {
            total,
            remaining: total,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Take one credit. Returns `false` when none is left.
    pub fn consume(&mut self) -> bool {
        match self.remaining.checked_sub(1) {
            Some(left) => {
                self.remaining = left;
                true
            }
            None => false,
        }
    }
}

/// Remote slots usage for one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekUsage {
    pub iso_year: i32,
    pub week: u32,
    pub cap: u32,
    pub used: u32,
}

/// Remaining remote slots per ISO week.
///
/// Only weeks holding at least one candidate day get slots; any other week
/// reports zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBudget {
    cap: u32,
    remaining: BTreeMap<IsoWeek, u32>,
}

impl WeekBudget {
    pub fn new<I>(cap: u32, candidates: I) -> Self
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        let remaining = candidates
            .into_iter()
            .map(|day| (day.iso_week(), cap))
            .collect();
        Self { cap, remaining }
    }

    /// Slots left in the week containing `day`.
    pub fn remaining(&self, day: CalendarDay) -> u32 {
        self.remaining.get(&day.iso_week()).copied().unwrap_or(0)
    }

    pub fn has_slot(&self, day: CalendarDay) -> bool {
        self.remaining(day) > 0
    }

    /// Every tracked week is out of slots.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.values().all(|&slots| slots == 0)
    }

    /// Take one slot in the week of `day`. Returns `false` when none is left.
    pub fn consume(&mut self, day: CalendarDay) -> bool {
        match self.remaining.get_mut(&day.iso_week()) {
            Some(slots) if *slots > 0 => {
                *slots -= 1;
                true
            }
            _ => false,
        }
    }

    /// Per-week usage in chronological order.
    pub fn usage(&self) -> Vec<WeekUsage> {
        self.remaining
            .iter()
            .map(|(week, &left)| WeekUsage {
                iso_year: week.year(),
                week: week.week(),
                cap: self.cap,
                used: self.cap - left,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, d: u32) -> CalendarDay {
        CalendarDay::new(year, month, d).unwrap()
    }

    #[test]
    fn test_leave_budget_includes_carryover() {
        let mut budget = LeaveBudget::new(2, 1);
        assert_eq!(budget.total(), 3);
        assert!(budget.consume());
        assert!(budget.consume());
        assert!(budget.consume());
        assert!(budget.is_exhausted());
        assert!(!budget.consume());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_week_budget_tracks_iso_weeks() {
        // Mon 2025-06-02 and Fri 2025-06-06 share ISO week 23
        let monday = day(2025, 5, 2);
        let friday = day(2025, 5, 6);
        let next_monday = day(2025, 5, 9);
        let mut weeks = WeekBudget::new(1, [monday, friday, next_monday]);

        assert!(weeks.consume(monday));
        assert!(!weeks.has_slot(friday));
        assert!(!weeks.consume(friday));
        assert!(!weeks.is_exhausted());
        assert!(weeks.consume(next_monday));
        assert!(weeks.is_exhausted());

        let usage = weeks.usage();
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].week, 23);
        assert_eq!(usage[0].used, 1);
        assert_eq!(usage[1].cap, 1);
    }

    #[test]
    fn test_untracked_week_has_no_slots() {
        let mut weeks = WeekBudget::new(3, [day(2025, 5, 2)]);
        assert_eq!(weeks.remaining(day(2025, 5, 20)), 0);
        assert!(!weeks.consume(day(2025, 5, 20)));
    }

    #[test]
    fn test_zero_cap_is_exhausted_immediately() {
        let weeks = WeekBudget::new(0, [day(2025, 5, 2)]);
        assert!(weeks.is_exhausted());
    }

    #[test]
    fn test_no_weeks_counts_as_exhausted() {
        let weeks = WeekBudget::new(5, std::iter::empty());
        assert!(weeks.is_exhausted());
        assert!(weeks.usage().is_empty());
    }
}
