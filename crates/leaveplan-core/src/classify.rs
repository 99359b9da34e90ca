//! Day classification.
//!
//! A day is a holiday, a weekend day, a leave day, a remote day, or an
//! ordinary workday. When more than one could apply the precedence is
//! Holiday > Weekend > Leave > Remote > Workday.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDay;
use crate::holiday::Holiday;

/// Classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Holiday,
    Weekend,
    Leave,
    Remote,
    Workday,
}

impl DayKind {
    /// Everything but an ordinary workday counts as off.
    pub fn is_off(self) -> bool {
        self != DayKind::Workday
    }
}

/// Leave and remote selections. The two sets never share a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    leave: BTreeSet<CalendarDay>,
    remote: BTreeSet<CalendarDay>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `day` as leave. Returns `false` if it already holds an assignment.
    pub fn add_leave(&mut self, day: CalendarDay) -> bool {
        !self.remote.contains(&day) && self.leave.insert(day)
    }

    /// Mark `day` as remote. Returns `false` if it already holds an assignment.
    pub fn add_remote(&mut self, day: CalendarDay) -> bool {
        !self.leave.contains(&day) && self.remote.insert(day)
    }

    pub fn is_leave(&self, day: CalendarDay) -> bool {
        self.leave.contains(&day)
    }

    pub fn is_remote(&self, day: CalendarDay) -> bool {
        self.remote.contains(&day)
    }

    pub fn is_assigned(&self, day: CalendarDay) -> bool {
        self.is_leave(day) || self.is_remote(day)
    }

    /// Leave days in chronological order.
    pub fn leave(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        self.leave.iter().copied()
    }

    /// Remote days in chronological order.
    pub fn remote(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        self.remote.iter().copied()
    }

    pub fn leave_count(&self) -> usize {
        self.leave.len()
    }

    pub fn remote_count(&self) -> usize {
        self.remote.len()
    }
}

/// Holiday-aware classifier. Holiday lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct DayClassifier {
    holidays: HashSet<CalendarDay>,
}

impl DayClassifier {
    pub fn new(holidays: &[Holiday]) -> Self {
        Self {
            holidays: holidays.iter().map(|h| h.day).collect(),
        }
    }

    pub fn is_holiday(&self, day: CalendarDay) -> bool {
        self.holidays.contains(&day)
    }

    /// Weekend or holiday, regardless of any assignment.
    pub fn is_naturally_off(&self, day: CalendarDay) -> bool {
        day.is_weekend() || self.is_holiday(day)
    }

    /// Ordinary workday: neither weekend nor holiday.
    pub fn is_workday(&self, day: CalendarDay) -> bool {
        !self.is_naturally_off(day)
    }

    pub fn classify(&self, day: CalendarDay, assignments: &Assignments) -> DayKind {
        if self.is_holiday(day) {
            DayKind::Holiday
        } else if day.is_weekend() {
            DayKind::Weekend
        } else if assignments.is_leave(day) {
            DayKind::Leave
        } else if assignments.is_remote(day) {
            DayKind::Remote
        } else {
            DayKind::Workday
        }
    }

    pub fn is_off(&self, day: CalendarDay, assignments: &Assignments) -> bool {
        self.is_naturally_off(day) || assignments.is_assigned(day)
    }
}
