//! Plan assembly.
//!
//! Turns the engine's final assignments into an immutable [`OptimizedPlan`]
//! with off-day periods and summary counters.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::{CalendarDay, Month};
use crate::classify::{Assignments, DayClassifier};
use crate::engine::{AllocationStep, Strategy, WeekUsage};
use crate::holiday::Holiday;
use crate::streak::{compute_off_periods, longest_streak, OffDayPeriod};

/// Leave granularity. Only whole days are planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveKind {
    #[default]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAssignment {
    pub day: CalendarDay,
    pub kind: LeaveKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAssignment {
    pub day: CalendarDay,
}

/// Result of one optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizedPlan {
    /// 0-based month index
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    /// Chronological
    pub leave: Vec<LeaveAssignment>,
    /// Chronological
    pub remote: Vec<RemoteAssignment>,
    pub off_periods: Vec<OffDayPeriod>,
    pub longest_streak: u32,
    /// Sum of all period lengths. Leave and remote days are counted once,
    /// inside their period.
    pub total_days_off: u32,
    pub leaves_used: u32,
    pub leaves_remaining: u32,
    pub remote_used: u32,
    /// Ordinary workdays before allocation.
    pub workdays: u32,
    pub on_site_days: u32,
    pub strategy: Strategy,
    pub holidays_in_month: Vec<Holiday>,
    pub remote_by_week: Vec<WeekUsage>,
    /// Assignment order, for transparency.
    pub steps: Vec<AllocationStep>,
}

impl OptimizedPlan {
    pub fn leave_dates(&self) -> Vec<CalendarDay> {
        self.leave.iter().map(|l| l.day).collect()
    }

    pub fn remote_dates(&self) -> Vec<CalendarDay> {
        self.remote.iter().map(|r| r.day).collect()
    }
}

/// Final engine state handed to [`assemble`].
#[derive(Debug, Clone)]
pub(crate) struct AllocationOutcome {
    /// Credits plus carryover.
    pub leave_budget: u32,
    pub remote_by_week: Vec<WeekUsage>,
    pub assignments: Assignments,
    pub strategy: Strategy,
    pub steps: Vec<AllocationStep>,
}

pub(crate) fn assemble(month: &Month, holidays: &[Holiday], outcome: AllocationOutcome) -> OptimizedPlan {
    let days = month.days();
    let classifier = DayClassifier::new(holidays);
    let assignments = &outcome.assignments;

    let off_periods = compute_off_periods(&days, &classifier, assignments);
    let longest = longest_streak(&off_periods);
    let total_days_off = off_periods.iter().map(|p| p.length).sum();

    let leave: Vec<LeaveAssignment> = assignments
        .leave()
        .map(|day| LeaveAssignment {
            day,
            kind: LeaveKind::Full,
        })
        .collect();
    let remote: Vec<RemoteAssignment> = assignments
        .remote()
        .map(|day| RemoteAssignment { day })
        .collect();

    let leaves_used = leave.len() as u32;
    let remote_used = remote.len() as u32;
    let workdays = days.iter().filter(|&&d| classifier.is_workday(d)).count() as u32;

    let mut holidays_in_month: Vec<Holiday> = holidays
        .iter()
        .filter(|h| month.contains(h.day))
        .cloned()
        .collect();
    holidays_in_month.sort_by_key(|h| h.day);

    info!(
        month = %month,
        longest_streak = longest,
        leaves_used,
        remote_used,
        total_days_off,
        "assembled plan"
    );

    OptimizedPlan {
        month: month.index(),
        year: month.year(),
        month_name: month.name().to_string(),
        leave,
        remote,
        off_periods,
        longest_streak: longest,
        total_days_off,
        leaves_used,
        leaves_remaining: outcome.leave_budget.saturating_sub(leaves_used),
        remote_used,
        workdays,
        on_site_days: workdays.saturating_sub(leaves_used + remote_used),
        strategy: outcome.strategy,
        holidays_in_month,
        remote_by_week: outcome.remote_by_week,
        steps: outcome.steps,
    }
}
