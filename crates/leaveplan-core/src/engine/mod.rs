//! Allocation engine.
//!
//! Greedily turns ordinary workdays into off days, one per iteration,
//! using two scarce resources: leave credits (a single counter) and remote
//! slots (a cap per ISO week). Leave and remote are one unified "make this
//! day off" decision; the active [`Strategy`] only decides which resource
//! covers the chosen day.
//!
//! ## Ranking
//!
//! Every iteration ranks the remaining candidates by, in order:
//!
//! 1. Longest streak of the month if the candidate were off
//! 2. Opportunity score ([`OpportunityMap`])
//! 3. Adjacency to an off day (weekend, holiday, or already assigned)
//! 4. Desirability score ([`desirability`])
//! 5. Earlier date
//!
//! A candidate is only acceptable if it raises the longest streak, touches
//! an off day, or carries an opportunity bonus. When nothing is
//! acceptable, a fallback pass fills free remote slots by desirability.
//! With pruning in place every remaining candidate block touches a weekend
//! or holiday, so `optimize` never reaches the fallback on its own; it only
//! guards states the ranking loop does not produce today.
//!
//! Every iteration re-scans the whole month once per candidate.

mod budget;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::{CalendarDay, Month, SUPPORTED_YEARS};
use crate::classify::{Assignments, DayClassifier};
use crate::error::ValidationError;
use crate::holiday::Holiday;
use crate::plan::{assemble, AllocationOutcome, OptimizedPlan};
use crate::scoring::{desirability, OpportunityMap};
use crate::streak::{compute_off_periods, longest_streak, potential_longest_streak};

pub use budget::{LeaveBudget, WeekBudget, WeekUsage};

/// Highest accepted weekly remote cap.
pub const MAX_REMOTE_PER_WEEK: u32 = 7;

/// Which resource covers a chosen day first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Remote first, leave when the week has no free slot.
    #[default]
    A,
    /// Leave first, remote when the leave budget is spent.
    B,
}

impl Strategy {
    fn preference(self) -> [Resource; 2] {
        match self {
            Strategy::A => [Resource::Remote, Resource::Leave],
            Strategy::B => [Resource::Leave, Resource::Remote],
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::A => write!(f, "A"),
            Strategy::B => write!(f, "B"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "remote-first" => Ok(Strategy::A),
            "b" | "leave-first" => Ok(Strategy::B),
            other => Err(ValidationError::InvalidValue {
                field: "strategy".to_string(),
                message: format!("unknown strategy '{other}', expected A or B"),
            }),
        }
    }
}

/// Resource used to take a day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Leave,
    Remote,
}

/// Budgets and strategy for one optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanPolicy {
    pub max_remote_per_week: u32,
    pub leave_credits: u32,
    /// Credits rolled over from a prior period, added to `leave_credits`.
    pub carryover_balance: u32,
    pub strategy: Strategy,
}

impl PlanPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_remote_per_week > MAX_REMOTE_PER_WEEK {
            return Err(ValidationError::RemoteCapOutOfRange {
                value: self.max_remote_per_week,
                max: MAX_REMOTE_PER_WEEK,
            });
        }
        if self.leave_credits.checked_add(self.carryover_balance).is_none() {
            return Err(ValidationError::InvalidValue {
                field: "carryover_balance".to_string(),
                message: "leave credits plus carryover overflow".to_string(),
            });
        }
        Ok(())
    }
}

/// Ranking key of a candidate. Field order is comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateRank {
    pub potential_streak: u32,
    pub opportunity: u32,
    pub adjacent: bool,
    pub desirability: i32,
}

impl CandidateRank {
    fn is_acceptable(&self, current_longest: u32) -> bool {
        self.potential_streak > current_longest || self.adjacent || self.opportunity > 0
    }
}

/// One assignment made by the engine, in the order it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStep {
    pub day: CalendarDay,
    pub resource: Resource,
    pub rank: CandidateRank,
    /// Chosen by the fallback pass rather than by streak ranking.
    pub fallback: bool,
}

/// Stateless planner for a fixed policy.
///
/// Holds no state between calls; the same engine can plan any number of
/// months, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    policy: PlanPolicy,
}

impl AllocationEngine {
    pub fn new(policy: PlanPolicy) -> Self {
        Self { policy }
    }

    /// Plan one month.
    ///
    /// # Arguments
    /// * `month` - 0-based month index
    /// * `year` - Year within [`SUPPORTED_YEARS`]
    /// * `holidays` - Catalog holidays with any custom holidays unioned in
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for an out-of-range month, year or
    /// policy. No allocation work is done in that case.
    pub fn optimize(
        &self,
        month: u32,
        year: i32,
        holidays: &[Holiday],
    ) -> Result<OptimizedPlan, ValidationError> {
        let month = validate_month(month, year)?;
        self.policy.validate()?;

        let classifier = DayClassifier::new(holidays);
        let mut allocation = Allocation::new(&month, classifier, &self.policy);
        allocation.run();

        Ok(assemble(&month, holidays, allocation.finish()))
    }
}

/// Plan one month with explicit arguments.
///
/// Shorthand for building a [`PlanPolicy`] and calling
/// [`AllocationEngine::optimize`].
pub fn optimize(
    month: u32,
    year: i32,
    max_remote_per_week: u32,
    total_leave_credits: u32,
    holidays: &[Holiday],
    strategy: Strategy,
    carryover_balance: u32,
) -> Result<OptimizedPlan, ValidationError> {
    AllocationEngine::new(PlanPolicy {
        max_remote_per_week,
        leave_credits: total_leave_credits,
        carryover_balance,
        strategy,
    })
    .optimize(month, year, holidays)
}

fn validate_month(month: u32, year: i32) -> Result<Month, ValidationError> {
    if month > 11 {
        return Err(ValidationError::MonthOutOfRange { month });
    }
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end(),
        });
    }
    Month::new(year, month)
}

/// Mutable state of a single optimization call.
struct Allocation {
    days: Vec<CalendarDay>,
    classifier: DayClassifier,
    candidates: BTreeSet<CalendarDay>,
    assignments: Assignments,
    leave: LeaveBudget,
    weeks: WeekBudget,
    strategy: Strategy,
    steps: Vec<AllocationStep>,
}

struct Selection {
    day: CalendarDay,
    rank: CandidateRank,
    fallback: bool,
}

impl Allocation {
    fn new(month: &Month, classifier: DayClassifier, policy: &PlanPolicy) -> Self {
        let days = month.days();
        let candidates: BTreeSet<CalendarDay> = days
            .iter()
            .copied()
            .filter(|&d| classifier.is_workday(d))
            .collect();
        let weeks = WeekBudget::new(policy.max_remote_per_week, candidates.iter().copied());

        Self {
            days,
            classifier,
            candidates,
            assignments: Assignments::new(),
            leave: LeaveBudget::new(policy.leave_credits, policy.carryover_balance),
            weeks,
            strategy: policy.strategy,
            steps: Vec::new(),
        }
    }

    fn run(&mut self) {
        loop {
            if self.candidates.is_empty() {
                break;
            }
            if self.leave.is_exhausted() && self.weeks.is_exhausted() {
                break;
            }

            self.prune();
            let Some(selection) = self.select() else {
                break;
            };

            self.candidates.remove(&selection.day);
            let Some(resource) = self.assign(selection.day) else {
                continue;
            };

            debug!(
                day = %selection.day,
                ?resource,
                potential_streak = selection.rank.potential_streak,
                opportunity = selection.rank.opportunity,
                adjacent = selection.rank.adjacent,
                desirability = selection.rank.desirability,
                fallback = selection.fallback,
                "assigned day"
            );
            self.steps.push(AllocationStep {
                day: selection.day,
                resource,
                rank: selection.rank,
                fallback: selection.fallback,
            });
        }
    }

    /// Drop candidates no resource can ever cover again.
    fn prune(&mut self) {
        let leave_left = !self.leave.is_exhausted();
        let weeks = &self.weeks;
        self.candidates.retain(|&day| {
            let coverable = leave_left || weeks.has_slot(day);
            if !coverable {
                trace!(day = %day, "pruned uncoverable candidate");
            }
            coverable
        });
    }

    fn is_off(&self, day: CalendarDay) -> bool {
        self.classifier.is_off(day, &self.assignments)
    }

    fn rank(&self, day: CalendarDay, opportunity: &OpportunityMap) -> CandidateRank {
        let adjacent = day.pred().is_some_and(|d| self.is_off(d))
            || day.succ().is_some_and(|d| self.is_off(d));
        CandidateRank {
            potential_streak: potential_longest_streak(
                &self.days,
                &self.classifier,
                &self.assignments,
                day,
            ),
            opportunity: opportunity.get(day),
            adjacent,
            desirability: desirability(day, &self.classifier),
        }
    }

    fn select(&self) -> Option<Selection> {
        let current = longest_streak(&compute_off_periods(
            &self.days,
            &self.classifier,
            &self.assignments,
        ));
        let opportunity = OpportunityMap::scan(
            &self.days,
            |d| self.is_off(d),
            |d| self.candidates.contains(&d),
        );

        let mut best: Option<(CalendarDay, CandidateRank)> = None;
        for &day in &self.candidates {
            let rank = self.rank(day, &opportunity);
            if !rank.is_acceptable(current) {
                continue;
            }
            // Strictly greater: the earliest day keeps ties
            if best.map_or(true, |(_, top)| rank > top) {
                best = Some((day, rank));
            }
        }

        match best {
            Some((day, rank)) => Some(Selection {
                day,
                rank,
                fallback: false,
            }),
            None => self.fallback(&opportunity),
        }
    }

    /// Fill otherwise wasted remote slots by desirability alone.
    fn fallback(&self, opportunity: &OpportunityMap) -> Option<Selection> {
        let mut best: Option<(CalendarDay, i32)> = None;
        for &day in self.candidates.iter().filter(|&&d| self.weeks.has_slot(d)) {
            let score = desirability(day, &self.classifier);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((day, score));
            }
        }

        best.map(|(day, _)| Selection {
            day,
            rank: self.rank(day, opportunity),
            fallback: true,
        })
    }

    fn assign(&mut self, day: CalendarDay) -> Option<Resource> {
        for resource in self.strategy.preference() {
            let granted = match resource {
                Resource::Leave => self.leave.consume(),
                Resource::Remote => self.weeks.consume(day),
            };
            if granted {
                match resource {
                    Resource::Leave => self.assignments.add_leave(day),
                    Resource::Remote => self.assignments.add_remote(day),
                };
                return Some(resource);
            }
        }
        None
    }

    fn finish(self) -> AllocationOutcome {
        AllocationOutcome {
            leave_budget: self.leave.total(),
            remote_by_week: self.weeks.usage(),
            assignments: self.assignments,
            strategy: self.strategy,
            steps: self.steps,
        }
    }
}
