//! Property tests for month planning.

use std::collections::{BTreeMap, HashSet};

use leaveplan_core::{
    optimize, CalendarDay, DayClassifier, Holiday, Month, OptimizedPlan, Strategy as PlanStrategy,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Request {
    month: u32,
    year: i32,
    max_remote: u32,
    leave: u32,
    carryover: u32,
    strategy: PlanStrategy,
    holidays: Vec<Holiday>,
}

impl Request {
    fn run(&self) -> OptimizedPlan {
        optimize(
            self.month,
            self.year,
            self.max_remote,
            self.leave,
            &self.holidays,
            self.strategy,
            self.carryover,
        )
        .unwrap()
    }
}

fn arb_strategy() -> impl Strategy<Value = PlanStrategy> {
    prop_oneof![Just(PlanStrategy::A), Just(PlanStrategy::B)]
}

fn arb_request() -> impl Strategy<Value = Request> {
    (
        0u32..12,
        2020i32..=2030,
        0u32..=3,
        0u32..=6,
        0u32..=2,
        arb_strategy(),
        prop::collection::vec(1u32..=28, 0..4),
    )
        .prop_map(|(month, year, max_remote, leave, carryover, strategy, days)| {
            let holidays = days
                .into_iter()
                .filter_map(|d| CalendarDay::new(year, month, d))
                .map(Holiday::custom)
                .collect();
            Request {
                month,
                year,
                max_remote,
                leave,
                carryover,
                strategy,
                holidays,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_budgets_are_respected(req in arb_request()) {
        let plan = req.run();
        prop_assert!(plan.leaves_used <= req.leave + req.carryover);
        prop_assert_eq!(plan.leaves_used + plan.leaves_remaining, req.leave + req.carryover);

        let mut per_week: BTreeMap<(i32, u32), u32> = BTreeMap::new();
        for day in plan.remote_dates() {
            let week = day.iso_week();
            *per_week.entry((week.year(), week.week())).or_insert(0) += 1;
        }
        for used in per_week.values() {
            prop_assert!(*used <= req.max_remote);
        }
        for usage in &plan.remote_by_week {
            prop_assert!(usage.used <= usage.cap);
        }
    }

    #[test]
    fn prop_assignments_are_disjoint_workdays(req in arb_request()) {
        let plan = req.run();
        let classifier = DayClassifier::new(&req.holidays);
        let leave: HashSet<CalendarDay> = plan.leave_dates().into_iter().collect();

        for day in plan.leave_dates().into_iter().chain(plan.remote_dates()) {
            prop_assert!(classifier.is_workday(day));
            prop_assert_eq!(day.month(), req.month);
            prop_assert_eq!(day.year(), req.year);
        }
        for day in plan.remote_dates() {
            prop_assert!(!leave.contains(&day));
        }

        let leave_sorted = plan.leave_dates().windows(2).all(|w| w[0] < w[1]);
        let remote_sorted = plan.remote_dates().windows(2).all(|w| w[0] < w[1]);
        prop_assert!(leave_sorted && remote_sorted);
    }

    #[test]
    fn prop_streaks_match_periods(req in arb_request()) {
        let plan = req.run();
        let longest = plan.off_periods.iter().map(|p| p.length).max().unwrap_or(0);
        prop_assert_eq!(plan.longest_streak, longest);

        let classifier = DayClassifier::new(&req.holidays);
        let off_days = Month::new(req.year, req.month)
            .unwrap()
            .days()
            .into_iter()
            .filter(|&d| !classifier.is_workday(d))
            .count() as u32;
        prop_assert_eq!(plan.total_days_off, off_days + plan.leaves_used + plan.remote_used);
        prop_assert_eq!(plan.on_site_days + plan.leaves_used + plan.remote_used, plan.workdays);

        for pair in plan.off_periods.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn prop_optimize_is_deterministic(req in arb_request()) {
        prop_assert_eq!(req.run(), req.run());
    }

    #[test]
    fn prop_more_leave_never_shortens_longest_streak(req in arb_request()) {
        let base = req.run();
        let more = Request { leave: req.leave + 1, ..req.clone() }.run();
        prop_assert!(more.longest_streak >= base.longest_streak);
    }
}
