use clap::Args;
use leaveplan_core::format::{format_day_list, format_period};
use leaveplan_core::{AllocationEngine, Config, OptimizedPlan, PlanPolicy, Strategy};
use tracing::debug;

use super::month_and_year;

#[derive(Args)]
pub struct PlanArgs {
    /// Month (1-12), defaults to the current month
    #[arg(long)]
    month: Option<u32>,
    /// Year, defaults to the current year
    #[arg(long)]
    year: Option<i32>,
    /// Leave credits (overrides policy.leave_credits)
    #[arg(long)]
    leave: Option<u32>,
    /// Max remote days per week (overrides policy.max_remote_per_week)
    #[arg(long)]
    remote: Option<u32>,
    /// A = remote first, B = leave first
    #[arg(long)]
    strategy: Option<Strategy>,
    /// Carried-over leave credits (overrides policy.carryover_balance)
    #[arg(long)]
    carryover: Option<u32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (month, year) = month_and_year(args.month, args.year)?;

    let defaults = config.policy();
    let policy = PlanPolicy {
        max_remote_per_week: args.remote.unwrap_or(defaults.max_remote_per_week),
        leave_credits: args.leave.unwrap_or(defaults.leave_credits),
        carryover_balance: args.carryover.unwrap_or(defaults.carryover_balance),
        strategy: args.strategy.unwrap_or(defaults.strategy),
    };
    let catalog = config.holidays_for(year);
    debug!(month, year, ?policy, holidays = catalog.len(), "planning month");
    let plan = AllocationEngine::new(policy).optimize(month, year, catalog.holidays())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_plan(plan: &OptimizedPlan) {
    println!("{} {} (strategy {})", plan.month_name, plan.year, plan.strategy);
    println!();

    if plan.holidays_in_month.is_empty() {
        println!("Holidays:     None");
    } else {
        println!("Holidays:");
        for holiday in &plan.holidays_in_month {
            let kind = if holiday.is_special { "special" } else { "regular" };
            println!("  {}  {} ({kind})", holiday.day, holiday.name);
        }
    }
    println!("Leave days:   {}", format_day_list(&plan.leave_dates()));
    println!("Remote days:  {}", format_day_list(&plan.remote_dates()));
    println!();

    println!("Off periods:");
    for period in &plan.off_periods {
        println!("  {}", format_period(period));
    }
    println!();

    println!("Longest streak:   {} days", plan.longest_streak);
    println!("Total days off:   {}", plan.total_days_off);
    println!(
        "Leave used:       {} ({} remaining)",
        plan.leaves_used, plan.leaves_remaining
    );
    println!("Remote used:      {}", plan.remote_used);
    println!(
        "On site:          {} of {} workdays",
        plan.on_site_days, plan.workdays
    );
}
