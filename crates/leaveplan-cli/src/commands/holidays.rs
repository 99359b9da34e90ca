use clap::Subcommand;
use leaveplan_core::{CalendarDay, Config, Month};

use super::month_and_year;

#[derive(Subcommand)]
pub enum HolidaysAction {
    /// List holidays of a month, custom holidays included
    List {
        /// Month (1-12), defaults to the current month
        #[arg(long)]
        month: Option<u32>,
        /// Year, defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add or remove a custom holiday
    Toggle {
        /// Date (YYYY-MM-DD)
        date: CalendarDay,
    },
}

pub fn run(action: HolidaysAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HolidaysAction::List { month, year, json } => {
            let config = Config::load()?;
            let (month, year) = month_and_year(month, year)?;
            let month = Month::new(year, month)?;
            let holidays = config.holidays_for(year).in_month(&month);

            if json {
                println!("{}", serde_json::to_string_pretty(&holidays)?);
            } else if holidays.is_empty() {
                println!("No holidays in {month}");
            } else {
                for holiday in holidays {
                    let kind = if holiday.is_special { "special" } else { "regular" };
                    println!("{}  {} ({kind})", holiday.day, holiday.name);
                }
            }
        }
        HolidaysAction::Toggle { date } => {
            let mut config = Config::load()?;
            let added = config.toggle_custom_holiday(date);
            config.save()?;
            if added {
                println!("added custom holiday {date}");
            } else {
                println!("removed custom holiday {date}");
            }
        }
    }
    Ok(())
}
