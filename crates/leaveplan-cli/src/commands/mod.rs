pub mod config;
pub mod holidays;
pub mod plan;

use chrono::Datelike;

/// Resolve a 1-based CLI month and a year, defaulting to today.
///
/// Returns the engine's 0-based month index.
pub fn month_and_year(
    month: Option<u32>,
    year: Option<i32>,
) -> Result<(u32, i32), Box<dyn std::error::Error>> {
    let today = chrono::Local::now().date_naive();
    let month = month.unwrap_or_else(|| today.month());
    if !(1..=12).contains(&month) {
        return Err(format!("month must be between 1 and 12, got {month}").into());
    }
    Ok((month - 1, year.unwrap_or_else(|| today.year())))
}
