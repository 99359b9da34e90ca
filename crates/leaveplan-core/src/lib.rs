//! # Leaveplan Core Library
//!
//! Plans a month of leave and remote-work days so that the employee gets
//! the longest possible uninterrupted stretch of days off. Weekends,
//! public holidays, leave days and remote days all count as off; leave
//! credits and per-week remote slots are the scarce resources.
//!
//! The `leaveplan-cli` binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Calendar**: [`CalendarDay`] value type, month enumeration, ISO weeks
//! - **Holidays**: [`HolidayCatalog`] with bundled Philippine holidays and
//!   custom company holidays
//! - **Engine**: greedy [`AllocationEngine`] driven by streak, opportunity,
//!   adjacency and desirability ranking
//! - **Storage**: TOML configuration for policy defaults and custom holidays
//!
//! ## Example
//!
//! ```
//! use leaveplan_core::{optimize, HolidayCatalog, Strategy};
//!
//! let catalog = HolidayCatalog::philippines_2025();
//! // April 2025, 1 remote day per week, 2 leave credits
//! let plan = optimize(3, 2025, 1, 2, catalog.holidays(), Strategy::A, 0).unwrap();
//! assert!(plan.longest_streak >= 4);
//! ```

pub mod calendar;
pub mod classify;
pub mod engine;
pub mod error;
pub mod format;
pub mod holiday;
pub mod plan;
pub mod scoring;
pub mod storage;
pub mod streak;

pub use calendar::{CalendarDay, Month, SUPPORTED_YEARS};
pub use classify::{Assignments, DayClassifier, DayKind};
pub use engine::{
    optimize, AllocationEngine, AllocationStep, CandidateRank, PlanPolicy, Resource, Strategy,
    WeekUsage, MAX_REMOTE_PER_WEEK,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use holiday::{Holiday, HolidayCatalog};
pub use plan::{LeaveAssignment, LeaveKind, OptimizedPlan, RemoteAssignment};
pub use storage::Config;
pub use streak::OffDayPeriod;
