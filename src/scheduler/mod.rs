//! Day-bounded scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `DayBoundedScheduler` packs ranked cases greedily into a recurring
//! working-day template, skipping weekends and the lunch break and
//! rolling over to the next weekday when a day is full. It is not
//! optimal; it is deterministic and single-pass.
//!
//! # KPI
//!
//! `ScheduleKpi` reports days used and per-day load and utilization.

mod day_bounded;
mod kpi;

pub use day_bounded::DayBoundedScheduler;
pub use kpi::{DayLoad, ScheduleKpi};
