//! Schedule quality metrics (KPIs).
//!
//! Computes per-day load indicators from a completed schedule and the
//! template it was built against.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days used | Distinct hearing days |
//! | Cases per day | Slot count per day label |
//! | Booked minutes | Sum of slot lengths per day |
//! | Utilization | Booked / bookable minutes (window minus lunch) |
//! | First start / last end | Span of the whole schedule |

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Schedule, WorkdayTemplate};

/// Load indicators for one hearing day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLoad {
    pub label: String,
    pub cases: usize,
    pub booked_minutes: i64,
    /// Booked share of the bookable minutes (0.0..=1.0 under a valid template).
    pub utilization: f64,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    pub days_used: usize,
    /// Per-day load, in schedule day order.
    pub per_day: Vec<DayLoad>,
    /// Mean of per-day utilization (0.0 when nothing is scheduled).
    pub avg_utilization: f64,
    pub first_start: Option<NaiveDateTime>,
    pub last_end: Option<NaiveDateTime>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the template it was built with.
    pub fn calculate(schedule: &Schedule, template: &WorkdayTemplate) -> Self {
        let available = template.available_minutes();

        let per_day: Vec<DayLoad> = schedule
            .days
            .iter()
            .map(|day| {
                let booked = day.booked_minutes();
                let utilization = if available > 0 {
                    booked as f64 / available as f64
                } else {
                    0.0
                };
                DayLoad {
                    label: day.label.clone(),
                    cases: day.case_count(),
                    booked_minutes: booked,
                    utilization,
                }
            })
            .collect();

        let avg_utilization = if per_day.is_empty() {
            0.0
        } else {
            per_day.iter().map(|d| d.utilization).sum::<f64>() / per_day.len() as f64
        };

        Self {
            days_used: schedule.day_count(),
            per_day,
            avg_utilization,
            first_start: schedule.slots().map(|s| s.start).min(),
            last_end: schedule.last_end(),
        }
    }

    /// Load for one day label.
    pub fn day(&self, label: &str) -> Option<&DayLoad> {
        self.per_day.iter().find(|d| d.label == label)
    }

    /// Whether every day stays at or under `max_utilization`.
    pub fn within_load(&self, max_utilization: f64) -> bool {
        self.per_day.iter().all(|d| d.utilization <= max_utilization)
    }
}
