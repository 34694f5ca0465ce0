//! Working-day calendar and time window models.
//!
//! Defines the recurring hearing-day template: a working window on
//! weekdays, a mandatory lunch break inside it, and a slot duration per
//! urgency level.
//!
//! # Time Model
//! All timestamps are naive local date-times. The caller decides which
//! clock "now" comes from; nothing here reads the wall clock.
//!
//! # Precedence
//! The lunch break overrides the working window. A time is available iff:
//! - It falls on a weekday (Monday..Friday), AND
//! - It falls within the working window, AND
//! - It does NOT fall within the lunch break.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::UrgencyLevel;
use crate::error::TriageError;

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Window of the given length beginning at `start`.
    pub fn starting_at(start: NaiveDateTime, length: Duration) -> Self {
        Self::new(start, start + length)
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside this window.
    pub fn covers(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// The concrete working window and lunch break of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub date: NaiveDate,
    /// Working window (day start to day end).
    pub window: TimeWindow,
    /// Lunch break inside the window.
    pub lunch: TimeWindow,
}

/// Recurring hearing-day template.
///
/// The default is the court's standard day: 10:00–16:00 on weekdays with
/// lunch 12:30–13:00, and slots of 60/25/10 minutes for
/// High/Medium/Low cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayTemplate {
    /// Time the first slot of a day may start.
    pub day_start: NaiveTime,
    /// Time every slot of a day must end by.
    pub day_end: NaiveTime,
    /// Lunch break start.
    pub lunch_start: NaiveTime,
    /// Lunch break end.
    pub lunch_end: NaiveTime,
    /// Slot length per urgency level (minutes).
    pub durations: BTreeMap<UrgencyLevel, i64>,
    /// Slot length used when a level has no entry (minutes).
    pub fallback_minutes: i64,
}

impl Default for WorkdayTemplate {
    fn default() -> Self {
        let durations = BTreeMap::from([
            (UrgencyLevel::High, 60),
            (UrgencyLevel::Medium, 25),
            (UrgencyLevel::Low, 10),
        ]);
        Self {
            day_start: hm(10, 0),
            day_end: hm(16, 0),
            lunch_start: hm(12, 30),
            lunch_end: hm(13, 0),
            durations,
            fallback_minutes: 10,
        }
    }
}

impl WorkdayTemplate {
    /// Sets the working window.
    pub fn with_hours(mut self, day_start: NaiveTime, day_end: NaiveTime) -> Self {
        self.day_start = day_start;
        self.day_end = day_end;
        self
    }

    /// Sets the lunch break.
    pub fn with_lunch(mut self, lunch_start: NaiveTime, lunch_end: NaiveTime) -> Self {
        self.lunch_start = lunch_start;
        self.lunch_end = lunch_end;
        self
    }

    /// Sets the slot length for one level.
    pub fn with_duration(mut self, level: UrgencyLevel, minutes: i64) -> Self {
        self.durations.insert(level, minutes);
        self
    }

    /// Removes the slot length for one level, so it uses the fallback.
    pub fn without_duration(mut self, level: UrgencyLevel) -> Self {
        self.durations.remove(&level);
        self
    }

    /// Slot length for a level, falling back to `fallback_minutes`.
    pub fn duration_for(&self, level: UrgencyLevel) -> Duration {
        let minutes = self
            .durations
            .get(&level)
            .copied()
            .unwrap_or(self.fallback_minutes);
        Duration::minutes(minutes)
    }

    /// Slot length for a free-text level name.
    ///
    /// Unrecognized names get the fallback length.
    pub fn duration_for_label(&self, label: &str) -> Duration {
        match UrgencyLevel::from_label(label) {
            Some(level) => self.duration_for(level),
            None => Duration::minutes(self.fallback_minutes),
        }
    }

    /// Human-readable slot length ("1 hr", "25 min", "1 hr 30 min").
    pub fn duration_label(&self, level: UrgencyLevel) -> String {
        let minutes = self.duration_for(level).num_minutes();
        match (minutes / 60, minutes % 60) {
            (0, m) => format!("{m} min"),
            (h, 0) => format!("{h} hr"),
            (h, m) => format!("{h} hr {m} min"),
        }
    }

    /// Bookable minutes per day (window minus lunch).
    pub fn available_minutes(&self) -> i64 {
        let window = (self.day_end - self.day_start).num_minutes();
        let lunch = (self.lunch_end - self.lunch_start).num_minutes();
        window - lunch
    }

    /// Concrete bounds for a date.
    pub fn day_bounds(&self, date: NaiveDate) -> DayBounds {
        DayBounds {
            date,
            window: TimeWindow::new(date.and_time(self.day_start), date.and_time(self.day_end)),
            lunch: TimeWindow::new(
                date.and_time(self.lunch_start),
                date.and_time(self.lunch_end),
            ),
        }
    }

    /// Where scheduling begins for a run started at `now`.
    ///
    /// Weekend dates advance to Monday. The time is always reset to the day
    /// start, even when `now` is later in the working day.
    pub fn first_cursor(&self, now: NaiveDateTime) -> NaiveDateTime {
        first_workday(now.date()).and_time(self.day_start)
    }

    /// Whether `slot` is a legal placement under this template.
    pub fn permits(&self, slot: &TimeWindow) -> bool {
        let date = slot.start.date();
        if !is_workday(date) {
            return false;
        }
        let bounds = self.day_bounds(date);
        bounds.window.covers(slot) && !slot.overlaps(&bounds.lunch)
    }

    /// Checks that the template can place every slot.
    ///
    /// Each duration must be positive and fit in the morning block, so a
    /// slot that rolls over to a fresh day never touches lunch or the day
    /// end.
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.day_start >= self.day_end {
            return Err(TriageError::InvalidTemplate(format!(
                "day start {} is not before day end {}",
                self.day_start, self.day_end
            )));
        }
        if self.lunch_start >= self.lunch_end {
            return Err(TriageError::InvalidTemplate(format!(
                "lunch start {} is not before lunch end {}",
                self.lunch_start, self.lunch_end
            )));
        }
        if self.lunch_start < self.day_start || self.lunch_end > self.day_end {
            return Err(TriageError::InvalidTemplate(format!(
                "lunch {}-{} lies outside working hours {}-{}",
                self.lunch_start, self.lunch_end, self.day_start, self.day_end
            )));
        }

        let morning = (self.lunch_start - self.day_start).num_minutes();
        let lengths = self
            .durations
            .iter()
            .map(|(level, m)| (level.name(), *m))
            .chain(std::iter::once(("fallback", self.fallback_minutes)));
        for (name, minutes) in lengths {
            if minutes <= 0 {
                return Err(TriageError::InvalidTemplate(format!(
                    "{name} slot length must be positive, got {minutes} min"
                )));
            }
            if minutes > morning {
                return Err(TriageError::InvalidTemplate(format!(
                    "{name} slot of {minutes} min does not fit the {morning} min morning block"
                )));
            }
        }
        Ok(())
    }
}

/// Whether a date is a hearing day (Monday..Friday).
#[inline]
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `date` itself if it is a weekday, otherwise the following Monday.
pub fn first_workday(date: NaiveDate) -> NaiveDate {
    date.iter_days().find(|d| is_workday(*d)).unwrap_or(date)
}

/// The first weekday strictly after `date`.
pub fn next_workday(date: NaiveDate) -> NaiveDate {
    date.iter_days()
        .skip(1)
        .find(|d| is_workday(*d))
        .unwrap_or(date)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
