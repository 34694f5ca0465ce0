//! Schedule (solution) model.
//!
//! A schedule is the ordered list of hearing slots produced by one
//! scheduling run, grouped by calendar day in the order the days were
//! first used.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{TimeWindow, UrgencyLevel};

/// Format of the day label ("Mon 20 Oct").
pub const DAY_LABEL_FORMAT: &str = "%a %d %b";
/// Format of slot start/end labels ("10:00 AM").
pub const TIME_LABEL_FORMAT: &str = "%I:%M %p";

/// One case placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    /// Scheduled case ID.
    pub case_id: String,
    /// Day label of the slot's calendar day.
    pub day_label: String,
    /// Slot start.
    pub start: NaiveDateTime,
    /// Slot end (exclusive).
    pub end: NaiveDateTime,
    /// Urgency level the slot length was chosen from.
    pub urgency_level: UrgencyLevel,
    /// Urgency score of the case (denormalized for display).
    pub urgency_score: u8,
}

impl ScheduledSlot {
    /// Creates a slot, deriving the day label from `start`.
    pub fn new(
        case_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        urgency_level: UrgencyLevel,
        urgency_score: u8,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            day_label: day_label(start.date()),
            start,
            end,
            urgency_level,
            urgency_score,
        }
    }

    #[inline]
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Start time label ("10:00 AM").
    pub fn start_label(&self) -> String {
        self.start.format(TIME_LABEL_FORMAT).to_string()
    }

    /// End time label ("11:00 AM").
    pub fn end_label(&self) -> String {
        self.end.format(TIME_LABEL_FORMAT).to_string()
    }
}

/// All slots sharing one day label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub label: String,
    pub date: NaiveDate,
    pub slots: Vec<ScheduledSlot>,
}

impl DaySchedule {
    /// Number of cases heard on this day.
    pub fn case_count(&self) -> usize {
        self.slots.len()
    }

    /// Total booked minutes on this day.
    pub fn booked_minutes(&self) -> i64 {
        self.slots.iter().map(|s| s.duration_minutes()).sum()
    }
}

/// A complete hearing schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Days in first-use order.
    pub days: Vec<DaySchedule>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot to the group matching its day label.
    pub fn add_slot(&mut self, slot: ScheduledSlot) {
        match self.days.iter_mut().find(|d| d.label == slot.day_label) {
            Some(day) => day.slots.push(slot),
            None => self.days.push(DaySchedule {
                label: slot.day_label.clone(),
                date: slot.day(),
                slots: vec![slot],
            }),
        }
    }

    /// All slots in production order.
    pub fn slots(&self) -> impl Iterator<Item = &ScheduledSlot> {
        self.days.iter().flat_map(|d| d.slots.iter())
    }

    /// Finds the slot for a given case.
    pub fn slot_for_case(&self, case_id: &str) -> Option<&ScheduledSlot> {
        self.slots().find(|s| s.case_id == case_id)
    }

    /// Finds a day group by label.
    pub fn day(&self, label: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.label == label)
    }

    /// Day labels in first-use order.
    pub fn day_labels(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.label.as_str()).collect()
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// End of the last slot.
    pub fn last_end(&self) -> Option<NaiveDateTime> {
        self.slots().map(|s| s.end).max()
    }
}

/// Day label for a date ("Mon 20 Oct").
pub fn day_label(date: NaiveDate) -> String {
    date.format(DAY_LABEL_FORMAT).to_string()
}
