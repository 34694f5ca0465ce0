//! Day-bounded greedy scheduler.
//!
//! # Algorithm
//!
//! Cases arrive already ranked. A cursor walks forward through working
//! days; for each case:
//!
//! 1. Tentative slot = [cursor, cursor + duration of the case's level).
//! 2. If the slot overlaps lunch, jump the cursor to lunch end and rebuild
//!    the slot. Only one lunch exists per day, so one correction suffices.
//! 3. If the slot (as adjusted) ends after the day end, move the cursor to
//!    the next weekday's start and rebuild the slot there.
//! 4. Commit the slot and move the cursor to its end.
//!
//! Slots are never split. No per-day case cap exists here.
//!
//! # Complexity
//! O(n) for n cases; one pass, no backtracking.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::TriageError;
use crate::models::{
    first_workday, is_workday, next_workday, Schedule, ScheduledSlot, TimeWindow, WorkdayTemplate,
};
use crate::scoring::ScoredCase;

/// Greedy packer of ranked cases into working-day windows.
///
/// Holds only the immutable template; every call keeps its cursor on the
/// stack, so one scheduler can serve independent runs concurrently.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_triage::models::CaseRecord;
/// use u_triage::scheduler::DayBoundedScheduler;
/// use u_triage::scoring::score_and_rank;
///
/// let ranked = score_and_rank(vec![
///     CaseRecord::new("C1").with_urgency_label("High"),
///     CaseRecord::new("C2").with_urgency_label("Low"),
/// ]);
/// // Saturday: scheduling starts Monday 10:00.
/// let now = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap().and_hms_opt(9, 0, 0).unwrap();
///
/// let schedule = DayBoundedScheduler::default().schedule(&ranked, now);
/// assert_eq!(schedule.slot_count(), 2);
/// assert_eq!(schedule.day_labels(), vec!["Mon 20 Oct"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayBoundedScheduler {
    template: WorkdayTemplate,
}

impl DayBoundedScheduler {
    /// Creates a scheduler over the given template without checking it.
    pub fn new(template: WorkdayTemplate) -> Self {
        Self { template }
    }

    /// Creates a scheduler, rejecting templates that cannot place every slot.
    pub fn try_new(template: WorkdayTemplate) -> Result<Self, TriageError> {
        template.validate()?;
        Ok(Self::new(template))
    }

    pub fn template(&self) -> &WorkdayTemplate {
        &self.template
    }

    /// Schedules ranked cases for a run started at `now`.
    ///
    /// The first cursor is the start of `now`'s day, or of the following
    /// Monday if `now` falls on a weekend.
    pub fn schedule(&self, cases: &[ScoredCase], now: NaiveDateTime) -> Schedule {
        self.schedule_from(cases, self.template.first_cursor(now))
    }

    /// Schedules ranked cases starting exactly at `cursor`.
    ///
    /// A weekend cursor moves to the next Monday's day start. A weekday
    /// cursor before the day start is raised to it; otherwise it is used
    /// as given.
    pub fn schedule_from(&self, cases: &[ScoredCase], cursor: NaiveDateTime) -> Schedule {
        let mut bounds = self.template.day_bounds(first_workday(cursor.date()));
        let mut cursor = if is_workday(cursor.date()) {
            cursor.max(bounds.window.start)
        } else {
            bounds.window.start
        };
        let mut schedule = Schedule::new();

        for case in cases {
            let duration = self.template.duration_for(case.level);
            let mut slot = TimeWindow::starting_at(cursor, duration);

            if slot.overlaps(&bounds.lunch) {
                debug!(case_id = %case.id(), at = %cursor, "slot crosses lunch, moving past break");
                cursor = bounds.lunch.end;
                slot = TimeWindow::starting_at(cursor, duration);
            }

            if slot.end > bounds.window.end {
                bounds = self.template.day_bounds(next_workday(bounds.date));
                debug!(case_id = %case.id(), next_day = %bounds.date, "day full, rolling over");
                cursor = bounds.window.start;
                slot = TimeWindow::starting_at(cursor, duration);
            }

            schedule.add_slot(ScheduledSlot::new(
                case.id(),
                slot.start,
                slot.end,
                case.level,
                case.score,
            ));
            cursor = slot.end;
        }

        info!(
            cases = cases.len(),
            days = schedule.day_count(),
            "scheduling run complete"
        );
        schedule
    }
}
