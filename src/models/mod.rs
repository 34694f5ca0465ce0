//! Triage domain models.
//!
//! Provides the data types shared by scoring and scheduling: the case
//! record, the urgency band, the working-day template, and the produced
//! schedule.
//!
//! # Domain Mappings
//!
//! | u-triage | Court | Clinic | Support desk |
//! |----------|-------|--------|--------------|
//! | CaseRecord | Case file | Patient referral | Ticket |
//! | UrgencyLevel | Hearing priority | Triage category | Severity |
//! | WorkdayTemplate | Court sitting hours | Clinic hours | Shift |
//! | Schedule | Cause list | Appointment book | Callback plan |

mod calendar;
mod case;
mod schedule;
mod urgency;

pub use calendar::{first_workday, is_workday, next_workday, DayBounds, TimeWindow, WorkdayTemplate};
pub use case::{CaseRecord, DEADLINE_ALERT_DAYS};
pub use schedule::{day_label, DaySchedule, Schedule, ScheduledSlot, DAY_LABEL_FORMAT, TIME_LABEL_FORMAT};
pub use urgency::{UrgencyLevel, HIGH_THRESHOLD, MAX_SCORE, MEDIUM_THRESHOLD};
