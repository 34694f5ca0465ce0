//! Case triage for the U-Engine ecosystem.
//!
//! Scores case records by urgency and packs them, most urgent first, into
//! a weekday hearing calendar with a fixed working window and lunch break.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CaseRecord`, `UrgencyLevel`,
//!   `WorkdayTemplate`, `TimeWindow`, `Schedule`, `ScheduledSlot`
//! - **`scoring`**: Rule-based urgency scorer, ranking, batch summary
//! - **`scheduler`**: Day-bounded greedy scheduler and KPIs
//! - **`ingest`**: CSV reading and column normalization
//! - **`validation`**: Batch integrity checks (duplicate or blank IDs)
//! - **`pipeline`**: End-to-end runs
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_triage::models::CaseRecord;
//! use u_triage::pipeline::triage;
//!
//! let cases = vec![
//!     CaseRecord::new("C001").with_case_type("Contract").with_deadline_days_left(45),
//!     CaseRecord::new("C002").with_case_type("Bail").with_deadline_days_left(3),
//! ];
//! let now = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap().and_hms_opt(9, 0, 0).unwrap();
//!
//! let (ranked, schedule) = triage(cases, now);
//! assert_eq!(ranked[0].case.id, "C002");
//! assert_eq!(schedule.slot_count(), 2);
//! ```
//!
//! Scoring and scheduling are pure: they take every input as a parameter,
//! including the "now" timestamp, and never fail.

pub mod error;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod scheduler;
pub mod scoring;
pub mod validation;

pub use error::TriageError;
