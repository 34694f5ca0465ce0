//! Urgency scoring rules and scorer.
//!
//! Maps a case record to an integer urgency score in `0..=100` and its
//! urgency band, and ranks batches by that score.
//!
//! # Usage
//!
//! ```
//! use u_triage::models::CaseRecord;
//! use u_triage::scoring::{rules, UrgencyScorer};
//!
//! let scorer = UrgencyScorer::new()
//!     .with_rule(rules::CriticalCaseType)
//!     .with_rule(rules::ImminentDeadline);
//!
//! let case = CaseRecord::new("C001").with_case_type("Bail");
//! assert_eq!(scorer.score(&case), 65);
//! ```
//!
//! # Precedence
//!
//! 1. An explicit urgency label ("High", "med", "urgent", ...) fixes the score.
//! 2. Otherwise a score carried over from the source table is used, clamped.
//! 3. Otherwise the heuristic rules are summed and clamped to 100.

pub mod rules;
mod scorer;
mod summary;

pub use scorer::{score_and_rank, ScoredCase, UrgencyScorer};
pub use summary::TriageSummary;

use crate::models::CaseRecord;
use std::fmt::Debug;

/// A heuristic urgency rule.
///
/// # Score Convention
/// Rules return the points they add to a case's score. Points are summed
/// across rules and the total is clamped to 100, so a rule never needs to
/// know what the others contribute.
pub trait ScoringRule: Send + Sync + Debug {
    /// Rule name (e.g., "CRITICAL_TYPE").
    fn name(&self) -> &'static str;

    /// Points this rule adds for `case` (0 when it does not apply).
    fn points(&self, case: &CaseRecord) -> u32;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
