//! Built-in scoring rules.
//!
//! | Rule | Condition | Points |
//! |------|-----------|--------|
//! | CRITICAL_TYPE | case type is bail, custody or fraud | 40 |
//! | LONG_PENDING | pending more than 100 days | 15 |
//! | IMMINENT_DEADLINE | fewer than 10 days to deadline | 25 |
//! | REPEATED_MOTIONS | more than 2 previous motions | 10 |
//!
//! The four rules sum to at most 90.

use super::ScoringRule;
use crate::models::{CaseRecord, DEADLINE_ALERT_DAYS};

/// Case types that always warrant early hearing (lowercase).
pub const CRITICAL_CASE_TYPES: [&str; 3] = ["bail", "custody", "fraud"];

/// Liberty- or asset-critical case types.
#[derive(Debug, Clone, Copy)]
pub struct CriticalCaseType;

impl ScoringRule for CriticalCaseType {
    fn name(&self) -> &'static str {
        "CRITICAL_TYPE"
    }

    fn points(&self, case: &CaseRecord) -> u32 {
        let case_type = case.case_type.to_lowercase();
        if CRITICAL_CASE_TYPES.contains(&case_type.as_str()) {
            40
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "Bail, custody and fraud cases"
    }
}

/// Cases that have waited a long time.
#[derive(Debug, Clone, Copy)]
pub struct LongPending;

impl ScoringRule for LongPending {
    fn name(&self) -> &'static str {
        "LONG_PENDING"
    }

    fn points(&self, case: &CaseRecord) -> u32 {
        if case.pending_days > 100 {
            15
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "Pending more than 100 days"
    }
}

/// Cases whose filing deadline is close.
#[derive(Debug, Clone, Copy)]
pub struct ImminentDeadline;

impl ScoringRule for ImminentDeadline {
    fn name(&self) -> &'static str {
        "IMMINENT_DEADLINE"
    }

    fn points(&self, case: &CaseRecord) -> u32 {
        if case.deadline_days_left < DEADLINE_ALERT_DAYS {
            25
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "Fewer than 10 days to deadline"
    }
}

/// Contested cases with a history of motions.
#[derive(Debug, Clone, Copy)]
pub struct RepeatedMotions;

impl ScoringRule for RepeatedMotions {
    fn name(&self) -> &'static str {
        "REPEATED_MOTIONS"
    }

    fn points(&self, case: &CaseRecord) -> u32 {
        if case.previous_motions > 2 {
            10
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "More than 2 previous motions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_case_type() {
        for t in ["Bail", "CUSTODY", "fraud"] {
            assert_eq!(CriticalCaseType.points(&CaseRecord::new("c").with_case_type(t)), 40);
        }
        for t in ["Contract", "Land Dispute", "", " bail"] {
            assert_eq!(CriticalCaseType.points(&CaseRecord::new("c").with_case_type(t)), 0);
        }
    }

    #[test]
    fn test_long_pending_boundary() {
        assert_eq!(LongPending.points(&CaseRecord::new("c").with_pending_days(100)), 0);
        assert_eq!(LongPending.points(&CaseRecord::new("c").with_pending_days(101)), 15);
    }

    #[test]
    fn test_imminent_deadline_boundary() {
        assert_eq!(ImminentDeadline.points(&CaseRecord::new("c").with_deadline_days_left(9)), 25);
        assert_eq!(ImminentDeadline.points(&CaseRecord::new("c").with_deadline_days_left(10)), 0);
    }

    #[test]
    fn test_repeated_motions_boundary() {
        assert_eq!(RepeatedMotions.points(&CaseRecord::new("c").with_previous_motions(2)), 0);
        assert_eq!(RepeatedMotions.points(&CaseRecord::new("c").with_previous_motions(3)), 10);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(CriticalCaseType.name(), "CRITICAL_TYPE");
        assert_eq!(ImminentDeadline.description(), "Fewer than 10 days to deadline");
    }
}
