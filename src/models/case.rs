//! Case record model.
//!
//! A case is one row of the triage table after column normalization.
//! Numeric fields are already defaulted (missing or malformed → 0) by the
//! ingestion layer, so every field here is total.

use serde::{Deserialize, Serialize};

/// Cases with fewer days left than this are flagged as deadline-critical.
pub const DEADLINE_ALERT_DAYS: u32 = 10;

/// A court case awaiting a hearing slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Case identifier, unique within a batch.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Case category (Bail, Custody, Fraud, Contract, ...).
    pub case_type: String,
    /// Days the case has been pending.
    pub pending_days: u32,
    /// Days until the next filing deadline.
    pub deadline_days_left: u32,
    /// Number of motions already filed.
    pub previous_motions: u32,
    /// Short free-text description.
    pub description: String,
    /// Explicit urgency label, if the table carried one.
    pub urgency_label: Option<String>,
    /// Score already present in the source table, if any.
    pub precomputed_score: Option<i64>,
}

impl CaseRecord {
    /// Creates a case with the given ID and all other fields defaulted.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            case_type: String::new(),
            pending_days: 0,
            deadline_days_left: 0,
            previous_motions: 0,
            description: String::new(),
            urgency_label: None,
            precomputed_score: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_case_type(mut self, case_type: impl Into<String>) -> Self {
        self.case_type = case_type.into();
        self
    }

    pub fn with_pending_days(mut self, days: u32) -> Self {
        self.pending_days = days;
        self
    }

    pub fn with_deadline_days_left(mut self, days: u32) -> Self {
        self.deadline_days_left = days;
        self
    }

    pub fn with_previous_motions(mut self, motions: u32) -> Self {
        self.previous_motions = motions;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets an explicit urgency label ("High", "med", "urgent", ...).
    pub fn with_urgency_label(mut self, label: impl Into<String>) -> Self {
        self.urgency_label = Some(label.into());
        self
    }

    /// Sets a score carried over from the source table.
    pub fn with_precomputed_score(mut self, score: i64) -> Self {
        self.precomputed_score = Some(score);
        self
    }

    /// Whether the filing deadline is close enough to flag.
    pub fn has_deadline_alert(&self) -> bool {
        self.deadline_days_left < DEADLINE_ALERT_DAYS
    }

    /// Heading used by case cards: "ID — Type".
    pub fn heading(&self) -> String {
        format!("{} — {}", self.id, self.case_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_builder() {
        let case = CaseRecord::new("C001")
            .with_name("State v. Doe")
            .with_case_type("Bail")
            .with_pending_days(120)
            .with_deadline_days_left(5)
            .with_previous_motions(3)
            .with_description("Bail hearing")
            .with_urgency_label("High")
            .with_precomputed_score(80);

        assert_eq!(case.id, "C001");
        assert_eq!(case.name, "State v. Doe");
        assert_eq!(case.case_type, "Bail");
        assert_eq!(case.pending_days, 120);
        assert_eq!(case.deadline_days_left, 5);
        assert_eq!(case.previous_motions, 3);
        assert_eq!(case.urgency_label.as_deref(), Some("High"));
        assert_eq!(case.precomputed_score, Some(80));
        assert_eq!(case.heading(), "C001 — Bail");
    }

    #[test]
    fn test_defaults() {
        let case = CaseRecord::new("C002");
        assert!(case.case_type.is_empty());
        assert_eq!(case.pending_days, 0);
        assert!(case.urgency_label.is_none());
        // A defaulted deadline of 0 days is inside the alert window.
        assert!(case.has_deadline_alert());
    }

    #[test]
    fn test_deadline_alert_boundary() {
        assert!(CaseRecord::new("a").with_deadline_days_left(9).has_deadline_alert());
        assert!(!CaseRecord::new("b").with_deadline_days_left(10).has_deadline_alert());
    }
}
