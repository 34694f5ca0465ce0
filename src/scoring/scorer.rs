//! Urgency scorer: label override, carried-over score, then heuristic rules.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{rules, ScoringRule};
use crate::models::{CaseRecord, UrgencyLevel, MAX_SCORE};

/// A case with its derived urgency attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCase {
    pub case: CaseRecord,
    /// Urgency score in `0..=100`.
    pub score: u8,
    /// Band derived from `score`.
    pub level: UrgencyLevel,
}

impl ScoredCase {
    /// Attaches a score; the level is derived from it.
    pub fn new(case: CaseRecord, score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            case,
            score,
            level: UrgencyLevel::from_score(score),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.case.id
    }
}

/// Composable urgency scorer.
///
/// Holds an ordered list of heuristic rules. The scorer has no state
/// beyond its rules, so scoring the same record twice always yields the
/// same result.
///
/// # Example
/// ```
/// use u_triage::models::{CaseRecord, UrgencyLevel};
/// use u_triage::scoring::UrgencyScorer;
///
/// let scorer = UrgencyScorer::standard();
/// let scored = scorer.evaluate(
///     CaseRecord::new("C7")
///         .with_case_type("Custody")
///         .with_deadline_days_left(3),
/// );
/// assert_eq!(scored.score, 65);
/// assert_eq!(scored.level, UrgencyLevel::Medium);
/// ```
#[derive(Debug, Clone)]
pub struct UrgencyScorer {
    rules: Vec<Arc<dyn ScoringRule>>,
}

impl UrgencyScorer {
    /// Creates a scorer with no heuristic rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard court triage rule set.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::CriticalCaseType)
            .with_rule(rules::LongPending)
            .with_rule(rules::ImminentDeadline)
            .with_rule(rules::RepeatedMotions)
    }

    /// Appends a heuristic rule.
    pub fn with_rule<R: ScoringRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Rule names, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Urgency score for a case in `0..=100`.
    pub fn score(&self, case: &CaseRecord) -> u8 {
        if let Some(level) = case.urgency_label.as_deref().and_then(UrgencyLevel::from_label) {
            return level.label_score();
        }

        if let Some(carried) = case.precomputed_score {
            return carried.clamp(0, i64::from(MAX_SCORE)) as u8;
        }

        let total: u32 = self
            .rules
            .iter()
            .map(|r| r.points(case))
            .fold(0, u32::saturating_add);
        total.min(u32::from(MAX_SCORE)) as u8
    }

    /// Per-rule points for a case, skipping rules that do not apply.
    ///
    /// Empty when an explicit label or carried-over score decides the score.
    pub fn breakdown(&self, case: &CaseRecord) -> Vec<(&'static str, u32)> {
        let labelled = case
            .urgency_label
            .as_deref()
            .and_then(UrgencyLevel::from_label)
            .is_some();
        if labelled || case.precomputed_score.is_some() {
            return Vec::new();
        }
        self.rules
            .iter()
            .map(|r| (r.name(), r.points(case)))
            .filter(|(_, points)| *points > 0)
            .collect()
    }

    /// Scores a case and attaches the result.
    pub fn evaluate(&self, case: CaseRecord) -> ScoredCase {
        let score = self.score(&case);
        ScoredCase::new(case, score)
    }

    /// Scores every case and sorts by descending score.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn score_and_rank<I>(&self, cases: I) -> Vec<ScoredCase>
    where
        I: IntoIterator<Item = CaseRecord>,
    {
        let mut scored: Vec<ScoredCase> = cases.into_iter().map(|c| self.evaluate(c)).collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

impl Default for UrgencyScorer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Scores and ranks cases with the standard rule set.
pub fn score_and_rank<I>(cases: I) -> Vec<ScoredCase>
where
    I: IntoIterator<Item = CaseRecord>,
{
    UrgencyScorer::standard().score_and_rank(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Flat(u32);

    impl ScoringRule for Flat {
        fn name(&self) -> &'static str {
            "FLAT"
        }

        fn points(&self, _case: &CaseRecord) -> u32 {
            self.0
        }
    }

    fn quiet_case(id: &str) -> CaseRecord {
        // Matches no heuristic rule.
        CaseRecord::new(id)
            .with_case_type("Contract")
            .with_deadline_days_left(30)
    }

    #[test]
    fn test_explicit_label_wins() {
        let scorer = UrgencyScorer::standard();
        let busy = CaseRecord::new("C1")
            .with_case_type("Bail")
            .with_pending_days(500)
            .with_previous_motions(9);

        assert_eq!(scorer.score(&busy.clone().with_urgency_label("High")), 90);
        assert_eq!(scorer.score(&busy.clone().with_urgency_label(" med ")), 55);
        assert_eq!(scorer.score(&busy.clone().with_urgency_label("L")), 15);
        assert_eq!(scorer.score(&quiet_case("C2").with_urgency_label("urgent")), 90);
    }

    #[test]
    fn test_unrecognized_label_falls_through() {
        let scorer = UrgencyScorer::standard();
        let case = CaseRecord::new("C1")
            .with_case_type("Fraud")
            .with_deadline_days_left(30)
            .with_urgency_label("asap");
        assert_eq!(scorer.score(&case), 40);

        let blank = quiet_case("C2").with_urgency_label("   ");
        assert_eq!(scorer.score(&blank), 0);
    }

    #[test]
    fn test_heuristic_sum() {
        let scorer = UrgencyScorer::standard();
        let all = CaseRecord::new("C1")
            .with_case_type("custody")
            .with_pending_days(101)
            .with_deadline_days_left(9)
            .with_previous_motions(3);
        assert_eq!(scorer.score(&all), 90);
        assert_eq!(scorer.evaluate(all).level, UrgencyLevel::High);

        let deadline_only = quiet_case("C2").with_deadline_days_left(2);
        assert_eq!(scorer.score(&deadline_only), 25);
    }

    #[test]
    fn test_missing_fields_default() {
        // Everything defaulted: deadline 0 < 10 is the only hit.
        let scorer = UrgencyScorer::standard();
        assert_eq!(scorer.score(&CaseRecord::new("C1")), 25);
    }

    #[test]
    fn test_precomputed_score_clamped() {
        let scorer = UrgencyScorer::standard();
        assert_eq!(scorer.score(&quiet_case("a").with_precomputed_score(72)), 72);
        assert_eq!(scorer.score(&quiet_case("b").with_precomputed_score(250)), 100);
        assert_eq!(scorer.score(&quiet_case("c").with_precomputed_score(-5)), 0);
        // Labels still take precedence.
        let both = quiet_case("d").with_precomputed_score(5).with_urgency_label("high");
        assert_eq!(scorer.score(&both), 90);
    }

    #[test]
    fn test_clamp_with_extra_rules() {
        let scorer = UrgencyScorer::standard().with_rule(Flat(50));
        let all = CaseRecord::new("C1")
            .with_case_type("bail")
            .with_pending_days(200)
            .with_previous_motions(5);
        assert_eq!(scorer.score(&all), 100);

        let overflow = UrgencyScorer::new().with_rule(Flat(u32::MAX)).with_rule(Flat(1));
        assert_eq!(overflow.score(&CaseRecord::new("C2")), 100);
    }

    #[test]
    fn test_breakdown() {
        let scorer = UrgencyScorer::standard();
        let case = CaseRecord::new("C1")
            .with_case_type("Bail")
            .with_deadline_days_left(50)
            .with_previous_motions(4);
        assert_eq!(
            scorer.breakdown(&case),
            vec![("CRITICAL_TYPE", 40), ("REPEATED_MOTIONS", 10)]
        );
        assert!(scorer.breakdown(&case.with_urgency_label("low")).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let scorer = UrgencyScorer::standard();
        let case = CaseRecord::new("C1").with_case_type("Fraud").with_pending_days(150);
        let first = scorer.evaluate(case.clone());
        let second = scorer.evaluate(case);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let cases = vec![
            quiet_case("low-a"),
            CaseRecord::new("high").with_urgency_label("High"),
            quiet_case("low-b"),
            CaseRecord::new("mid").with_urgency_label("medium"),
            quiet_case("low-c"),
        ];
        let ranked = score_and_rank(cases);
        let ids: Vec<&str> = ranked.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["high", "mid", "low-a", "low-b", "low-c"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(score_and_rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_standard_rule_order() {
        assert_eq!(
            UrgencyScorer::default().rule_names(),
            vec!["CRITICAL_TYPE", "LONG_PENDING", "IMMINENT_DEADLINE", "REPEATED_MOTIONS"]
        );
    }
}
