//! End-to-end triage runs.
//!
//! Chains the pieces in data-flow order: ingest → validate → score and
//! rank → schedule → metrics. Every input, including "now", is a
//! parameter; nothing here reads global state or the wall clock.

use std::io::Read;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TriageError;
use crate::ingest;
use crate::models::{CaseRecord, Schedule};
use crate::scheduler::{DayBoundedScheduler, ScheduleKpi};
use crate::scoring::{ScoredCase, TriageSummary, UrgencyScorer};
use crate::validation::validate_batch;

/// Output of one triage run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRun {
    /// Cases ranked by descending urgency score.
    pub ranked: Vec<ScoredCase>,
    /// Day-grouped hearing calendar.
    pub schedule: Schedule,
    pub summary: TriageSummary,
    pub kpi: ScheduleKpi,
}

/// Scorer and scheduler used together.
#[derive(Debug, Clone, Default)]
pub struct Triage {
    scorer: UrgencyScorer,
    scheduler: DayBoundedScheduler,
}

impl Triage {
    pub fn new(scorer: UrgencyScorer, scheduler: DayBoundedScheduler) -> Self {
        Self { scorer, scheduler }
    }

    pub fn scorer(&self) -> &UrgencyScorer {
        &self.scorer
    }

    pub fn scheduler(&self) -> &DayBoundedScheduler {
        &self.scheduler
    }

    /// Scores, ranks, and schedules a batch.
    pub fn run<I>(&self, cases: I, now: NaiveDateTime) -> TriageRun
    where
        I: IntoIterator<Item = CaseRecord>,
    {
        let ranked = self.scorer.score_and_rank(cases);
        let schedule = self.scheduler.schedule(&ranked, now);
        let summary = TriageSummary::calculate(&ranked);
        let kpi = ScheduleKpi::calculate(&schedule, self.scheduler.template());
        info!(
            cases = summary.total_cases,
            high = summary.high_count,
            days = kpi.days_used,
            "triage run complete"
        );
        TriageRun {
            ranked,
            schedule,
            summary,
            kpi,
        }
    }

    /// Validates a batch, then runs it.
    ///
    /// # Errors
    /// [`TriageError::Validation`] with every issue found.
    pub fn run_validated(
        &self,
        cases: Vec<CaseRecord>,
        now: NaiveDateTime,
    ) -> Result<TriageRun, TriageError> {
        validate_batch(&cases).map_err(TriageError::Validation)?;
        Ok(self.run(cases, now))
    }

    /// Reads a CSV case table, validates it, and runs it.
    pub fn run_csv<R: Read>(&self, reader: R, now: NaiveDateTime) -> Result<TriageRun, TriageError> {
        let cases = ingest::read_cases(reader)?;
        self.run_validated(cases, now)
    }
}

/// Scores, ranks, and schedules a batch with the standard scorer and the
/// default working-day template.
pub fn triage<I>(cases: I, now: NaiveDateTime) -> (Vec<ScoredCase>, Schedule)
where
    I: IntoIterator<Item = CaseRecord>,
{
    let run = Triage::default().run(cases, now);
    (run.ranked, run.schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrgencyLevel;
    use chrono::NaiveDate;

    fn monday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 20)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_triage_orders_by_urgency() {
        let cases = vec![
            CaseRecord::new("routine").with_case_type("Contract").with_deadline_days_left(60),
            CaseRecord::new("bail")
                .with_case_type("Bail")
                .with_deadline_days_left(2)
                .with_pending_days(200),
        ];
        let (ranked, schedule) = triage(cases, monday_morning());

        assert_eq!(ranked[0].id(), "bail");
        assert_eq!(ranked[0].level, UrgencyLevel::High);
        let first = schedule.slots().next().unwrap();
        assert_eq!(first.case_id, "bail");
        assert_eq!(first.start_label(), "10:00 AM");
        assert_eq!(first.end_label(), "11:00 AM");
    }

    #[test]
    fn test_run_reports_metrics() {
        let cases = vec![
            CaseRecord::new("a").with_urgency_label("High"),
            CaseRecord::new("b").with_urgency_label("Medium"),
        ];
        let run = Triage::default().run(cases, monday_morning());
        assert_eq!(run.summary.total_cases, 2);
        assert_eq!(run.summary.high_count, 1);
        assert!((run.summary.average_score - 72.5).abs() < 1e-10);
        assert_eq!(run.kpi.days_used, 1);
        assert_eq!(run.kpi.per_day[0].booked_minutes, 85);
    }

    #[test]
    fn test_run_validated_rejects_duplicates() {
        let cases = vec![CaseRecord::new("a"), CaseRecord::new("a")];
        let err = Triage::default()
            .run_validated(cases, monday_morning())
            .unwrap_err();
        match err {
            TriageError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_csv() {
        let csv = "Case_ID,Case_Type,Deadline_Days_Left\nA,Contract,30\nB,Fraud,1\n";
        let run = Triage::default().run_csv(csv.as_bytes(), monday_morning()).unwrap();
        let ids: Vec<&str> = run.ranked.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(run.schedule.slot_count(), 2);
    }

    #[test]
    fn test_run_empty() {
        let run = Triage::default().run(Vec::new(), monday_morning());
        assert!(run.ranked.is_empty());
        assert!(run.schedule.is_empty());
        assert_eq!(run.kpi.days_used, 0);
    }
}
