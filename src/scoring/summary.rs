//! Dashboard metrics over a scored batch.

use serde::{Deserialize, Serialize};

use super::ScoredCase;
use crate::models::UrgencyLevel;

/// Headline counts for a scored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageSummary {
    pub total_cases: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    /// Mean urgency score, rounded to one decimal. 0.0 for an empty batch.
    pub average_score: f64,
}

impl TriageSummary {
    /// Computes the summary of a scored batch.
    pub fn calculate(cases: &[ScoredCase]) -> Self {
        let count = |level: UrgencyLevel| cases.iter().filter(|c| c.level == level).count();

        let average_score = if cases.is_empty() {
            0.0
        } else {
            let sum: u64 = cases.iter().map(|c| u64::from(c.score)).sum();
            let mean = sum as f64 / cases.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        Self {
            total_cases: cases.len(),
            high_count: count(UrgencyLevel::High),
            medium_count: count(UrgencyLevel::Medium),
            low_count: count(UrgencyLevel::Low),
            average_score,
        }
    }
}
