//! Urgency level model.
//!
//! Three fixed bands over the 0..=100 urgency score. Band boundaries
//! belong to the higher band: 70 is `High`, 40 is `Medium`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score in the `High` band.
pub const HIGH_THRESHOLD: u8 = 70;
/// Lowest score in the `Medium` band.
pub const MEDIUM_THRESHOLD: u8 = 40;
/// Upper bound of every urgency score.
pub const MAX_SCORE: u8 = 100;

/// Categorical urgency band.
///
/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    /// All levels, most urgent first.
    pub const ALL: [UrgencyLevel; 3] = [UrgencyLevel::High, UrgencyLevel::Medium, UrgencyLevel::Low];

    /// Band for a score.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            UrgencyLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            UrgencyLevel::Medium
        } else {
            UrgencyLevel::Low
        }
    }

    /// Parses an explicit urgency label.
    ///
    /// Trims and lowercases, then accepts the level names and their
    /// short forms (`"h"`, `"urgent"`, `"med"`, `"m"`, `"l"`).
    /// Returns `None` for anything else, including the empty string.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "high" | "h" | "urgent" => Some(UrgencyLevel::High),
            "medium" | "med" | "m" => Some(UrgencyLevel::Medium),
            "low" | "l" => Some(UrgencyLevel::Low),
            _ => None,
        }
    }

    /// Score assigned when a record carries this level as an explicit label.
    pub fn label_score(self) -> u8 {
        match self {
            UrgencyLevel::High => 90,
            UrgencyLevel::Medium => 55,
            UrgencyLevel::Low => 15,
        }
    }

    /// Display name ("High", "Medium", "Low").
    pub fn name(self) -> &'static str {
        match self {
            UrgencyLevel::High => "High",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::Low => "Low",
        }
    }

    /// Short caption shown next to a case card.
    pub fn caption(self) -> &'static str {
        match self {
            UrgencyLevel::High => "High priority",
            UrgencyLevel::Medium => "Needs attention",
            UrgencyLevel::Low => "Routine",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
