//! Column-name normalization.
//!
//! Uploaded tables name their columns inconsistently ("CaseId",
//! "Case Number", "Days_Left", ...). Each canonical column has a list of
//! accepted aliases; a header matches an alias exactly first, then
//! case-insensitively.

use std::collections::HashMap;

/// Canonical columns of the triage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CaseId,
    CaseName,
    CaseType,
    PendingDays,
    DeadlineDaysLeft,
    PreviousMotions,
    Description,
    Urgency,
    UrgencyScore,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::CaseId,
        Column::CaseName,
        Column::CaseType,
        Column::PendingDays,
        Column::DeadlineDaysLeft,
        Column::PreviousMotions,
        Column::Description,
        Column::Urgency,
        Column::UrgencyScore,
    ];

    /// Canonical header name.
    pub fn canonical(self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted header spellings, canonical first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::CaseId => &[
                "Case_ID",
                "CaseId",
                "case_id",
                "caseid",
                "Case Number",
                "Case_Number",
                "CaseNumber",
            ],
            Column::CaseName => &["Case_Name", "CaseName", "Name", "case_name"],
            Column::CaseType => &["Case_Type", "Type", "case_type"],
            Column::PendingDays => &["Pending_Days", "PendingDays", "pending_days"],
            Column::DeadlineDaysLeft => &[
                "Deadline_Days_Left",
                "Days_Left",
                "DeadlineDaysLeft",
                "deadline_days_left",
            ],
            Column::PreviousMotions => &[
                "Previous_Motions",
                "Prev_Motions",
                "PreviousMotions",
                "previous_motions",
            ],
            Column::Description => &[
                "Short_Description",
                "ShortDescription",
                "Description",
                "ShortDesc",
                "short_description",
            ],
            Column::Urgency => &["Urgency", "Urgency_Level", "urgency"],
            Column::UrgencyScore => &["Urgency_Score"],
        }
    }
}

/// Resolved positions of canonical columns in one table's header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: HashMap<Column, usize>,
}

impl ColumnMap {
    /// Resolves every canonical column against a header row.
    ///
    /// Aliases are tried in order; for each alias an exact match wins over
    /// a case-insensitive one. Columns with no matching header are absent.
    pub fn resolve<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let mut lowered: HashMap<String, usize> = HashMap::new();
        for (idx, h) in headers.iter().enumerate() {
            lowered.entry(h.to_lowercase()).or_insert(idx);
        }

        let mut positions = HashMap::new();
        for column in Column::ALL {
            let found = column.aliases().iter().find_map(|alias| {
                headers
                    .iter()
                    .position(|h| h == alias)
                    .or_else(|| lowered.get(&alias.to_lowercase()).copied())
            });
            if let Some(idx) = found {
                positions.insert(column, idx);
            }
        }
        Self { positions }
    }

    /// Position of a column, if the table has it.
    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    pub fn has(&self, column: Column) -> bool {
        self.positions.contains_key(&column)
    }

    /// Canonical columns the table lacks.
    pub fn missing(&self) -> Vec<Column> {
        Column::ALL.into_iter().filter(|c| !self.has(*c)).collect()
    }
}
