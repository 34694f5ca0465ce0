//! Table ingestion: CSV parsing, column normalization, field defaulting.
//!
//! Turns an uploaded case table into [`CaseRecord`]s the core can score
//! without further checks:
//!
//! - Headers are matched against [`Column`] aliases.
//! - Numeric cells are coerced: non-numeric or missing → 0, fractions
//!   truncate, negatives clamp to 0.
//! - A missing or blank case ID becomes `C001`, `C002`, ... by row.
//! - A blank urgency cell means "no explicit label".

mod columns;

pub use columns::{Column, ColumnMap};

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::TriageError;
use crate::models::CaseRecord;

/// Reads a CSV case table.
///
/// # Errors
/// - [`TriageError::MissingHeader`] when the input has no header row.
/// - [`TriageError::Csv`] when the CSV itself is malformed.
///
/// A header row with no data rows yields an empty batch.
pub fn read_cases<R: Read>(reader: R) -> Result<Vec<CaseRecord>, TriageError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(TriageError::MissingHeader);
    }
    let map = ColumnMap::resolve(headers.iter());
    if !map.missing().is_empty() {
        debug!(missing = ?map.missing(), "table lacks columns, defaulting them");
    }

    let mut cases = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        cases.push(case_from_record(&map, &record, row));
    }
    debug!(cases = cases.len(), "case table loaded");
    Ok(cases)
}

/// Builds cases from an already-split table (header row plus data rows).
pub fn cases_from_rows<H, R>(headers: &[H], rows: &[R]) -> Vec<CaseRecord>
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let map = ColumnMap::resolve(headers.iter().map(AsRef::as_ref));
    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            let record = StringRecord::from(cells.as_ref().to_vec());
            case_from_record(&map, &record, row)
        })
        .collect()
}

fn case_from_record(map: &ColumnMap, record: &StringRecord, row: usize) -> CaseRecord {
    let cell = |column: Column| {
        map.position(column)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let id = match cell(Column::CaseId) {
        Some(id) => id.to_string(),
        None => {
            let generated = generated_id(row);
            debug!(row, id = %generated, "case has no ID, generating one");
            generated
        }
    };

    let count = |column: Column| -> u32 {
        let raw = cell(column);
        let value = raw.and_then(parse_count);
        if value.is_none() {
            debug!(case_id = %id, column = column.canonical(), raw = ?raw, "defaulting to 0");
        }
        value.unwrap_or(0)
    };

    let mut case = CaseRecord::new(id.clone())
        .with_pending_days(count(Column::PendingDays))
        .with_deadline_days_left(count(Column::DeadlineDaysLeft))
        .with_previous_motions(count(Column::PreviousMotions));

    if let Some(name) = cell(Column::CaseName) {
        case = case.with_name(name);
    }
    if let Some(case_type) = cell(Column::CaseType) {
        case = case.with_case_type(case_type);
    }
    if let Some(description) = cell(Column::Description) {
        case = case.with_description(description);
    }
    if let Some(label) = cell(Column::Urgency) {
        case = case.with_urgency_label(label);
    }
    if map.has(Column::UrgencyScore) {
        let score = cell(Column::UrgencyScore).and_then(parse_number).unwrap_or(0.0);
        case = case.with_precomputed_score(score.trunc() as i64);
    }
    case
}

/// `C001`-style ID for a 0-based row.
pub fn generated_id(row: usize) -> String {
    format!("C{:03}", row + 1)
}

/// Parses a non-negative count; fractions truncate and negatives clamp to 0.
///
/// Returns `None` for text that is not a finite number.
pub fn parse_count(raw: &str) -> Option<u32> {
    parse_number(raw).map(|v| v.trunc().max(0.0) as u32)
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
