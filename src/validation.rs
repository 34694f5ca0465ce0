//! Input validation for case batches.
//!
//! Checks structural integrity of a batch before scoring. Detects:
//! - Duplicate case IDs
//! - Empty case IDs
//!
//! Scoring and scheduling never fail on their own; validation is for
//! callers that want to reject a malformed table up front.

use crate::models::CaseRecord;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two cases share the same ID.
    DuplicateId,
    /// A case has a blank ID.
    EmptyId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a case batch.
///
/// Checks:
/// 1. Every case ID is non-blank
/// 2. No two cases share an ID
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(cases: &[CaseRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (row, case) in cases.iter().enumerate() {
        if case.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Case at row {} has an empty ID", row + 1),
            ));
            continue;
        }
        if !seen.insert(case.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate case ID: {}", case.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch() {
        let cases = vec![CaseRecord::new("C001"), CaseRecord::new("C002")];
        assert!(validate_batch(&cases).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        assert!(validate_batch(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let cases = vec![
            CaseRecord::new("C001"),
            CaseRecord::new("C002"),
            CaseRecord::new("C001"),
        ];
        let errors = validate_batch(&cases).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("C001"));
    }

    #[test]
    fn test_empty_id() {
        let cases = vec![CaseRecord::new("  ")];
        let errors = validate_batch(&cases).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_multiple_errors() {
        let cases = vec![
            CaseRecord::new(""),
            CaseRecord::new("C1"),
            CaseRecord::new("C1"),
            CaseRecord::new(""),
        ];
        let errors = validate_batch(&cases).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
