//! Input validation for changeover sequencing.
//!
//! Checks structural integrity of a plan and a cost table before
//! optimization. Detects:
//! - Empty plans
//! - Rows with a missing or blank product
//! - Rows with a missing timestamp
//! - Cost-table keys that can never match a lookup
//!
//! All checks collect every problem instead of stopping at the first one,
//! so a plan source can be fixed in one pass.

use std::fmt;

use crate::models::{normalize_identifier, CostTable, PlanEntry, PlanRow};

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
    /// The plan has no entries.
    EmptyPlan,
    /// A row has no product, or only whitespace.
    MissingProduct,
    /// A row has no timestamp.
    MissingTimestamp,
    /// A cost-table key is empty.
    EmptyCostKey,
    /// A cost-table key contains characters removed by normalization.
    UnnormalizedCostKey,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn empty_plan() -> Self {
        Self::new(ValidationErrorKind::EmptyPlan, "Plan has no entries")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a plan before grouping.
///
/// Checks:
/// 1. The plan has at least one entry
/// 2. Every product identifier is non-blank
pub fn validate_plan<T>(entries: &[PlanEntry<T>]) -> ValidationResult {
    if entries.is_empty() {
        return Err(vec![ValidationError::empty_plan()]);
    }

    let errors: Vec<_> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.product.trim().is_empty())
        .map(|(i, _)| blank_product(i))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates raw rows and converts them into plan entries.
///
/// Checks:
/// 1. At least one row
/// 2. Every row has a timestamp
/// 3. Every row has a non-blank product
///
/// # Returns
/// The converted entries, in row order, or every detected issue.
pub fn validate_rows<T: Clone>(
    rows: &[PlanRow<T>],
) -> Result<Vec<PlanEntry<T>>, Vec<ValidationError>> {
    if rows.is_empty() {
        return Err(vec![ValidationError::empty_plan()]);
    }

    let mut errors = Vec::new();
    let mut entries = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        if row.timestamp.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTimestamp,
                format!("Row {i} has no timestamp"),
            ));
        }
        match row.product.as_deref() {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingProduct,
                format!("Row {i} has no product"),
            )),
            Some(p) if p.trim().is_empty() => errors.push(blank_product(i)),
            Some(_) => {}
        }

        if let (Some(ts), Some(product)) = (&row.timestamp, &row.product) {
            entries.push(PlanEntry::new(ts.clone(), product.clone()));
        }
    }

    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(errors)
    }
}

/// Validates a cost table.
///
/// Lookup keys are always built from normalized identifiers, so a stored
/// key that is empty or still contains whitespace or hyphens is dead data.
pub fn validate_cost_table(table: &CostTable) -> ValidationResult {
    let mut keys: Vec<&str> = table.keys().collect();
    keys.sort_unstable();

    let mut errors = Vec::new();
    for key in keys {
        if key.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCostKey,
                "Cost table contains an empty key",
            ));
        } else if normalize_identifier(key) != key {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnnormalizedCostKey,
                format!("Cost key '{key}' is not normalized and can never match"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn blank_product(row: usize) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::MissingProduct,
        format!("Row {row} has a blank product"),
    )
}
