//! Row ingestion - loosely-typed budget tables into validated line items.
//!
//! Upstream table readers (CSV uploads, spreadsheet exports) deliver rows as
//! JSON objects, often with source-locale column names and numbers encoded
//! as strings. This adapter maps them onto [`BudgetLineItem`]s; the first
//! malformed row aborts the batch.

use serde_json::Value;
use tracing::debug;

use crate::domain::distortion::BudgetLineItem;
use crate::domain::foundation::MalformedRowError;

/// Accepted column names for the project name, canonical first.
pub const PROJECT_NAME_COLUMNS: &[&str] = &["project_name", "事業名"];

/// Accepted column names for the settled budget.
pub const SETTLED_BUDGET_COLUMNS: &[&str] = &["settled_budget", "決算額"];

/// Accepted column names for the estimated beneficiary count.
pub const ESTIMATED_BENEFICIARIES_COLUMNS: &[&str] = &["estimated_beneficiaries", "推定受益者数"];

/// Parses a table of JSON row objects into validated line items.
///
/// Each row must be an object carrying the three required columns under
/// either their canonical or source-locale names. Numeric fields accept JSON
/// numbers or numeric strings and must be non-negative.
///
/// # Errors
///
/// Returns the first `MalformedRowError` encountered, identifying the
/// zero-based row index and the offending field; no partial table is
/// produced.
pub fn parse_rows(rows: &[Value]) -> Result<Vec<BudgetLineItem>, MalformedRowError> {
    let items = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = items.len(), "Ingested budget table");

    Ok(items)
}

fn parse_row(index: usize, row: &Value) -> Result<BudgetLineItem, MalformedRowError> {
    let record = row
        .as_object()
        .ok_or(MalformedRowError::NotARecord { row: index })?;

    let project_name = lookup(record, PROJECT_NAME_COLUMNS)
        .ok_or(MalformedRowError::MissingField {
            row: index,
            field: "project_name",
        })
        .map(render_name)?;

    let settled_budget = numeric_field(record, index, "settled_budget", SETTLED_BUDGET_COLUMNS)?;
    let estimated_beneficiaries = numeric_field(
        record,
        index,
        "estimated_beneficiaries",
        ESTIMATED_BENEFICIARIES_COLUMNS,
    )?;

    Ok(BudgetLineItem {
        project_name,
        settled_budget,
        estimated_beneficiaries,
    })
}

/// Finds the first present column among the accepted aliases.
fn lookup<'a>(
    record: &'a serde_json::Map<String, Value>,
    columns: &[&str],
) -> Option<&'a Value> {
    columns.iter().find_map(|name| record.get(*name))
}

/// Renders the project-name cell as text, whatever its JSON type.
fn render_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn numeric_field(
    record: &serde_json::Map<String, Value>,
    row: usize,
    field: &'static str,
    columns: &[&str],
) -> Result<f64, MalformedRowError> {
    let cell = lookup(record, columns).ok_or(MalformedRowError::MissingField { row, field })?;

    let value = parse_numeric(cell).ok_or_else(|| MalformedRowError::NonNumeric {
        row,
        field,
        value: render_name(cell),
    })?;

    if value < 0.0 {
        return Err(MalformedRowError::NegativeValue { row, field, value });
    }

    Ok(value)
}

/// Accepts JSON numbers and numeric strings; rejects everything else,
/// including NaN and infinities.
fn parse_numeric(cell: &Value) -> Option<f64> {
    let value = match cell {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
