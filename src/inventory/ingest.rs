//! CSV ingestion: raw text in, typed asset records out.
//!
//! The wire format is deliberately simple: comma-separated lines, first
//! line is the header, no quoting or escaping of embedded commas. Cells
//! are coerced per a fixed membership table - numeric columns default to
//! 0 when missing or unparsable so downstream averages never see an
//! absent value.

use crate::inventory::domain::{
    Asset, AutomationStatus, CertValidity, CurrentStatus, Ordinal,
};
use crate::shared::error::QuasarError;
use crate::shared::Result;

/// Columns that must be present in the header row. Missing columns are
/// reported all at once, in this order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "asset_id",
    "type",
    "encryption_algorithm",
    "key_length",
    "current_status",
    "quantum_vulnerability_score",
    "migration_priority",
    "predicted_migration_risk",
];

/// View over one data row, indexed by header name.
struct RowView<'a> {
    headers: &'a [String],
    values: Vec<&'a str>,
}

impl<'a> RowView<'a> {
    fn new(headers: &'a [String], line: &'a str) -> Self {
        Self {
            headers,
            values: line.split(',').collect(),
        }
    }

    fn cell(&self, column: &str) -> &str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.values.get(idx))
            .map(|v| v.trim())
            .unwrap_or("")
    }

    fn text(&self, column: &str) -> String {
        self.cell(column).to_string()
    }

    fn int(&self, column: &str) -> i64 {
        coerce_int(self.cell(column))
    }

    fn float(&self, column: &str) -> f64 {
        self.cell(column).parse::<f64>().unwrap_or(0.0)
    }
}

/// Lenient integer coercion: whole numbers parse directly, decimal cells
/// truncate toward zero ("45.7" -> 45), anything else is 0.
fn coerce_int(value: &str) -> i64 {
    value
        .parse::<i64>()
        .or_else(|_| value.parse::<f64>().map(|f| f as i64))
        .unwrap_or(0)
}

/// Parses raw CSV text into an ordered sequence of assets.
///
/// # Errors
/// - `QuasarError::InsufficientData` when there are fewer than 2 lines
/// - `QuasarError::MissingColumns` when required header columns are absent;
///   the message enumerates every missing column name
pub fn parse_inventory(content: &str) -> Result<Vec<Asset>> {
    let lines: Vec<&str> = content.trim().lines().collect();
    if lines.len() < 2 {
        return Err(QuasarError::InsufficientData.into());
    }

    let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_string()).collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(QuasarError::MissingColumns { columns: missing }.into());
    }

    let assets = lines[1..]
        .iter()
        .map(|line| {
            let row = RowView::new(&headers, line);
            Asset {
                asset_id: row.text("asset_id"),
                asset_type: row.text("type"),
                encryption_algorithm: row.text("encryption_algorithm"),
                key_length: row.int("key_length"),
                last_rotation_date: row.text("last_rotation_date"),
                usage_frequency: Ordinal::parse(row.cell("usage_frequency")),
                quantum_risk_score: row.float("quantum_risk_score"),
                criticality: Ordinal::parse(row.cell("criticality")),
                current_status: CurrentStatus::parse(row.cell("current_status")),
                migration_priority: row.text("migration_priority"),
                quantum_vulnerability_score: row.int("quantum_vulnerability_score"),
                estimated_time_to_qsafe: row.int("estimated_time_to_qsafe"),
                migration_time: row.int("migration_time"),
                automation_status: AutomationStatus::parse(row.cell("automation_status")),
                latency_before: row.int("latency_before"),
                latency_after: row.int("latency_after"),
                cpu_usage_before: row.int("cpu_usage_before"),
                cpu_usage_after: row.int("cpu_usage_after"),
                memory_usage_before: row.int("memory_usage_before"),
                memory_usage_after: row.int("memory_usage_after"),
                throughput_before: row.int("throughput_before"),
                throughput_after: row.int("throughput_after"),
                compliance_score: row.int("compliance_score"),
                cert_valid: CertValidity::parse(row.cell("cert_valid")),
                encryption_strength_index: row.int("encryption_strength_index"),
                predicted_migration_risk: row.float("predicted_migration_risk"),
                predicted_latency: row.int("predicted_latency"),
                predicted_cpu: row.int("predicted_cpu"),
                predicted_memory: row.int("predicted_memory"),
            }
        })
        .collect();

    Ok(assets)
}
