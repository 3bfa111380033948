//! Risk classification: total, side-effect-free mappings from scores and
//! statuses to display labels. Thresholds are fixed constants, not
//! configuration.

use crate::inventory::domain::CurrentStatus;
use serde::Serialize;

/// Ordinal risk label derived from a quantum risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-facing status label for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Vulnerable,
    Migrating,
    Secure,
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Vulnerable => "vulnerable",
            DisplayStatus::Migrating => "migrating",
            DisplayStatus::Secure => "secure",
        }
    }
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a quantum risk score to a risk label. Boundary values belong to
/// the higher bucket (inclusive lower bounds).
pub fn risk_level(score: f64) -> RiskLevel {
    if score >= 0.9 {
        RiskLevel::Critical
    } else if score >= 0.8 {
        RiskLevel::High
    } else if score >= 0.6 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Maps a migration status to its display label.
pub fn display_status(status: CurrentStatus) -> DisplayStatus {
    match status {
        CurrentStatus::Legacy => DisplayStatus::Vulnerable,
        CurrentStatus::PostQuantum => DisplayStatus::Secure,
        CurrentStatus::Migrating => DisplayStatus::Migrating,
    }
}
