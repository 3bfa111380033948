//! Dashboard metrics: one flat aggregate computed fresh from the active
//! asset collection. All averages are guarded - an empty collection (or an
//! empty filtered subset) yields 0, never NaN.

use crate::inventory::domain::{
    Asset, AutomationStatus, CertValidity, CurrentStatus, Ordinal,
};
use serde::Serialize;

/// Inclusive lower bound for the high risk bucket.
pub const HIGH_RISK_THRESHOLD: f64 = 0.8;
/// Inclusive lower bound for the medium risk bucket.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.6;

/// Read-only aggregate over the asset collection. A value, not an entity:
/// recomputed wholesale whenever the collection changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DashboardMetrics {
    pub total_assets: usize,
    /// Assets still on legacy cryptography.
    pub vulnerable_assets: usize,
    pub post_quantum_assets: usize,
    /// Mean quantum risk score as a percentage.
    pub average_risk_score: i64,
    /// High-criticality assets still on legacy cryptography.
    pub critical_assets: usize,
    pub high_risk_assets: usize,
    pub medium_risk_assets: usize,
    pub low_risk_assets: usize,
    pub avg_quantum_vulnerability: i64,
    /// Mean days-to-quantum-safe over assets with a nonzero estimate.
    pub avg_time_to_qsafe: i64,
    /// Mean migration hours over assets with a nonzero figure.
    pub avg_migration_time: i64,
    pub automation_success_rate: i64,
    pub avg_latency_impact: i64,
    pub avg_cpu_impact: i64,
    pub avg_memory_impact: i64,
    pub avg_throughput_impact: i64,
    pub avg_compliance_score: i64,
    pub expired_certs: usize,
    pub avg_encryption_strength: i64,
    /// Mean predicted migration risk as a percentage.
    pub avg_predicted_migration_risk: i64,
}

/// Rounded arithmetic mean; 0 for an empty iterator.
fn rounded_mean(values: impl Iterator<Item = f64>) -> i64 {
    let (sum, count) = values.fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0
    } else {
        (sum / count as f64).round() as i64
    }
}

/// Mean percentage change `(after - before) / before * 100`, restricted to
/// assets where `before` is nonzero. 0 when that subset is empty.
fn rounded_impact(assets: &[Asset], before: fn(&Asset) -> i64, after: fn(&Asset) -> i64) -> i64 {
    rounded_mean(assets.iter().filter(|a| before(a) != 0).map(|a| {
        let b = before(a) as f64;
        (after(a) as f64 - b) / b * 100.0
    }))
}

/// Reduces the asset collection into dashboard metrics.
///
/// Order-independent and idempotent: the same multiset of assets always
/// produces the same metrics.
pub fn calculate_metrics(assets: &[Asset]) -> DashboardMetrics {
    if assets.is_empty() {
        return DashboardMetrics::default();
    }
    let total = assets.len();

    let vulnerable_assets = assets
        .iter()
        .filter(|a| a.current_status == CurrentStatus::Legacy)
        .count();
    let post_quantum_assets = assets
        .iter()
        .filter(|a| a.current_status == CurrentStatus::PostQuantum)
        .count();
    let critical_assets = assets
        .iter()
        .filter(|a| a.criticality == Ordinal::High && a.current_status == CurrentStatus::Legacy)
        .count();

    let high_risk_assets = assets
        .iter()
        .filter(|a| a.quantum_risk_score >= HIGH_RISK_THRESHOLD)
        .count();
    let medium_risk_assets = assets
        .iter()
        .filter(|a| {
            a.quantum_risk_score >= MEDIUM_RISK_THRESHOLD
                && a.quantum_risk_score < HIGH_RISK_THRESHOLD
        })
        .count();
    let low_risk_assets = assets
        .iter()
        .filter(|a| a.quantum_risk_score < MEDIUM_RISK_THRESHOLD)
        .count();

    let automation_successes = assets
        .iter()
        .filter(|a| a.automation_status == AutomationStatus::Success)
        .count();

    DashboardMetrics {
        total_assets: total,
        vulnerable_assets,
        post_quantum_assets,
        average_risk_score: rounded_mean(assets.iter().map(|a| a.quantum_risk_score * 100.0)),
        critical_assets,
        high_risk_assets,
        medium_risk_assets,
        low_risk_assets,
        avg_quantum_vulnerability: rounded_mean(
            assets.iter().map(|a| a.quantum_vulnerability_score as f64),
        ),
        avg_time_to_qsafe: rounded_mean(
            assets
                .iter()
                .filter(|a| a.estimated_time_to_qsafe > 0)
                .map(|a| a.estimated_time_to_qsafe as f64),
        ),
        avg_migration_time: rounded_mean(
            assets
                .iter()
                .filter(|a| a.migration_time > 0)
                .map(|a| a.migration_time as f64),
        ),
        automation_success_rate: ((automation_successes as f64 / total as f64) * 100.0).round()
            as i64,
        avg_latency_impact: rounded_impact(assets, |a| a.latency_before, |a| a.latency_after),
        avg_cpu_impact: rounded_impact(assets, |a| a.cpu_usage_before, |a| a.cpu_usage_after),
        avg_memory_impact: rounded_impact(
            assets,
            |a| a.memory_usage_before,
            |a| a.memory_usage_after,
        ),
        avg_throughput_impact: rounded_impact(
            assets,
            |a| a.throughput_before,
            |a| a.throughput_after,
        ),
        avg_compliance_score: rounded_mean(assets.iter().map(|a| a.compliance_score as f64)),
        expired_certs: assets
            .iter()
            .filter(|a| a.cert_valid == CertValidity::Expired)
            .count(),
        avg_encryption_strength: rounded_mean(
            assets.iter().map(|a| a.encryption_strength_index as f64),
        ),
        avg_predicted_migration_risk: rounded_mean(
            assets.iter().map(|a| a.predicted_migration_risk * 100.0),
        ),
    }
}
