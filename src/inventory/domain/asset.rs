use serde::Serialize;

/// Lifecycle status of an asset within the post-quantum migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CurrentStatus {
    Legacy,
    /// Fallback for any unrecognized status value.
    #[default]
    Migrating,
    PostQuantum,
}

impl CurrentStatus {
    /// Lenient, total parse. Unknown values map to `Migrating`, matching
    /// the display rule "anything that is neither legacy nor post-quantum
    /// is treated as in-flight".
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "legacy" => CurrentStatus::Legacy,
            "post-quantum" => CurrentStatus::PostQuantum,
            _ => CurrentStatus::Migrating,
        }
    }
}

/// Three-step ordinal used for both criticality and usage frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ordinal {
    #[default]
    Low,
    Medium,
    High,
}

impl Ordinal {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "high" => Ordinal::High,
            "medium" => Ordinal::Medium,
            _ => Ordinal::Low,
        }
    }
}

/// Whether the migration of an asset completed without operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AutomationStatus {
    Success,
    #[default]
    Manual,
}

impl AutomationStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "success" => AutomationStatus::Success,
            _ => AutomationStatus::Manual,
        }
    }
}

/// Certificate validity. Unknown cells fall back to `Valid` so the expired
/// count only reflects cells that explicitly say so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CertValidity {
    #[default]
    Valid,
    Expired,
}

impl CertValidity {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "expired" => CertValidity::Expired,
            _ => CertValidity::Valid,
        }
    }
}

/// One inventoried cryptographic artifact.
///
/// Every field is total: numeric columns default to 0 when missing or
/// unparsable and enum columns fall back to a documented variant, so
/// downstream aggregation never has to handle absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Asset {
    pub asset_id: String,
    /// Category of the asset (database, api, storage, ...). Named
    /// `asset_type` because the CSV column is `type`.
    pub asset_type: String,
    pub encryption_algorithm: String,
    pub key_length: i64,
    pub last_rotation_date: String,
    pub usage_frequency: Ordinal,
    /// Quantum risk score in [0, 1].
    pub quantum_risk_score: f64,
    pub criticality: Ordinal,
    pub current_status: CurrentStatus,
    pub migration_priority: String,
    pub quantum_vulnerability_score: i64,
    /// Estimated days until the asset is quantum-safe.
    pub estimated_time_to_qsafe: i64,
    /// Migration effort in hours.
    pub migration_time: i64,
    pub automation_status: AutomationStatus,
    pub latency_before: i64,
    pub latency_after: i64,
    pub cpu_usage_before: i64,
    pub cpu_usage_after: i64,
    pub memory_usage_before: i64,
    pub memory_usage_after: i64,
    pub throughput_before: i64,
    pub throughput_after: i64,
    pub compliance_score: i64,
    pub cert_valid: CertValidity,
    pub encryption_strength_index: i64,
    /// Predicted migration risk in [0, 1].
    pub predicted_migration_risk: f64,
    pub predicted_latency: i64,
    pub predicted_cpu: i64,
    pub predicted_memory: i64,
}
