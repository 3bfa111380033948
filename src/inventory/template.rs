//! Fixed CSV documents: the bundled default inventory and the sample
//! template offered to users as a format reference.

use crate::inventory::domain::Asset;
use crate::inventory::ingest::parse_inventory;
use crate::shared::Result;

/// Default inventory compiled into the binary. Replaced for the session
/// only, never on disk.
const BUNDLED_CSV: &str = include_str!("../../data/quasar_inventory.csv");

/// Sample document (header + 3 example rows) for users to copy when
/// preparing their own upload.
const SAMPLE_CSV: &str = "\
asset_id,type,encryption_algorithm,key_length,last_rotation_date,usage_frequency,quantum_risk_score,criticality,current_status,migration_priority,quantum_vulnerability_score,estimated_time_to_qsafe,migration_time,automation_status,latency_before,latency_after,cpu_usage_before,cpu_usage_after,memory_usage_before,memory_usage_after,throughput_before,throughput_after,compliance_score,cert_valid,encryption_strength_index,predicted_migration_risk,predicted_latency,predicted_cpu,predicted_memory
ASSET-001,database,RSA-2048,2048,2024-01-15,high,0.85,high,legacy,P1,82,30,24,success,45,52,30,35,512,580,1000,950,85,valid,65,0.75,55,38,620
ASSET-002,api,ECDSA-256,256,2024-02-20,medium,0.45,medium,post-quantum,P2,35,0,12,success,22,24,25,27,256,270,2000,1980,92,valid,82,0.25,25,28,280
ASSET-003,storage,AES-256,256,2023-11-10,low,0.65,high,legacy,P1,58,45,36,manual,35,42,40,48,1024,1150,800,750,78,expired,58,0.55,45,52,1200";

/// Default filename for the written template.
pub const TEMPLATE_FILENAME: &str = "quasar_sample_template.csv";

/// Returns the fixed sample CSV document.
pub fn sample_template() -> &'static str {
    SAMPLE_CSV
}

/// Parses the compiled-in default inventory.
pub fn bundled_inventory() -> Result<Vec<Asset>> {
    parse_inventory(BUNDLED_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_template_has_header_and_three_rows() {
        let lines: Vec<&str> = sample_template().lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("asset_id,type,encryption_algorithm"));
        assert!(lines[1].starts_with("ASSET-001"));
        assert!(lines[3].starts_with("ASSET-003"));
    }

    #[test]
    fn test_sample_template_parses_to_three_assets() {
        let assets = parse_inventory(sample_template()).unwrap();
        assert_eq!(assets.len(), 3);
    }

    #[test]
    fn test_bundled_inventory_parses() {
        let assets = bundled_inventory().unwrap();
        assert!(assets.len() >= 20);
        // Identifiers are unique within the bundled dataset.
        let mut ids: Vec<&str> = assets.iter().map(|a| a.asset_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), assets.len());
    }
}
