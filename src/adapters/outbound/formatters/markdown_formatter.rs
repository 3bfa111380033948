use crate::application::read_models::DashboardReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Markdown table header for the asset inventory table
const ASSET_TABLE_HEADER: &str =
    "| Asset | Type | Algorithm | Key Length | Status | Risk |\n";
const ASSET_TABLE_SEPARATOR: &str =
    "|-------|------|-----------|------------|--------|------|\n";

/// Markdown table header for the migration queue table
const QUEUE_TABLE_HEADER: &str =
    "| Asset | Type | Current | Target | Priority | Est. Hours |\n";
const QUEUE_TABLE_SEPARATOR: &str =
    "|-------|------|---------|--------|----------|------------|\n";

/// MarkdownFormatter adapter for human-readable report output
///
/// Renders the read model as a sectioned Markdown document: summary
/// metrics, chart series as tables, the migration queue and the labeled
/// asset inventory.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "# QUASAR Quantum-Readiness Report")?;
        writeln!(out)?;
        writeln!(out, "- Generated: {}", model.metadata.generated_at)?;
        writeln!(out, "- Serial: {}", model.metadata.serial_number)?;
        writeln!(
            out,
            "- Tool: {} {}",
            model.metadata.tool_name, model.metadata.tool_version
        )?;
        writeln!(
            out,
            "- Dataset: {} ({} active asset(s); {} bundled, {} uploaded)",
            model.dataset.source,
            model.dataset.active_assets,
            model.dataset.bundled_assets,
            model.dataset.uploaded_assets
        )?;
        writeln!(out)?;

        let m = &model.metrics;
        writeln!(out, "## Summary")?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|--------|-------|")?;
        writeln!(out, "| Total assets | {} |", m.total_assets)?;
        writeln!(out, "| Vulnerable (legacy) | {} |", m.vulnerable_assets)?;
        writeln!(out, "| Post-quantum | {} |", m.post_quantum_assets)?;
        writeln!(out, "| Critical | {} |", m.critical_assets)?;
        writeln!(out, "| Average risk score | {}% |", m.average_risk_score)?;
        writeln!(
            out,
            "| Risk buckets (high/medium/low) | {}/{}/{} |",
            m.high_risk_assets, m.medium_risk_assets, m.low_risk_assets
        )?;
        writeln!(
            out,
            "| Avg quantum vulnerability | {} |",
            m.avg_quantum_vulnerability
        )?;
        writeln!(out, "| Avg time to quantum-safe | {} days |", m.avg_time_to_qsafe)?;
        writeln!(out, "| Avg migration time | {} hours |", m.avg_migration_time)?;
        writeln!(
            out,
            "| Automation success rate | {}% |",
            m.automation_success_rate
        )?;
        writeln!(
            out,
            "| Perf impact (lat/cpu/mem/thr) | {}%/{}%/{}%/{}% |",
            m.avg_latency_impact, m.avg_cpu_impact, m.avg_memory_impact, m.avg_throughput_impact
        )?;
        writeln!(out, "| Avg compliance score | {} |", m.avg_compliance_score)?;
        writeln!(out, "| Expired certificates | {} |", m.expired_certs)?;
        writeln!(
            out,
            "| Avg encryption strength | {} |",
            m.avg_encryption_strength
        )?;
        writeln!(
            out,
            "| Avg predicted migration risk | {}% |",
            m.avg_predicted_migration_risk
        )?;
        writeln!(out)?;

        writeln!(out, "## Algorithm Distribution")?;
        writeln!(out)?;
        writeln!(out, "| Algorithm | Assets |")?;
        writeln!(out, "|-----------|--------|")?;
        for slice in &model.charts.algorithm_distribution {
            writeln!(out, "| {} | {} |", Self::escape_cell(&slice.name), slice.count)?;
        }
        writeln!(out)?;

        writeln!(out, "## Certificate Status")?;
        writeln!(out)?;
        writeln!(
            out,
            "Valid: {} / Expired: {}",
            model.charts.certificate_status.valid, model.charts.certificate_status.expired
        )?;
        writeln!(out)?;

        writeln!(out, "## Compliance & Strength Trend")?;
        writeln!(out)?;
        writeln!(out, "| Date | Compliance | Strength |")?;
        writeln!(out, "|------|------------|----------|")?;
        for point in &model.charts.compliance_trend {
            writeln!(
                out,
                "| {} | {} | {} |",
                point.date, point.compliance, point.strength
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Performance Impact (Before vs After PQC)")?;
        writeln!(out)?;
        writeln!(out, "| Metric | Before | After |")?;
        writeln!(out, "|--------|--------|-------|")?;
        for bar in &model.charts.performance {
            writeln!(
                out,
                "| {} | {} | {} |",
                Self::escape_cell(&bar.metric),
                bar.before,
                bar.after
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Risk Timeline")?;
        writeln!(out)?;
        writeln!(out, "| Date | Vulnerable | Migrating | Secure |")?;
        writeln!(out, "|------|------------|-----------|--------|")?;
        for point in &model.charts.risk_timeline {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                point.date, point.vulnerable, point.migrating, point.secure
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Quantum Attack Simulation")?;
        writeln!(out)?;
        writeln!(out, "| Algorithm | Break Time (years) | Confidence |")?;
        writeln!(out, "|-----------|--------------------|------------|")?;
        for point in &model.charts.quantum_simulation {
            writeln!(
                out,
                "| {} | {:.1} | {:.1}% |",
                Self::escape_cell(&point.algorithm),
                point.break_time,
                point.confidence
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Migration Queue")?;
        writeln!(out)?;
        out.push_str(QUEUE_TABLE_HEADER);
        out.push_str(QUEUE_TABLE_SEPARATOR);
        for task in &model.migration_queue {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                Self::escape_cell(&task.asset_id),
                Self::escape_cell(&task.asset_type),
                Self::escape_cell(&task.current_algorithm),
                task.target_algorithm,
                task.priority,
                task.estimated_hours
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Asset Inventory")?;
        writeln!(out)?;
        out.push_str(ASSET_TABLE_HEADER);
        out.push_str(ASSET_TABLE_SEPARATOR);
        for row in &model.assets {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                Self::escape_cell(&row.asset_id),
                Self::escape_cell(&row.asset_type),
                Self::escape_cell(&row.encryption_algorithm),
                row.key_length,
                row.status,
                row.risk_level
            )?;
        }

        Ok(out)
    }
}
