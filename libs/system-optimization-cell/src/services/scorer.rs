// =====================================================================================
// HEALTH SCORER
// =====================================================================================

use crate::models::{HealthStatus, Issue, IssueSeverity, MetricSnapshot};

// Channel weights; they sum to 1.0 so the base score stays in [0,100].
const CPU_WEIGHT: f64 = 0.20;
const MEMORY_WEIGHT: f64 = 0.20;
const DISK_WEIGHT: f64 = 0.15;
const NETWORK_WEIGHT: f64 = 0.15;
const DATA_STORE_WEIGHT: f64 = 0.20;
const CACHE_WEIGHT: f64 = 0.10;

/// Combines the weighted channel scores and per-issue deductions into a
/// clamped 0-100 score and a tri-state status. Usage channels are inverted
/// before weighting (lower utilization scores higher); dependency health
/// channels are used directly.
///
/// A critical issue forces critical status regardless of the numeric score.
pub fn score_snapshot(snapshot: &MetricSnapshot, issues: &[Issue]) -> (u8, HealthStatus) {
    let base = (100.0 - snapshot.cpu_percent) * CPU_WEIGHT
        + (100.0 - snapshot.memory_percent) * MEMORY_WEIGHT
        + (100.0 - snapshot.disk_percent) * DISK_WEIGHT
        + (100.0 - snapshot.network_percent) * NETWORK_WEIGHT
        + snapshot.data_store_health * DATA_STORE_WEIGHT
        + snapshot.cache_health * CACHE_WEIGHT;

    let deductions: f64 = issues
        .iter()
        .map(|issue| severity_deduction(issue.severity))
        .sum();

    let score = (base - deductions).clamp(0.0, 100.0).round() as u8;

    let has_critical_issue = issues
        .iter()
        .any(|issue| issue.severity == IssueSeverity::Critical);

    let status = if has_critical_issue || score < 30 {
        HealthStatus::Critical
    } else if score < 70 {
        HealthStatus::Warning
    } else {
        HealthStatus::Healthy
    };

    (score, status)
}

fn severity_deduction(severity: IssueSeverity) -> f64 {
    match severity {
        IssueSeverity::Critical => 20.0,
        IssueSeverity::High => 10.0,
        IssueSeverity::Medium => 5.0,
        IssueSeverity::Low => 2.0,
    }
}
