// =====================================================================================
// RECOMMENDATION GENERATOR
// =====================================================================================

use crate::models::{Issue, MetricSnapshot};

/// Maps metric and issue patterns to canned remediation text. Pure and
/// deterministic; overlapping rules may repeat advice and duplicates are
/// intentionally not removed.
pub fn generate_recommendations(snapshot: &MetricSnapshot, issues: &[Issue]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if snapshot.memory_percent > 80.0 {
        recommendations.push("Increase available memory or lower per-worker cache sizes".to_string());
        recommendations.push("Review long-lived allocations for leaks".to_string());
    }

    if snapshot.cpu_percent > 75.0 {
        recommendations
            .push("Profile hot request paths and move heavy work off the request cycle".to_string());
        recommendations.push("Scale out horizontally before CPU saturation".to_string());
    }

    if snapshot.data_store_health < 80.0 {
        recommendations
            .push("Refresh query-planner statistics and review slow query logs".to_string());
        recommendations.push("Check connection pool saturation on the data store".to_string());
    }

    if issues.len() > 5 {
        recommendations
            .push("Multiple concurrent issues detected; schedule a maintenance window".to_string());
    }

    recommendations
}
