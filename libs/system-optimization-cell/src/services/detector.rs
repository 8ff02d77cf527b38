// =====================================================================================
// ISSUE DETECTOR
// =====================================================================================

use crate::models::{Issue, IssueCategory, IssueSeverity, MetricSnapshot};

/// Evaluates a snapshot against the fixed thresholds. Pure function of its
/// input; the returned list is sorted ascending by priority (stable on
/// ties, so rule order decides between equal priorities).
pub fn detect_issues(snapshot: &MetricSnapshot) -> Vec<Issue> {
    let mut issues = Vec::new();

    if snapshot.memory_percent > 85.0 {
        let critical = snapshot.memory_percent > 95.0;
        issues.push(Issue {
            id: "high-memory-usage".to_string(),
            severity: if critical {
                IssueSeverity::Critical
            } else {
                IssueSeverity::High
            },
            category: IssueCategory::Performance,
            description: format!("Memory usage at {:.1}%", snapshot.memory_percent),
            impact: "Allocation stalls and out-of-memory terminations become likely".to_string(),
            solution: "Reclaim memory and reduce per-request buffering".to_string(),
            auto_fix: !critical,
            priority: if critical { 1 } else { 2 },
        });
    }

    if snapshot.cpu_percent > 80.0 {
        let high = snapshot.cpu_percent > 90.0;
        issues.push(Issue {
            id: "high-cpu-load".to_string(),
            severity: if high {
                IssueSeverity::High
            } else {
                IssueSeverity::Medium
            },
            category: IssueCategory::Performance,
            description: format!("CPU load at {:.1}%", snapshot.cpu_percent),
            impact: "Request latency rises as cores saturate".to_string(),
            solution: "Rebalance background workloads or scale out".to_string(),
            auto_fix: false,
            priority: if high { 2 } else { 3 },
        });
    }

    if snapshot.disk_percent > 85.0 {
        let critical = snapshot.disk_percent > 95.0;
        issues.push(Issue {
            id: "disk-space-low".to_string(),
            severity: if critical {
                IssueSeverity::Critical
            } else {
                IssueSeverity::Medium
            },
            category: IssueCategory::Capacity,
            description: format!("Fullest filesystem at {:.1}%", snapshot.disk_percent),
            impact: "Writes will start failing once the volume fills".to_string(),
            solution: "Rotate logs and expand or clean the volume".to_string(),
            auto_fix: false,
            priority: if critical { 1 } else { 3 },
        });
    }

    if snapshot.network_percent > 90.0 {
        issues.push(Issue {
            id: "network-saturation".to_string(),
            severity: IssueSeverity::Low,
            category: IssueCategory::Performance,
            description: format!("Network utilization at {:.1}%", snapshot.network_percent),
            impact: "Throughput-sensitive calls queue behind bulk traffic".to_string(),
            solution: "Shape bulk transfers or add interface capacity".to_string(),
            auto_fix: false,
            priority: 4,
        });
    }

    if snapshot.data_store_health < 70.0 {
        let severe = snapshot.data_store_health < 50.0;
        issues.push(Issue {
            id: "data-store-degraded".to_string(),
            severity: if severe {
                IssueSeverity::High
            } else {
                IssueSeverity::Medium
            },
            category: IssueCategory::Reliability,
            description: format!(
                "Data store health at {:.0} of 100",
                snapshot.data_store_health
            ),
            impact: "Queries are slow or failing across the platform".to_string(),
            solution: "Refresh planner statistics and check pool saturation".to_string(),
            auto_fix: true,
            priority: if severe { 2 } else { 3 },
        });
    }

    if snapshot.cache_health < 70.0 {
        let severe = snapshot.cache_health < 50.0;
        issues.push(Issue {
            id: "cache-degraded".to_string(),
            severity: if severe {
                IssueSeverity::High
            } else {
                IssueSeverity::Medium
            },
            category: IssueCategory::Reliability,
            description: format!("Cache health at {:.0} of 100", snapshot.cache_health),
            impact: "Cache misses push load onto the data store".to_string(),
            solution: "Evict temporary keys and check cache memory pressure".to_string(),
            auto_fix: true,
            priority: if severe { 2 } else { 3 },
        });
    }

    issues.sort_by_key(|issue| issue.priority);
    issues
}
