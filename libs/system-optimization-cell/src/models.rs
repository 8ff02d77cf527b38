// =====================================================================================
// SYSTEM OPTIMIZATION CELL MODELS
// =====================================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Performance,
    Security,
    Reliability,
    Capacity,
}

/// One full sample of every monitored channel. Produced fresh on each
/// collection cycle; a failed dependency probe shows up as a 0.0 score,
/// never as a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub network_percent: f64,
    pub data_store_health: f64,
    pub cache_health: f64,
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

/// A structured finding produced by comparing a snapshot against the fixed
/// thresholds. Lower priority means more urgent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    pub description: String,
    pub impact: String,
    pub solution: String,
    pub auto_fix: bool,
    pub priority: u8,
}

/// The externally visible artifact: snapshot plus diagnosis. Cached in a
/// single slot and always replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub score: u8,
    pub metrics: MetricSnapshot,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Record of one corrective action considered by the optimizer. `current`,
/// `target` and `improvement` are on the 0-100 health scale of the
/// component. Records under the auto-apply budget are executed and
/// re-measured; the rest are returned advisory with `applied = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceOptimization {
    pub component: String,
    pub current: f64,
    pub target: f64,
    pub improvement: f64,
    pub actions: Vec<String>,
    pub estimated_time_ms: u64,
    pub applied: bool,
}
