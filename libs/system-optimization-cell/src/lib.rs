// =====================================================================================
// SYSTEM OPTIMIZATION CELL - HEALTH MONITORING & ADAPTIVE OPTIMIZATION
// =====================================================================================
//
// This cell provides the self-monitoring services of the platform:
// - OS and dependency metric collection
// - Threshold-based issue detection and prioritization
// - Weighted health scoring with a cached health report
// - Bounded, reversible corrective actions (optimization passes)
// - The recurring monitor loops driving both of the above
//
// =====================================================================================

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{
    HealthReport, HealthStatus, Issue, IssueCategory, IssueSeverity, MetricSnapshot,
    PerformanceOptimization,
};

pub use error::MonitorError;

pub use services::{
    detect_issues, generate_recommendations, score_snapshot, CacheClient, HealthMonitorService,
    MetricsCollectorService, OptimizerService, SystemMonitor,
};

pub use handlers::SystemOptimizationHandlers;
pub use router::create_system_optimization_router;
