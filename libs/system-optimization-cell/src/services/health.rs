// =====================================================================================
// HEALTH REPORT ASSEMBLY
// =====================================================================================

use std::sync::Arc;

use tracing::{instrument, warn};

use crate::error::MonitorError;
use crate::models::HealthReport;
use crate::services::{
    detect_issues, generate_recommendations, score_snapshot, CacheClient, MetricsCollectorService,
};

pub struct HealthMonitorService {
    collector: Arc<MetricsCollectorService>,
    cache: Arc<CacheClient>,
}

impl HealthMonitorService {
    pub fn new(collector: Arc<MetricsCollectorService>, cache: Arc<CacheClient>) -> Self {
        Self { collector, cache }
    }

    /// Runs one full monitoring cycle: collect, detect, score, recommend,
    /// assemble. The assembled report overwrites the cached slot; that write
    /// is best effort and the report is returned regardless.
    #[instrument(skip(self))]
    pub async fn generate_report(&self) -> Result<HealthReport, MonitorError> {
        let metrics = self.collector.collect().await;
        let issues = detect_issues(&metrics);
        let (score, status) = score_snapshot(&metrics, &issues);
        let recommendations = generate_recommendations(&metrics, &issues);

        let report = HealthReport {
            status,
            score,
            metrics,
            issues,
            recommendations,
            generated_at: chrono::Utc::now(),
        };

        if let Err(e) = self.cache.store_report(&report).await {
            warn!("Failed to cache health report: {}", e);
        }

        Ok(report)
    }
}
