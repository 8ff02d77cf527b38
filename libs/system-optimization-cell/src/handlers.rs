// =====================================================================================
// SYSTEM OPTIMIZATION CELL HANDLERS
// =====================================================================================

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::instrument;

use crate::error::MonitorError;
use crate::models::{HealthReport, PerformanceOptimization};
use crate::services::{
    CacheClient, HealthMonitorService, MetricsCollectorService, OptimizerService,
};
use shared_config::AppConfig;
use shared_database::DataStoreClient;

pub struct SystemOptimizationHandlers {
    health_service: Arc<HealthMonitorService>,
    optimizer: Arc<OptimizerService>,
}

impl SystemOptimizationHandlers {
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, MonitorError> {
        let data_store = Arc::new(DataStoreClient::new(&config));
        let cache = Arc::new(CacheClient::new(&config).await?);
        let collector = Arc::new(MetricsCollectorService::new(
            data_store.clone(),
            cache.clone(),
        ));
        let health_service = Arc::new(HealthMonitorService::new(collector.clone(), cache.clone()));
        let optimizer = Arc::new(OptimizerService::new(collector, data_store, cache));

        Ok(Self {
            health_service,
            optimizer,
        })
    }

    pub fn health_service(&self) -> Arc<HealthMonitorService> {
        self.health_service.clone()
    }

    pub fn optimizer(&self) -> Arc<OptimizerService> {
        self.optimizer.clone()
    }
}

// =====================================================================================
// ENDPOINTS
// =====================================================================================

/// Runs a fresh collection cycle synchronously and returns the assembled
/// report (the cached slot is refreshed as a side effect).
#[instrument(skip(handlers))]
pub async fn get_system_health(
    State(handlers): State<Arc<SystemOptimizationHandlers>>,
) -> Result<Json<HealthReport>, MonitorError> {
    let report = handlers.health_service.generate_report().await?;
    Ok(Json(report))
}

/// Triggers one optimization pass synchronously.
#[instrument(skip(handlers))]
pub async fn optimize_system(
    State(handlers): State<Arc<SystemOptimizationHandlers>>,
) -> Result<Json<Vec<PerformanceOptimization>>, MonitorError> {
    let optimizations = handlers.optimizer.run_optimization_pass().await;
    Ok(Json(optimizations))
}

// =====================================================================================
// ERROR RESPONSE IMPLEMENTATION
// =====================================================================================

impl IntoResponse for MonitorError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            MonitorError::RedisError(_) | MonitorError::CachePoolError(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Cache unavailable")
            }
            MonitorError::SerializationError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Serialization error")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "timestamp": chrono::Utc::now()
            })),
        )
            .into_response()
    }
}
