use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use system_optimization_cell::{create_system_optimization_router, SystemOptimizationHandlers};

pub fn create_router(handlers: Arc<SystemOptimizationHandlers>) -> Router {
    Router::new()
        .route("/", get(|| async { "System optimization monitor is running!" }))
        .nest("/system-optimization", create_system_optimization_router(handlers))
}
