// =====================================================================================
// SYSTEM OPTIMIZATION CELL ROUTER
// =====================================================================================

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{get_system_health, optimize_system, SystemOptimizationHandlers};

pub fn create_system_optimization_router(handlers: Arc<SystemOptimizationHandlers>) -> Router {
    Router::new()
        .route("/health", get(get_system_health))
        .route("/optimize", post(optimize_system))
        .layer(CorsLayer::permissive())
        .with_state(handlers)
}
