pub mod cache;
pub mod collector;
pub mod detector;
pub mod health;
pub mod monitor;
pub mod optimizer;
pub mod recommendations;
pub mod scorer;

pub use cache::CacheClient;
pub use collector::{latency_score, MetricsCollectorService};
pub use detector::detect_issues;
pub use health::HealthMonitorService;
pub use monitor::SystemMonitor;
pub use optimizer::{plan_component, should_auto_apply, OptimizerService, AUTO_APPLY_BUDGET_MS};
pub use recommendations::generate_recommendations;
pub use scorer::score_snapshot;
