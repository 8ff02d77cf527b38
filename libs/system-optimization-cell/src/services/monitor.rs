// =====================================================================================
// SCHEDULER / LOOP DRIVER
// =====================================================================================

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info, warn};

use crate::models::HealthStatus;
use crate::services::{HealthMonitorService, OptimizerService};
use shared_config::AppConfig;

/// Owns the two recurring loops: a health tick that refreshes the cached
/// report, and a slower optimization tick that runs a corrective pass when
/// status degrades. Lifecycle is explicit: nothing runs before `start()`
/// and `stop()` waits for an in-flight tick to finish.
pub struct SystemMonitor {
    health_service: Arc<HealthMonitorService>,
    optimizer: Arc<OptimizerService>,
    health_interval: Duration,
    optimization_interval: Duration,
    tick_gate: Arc<Mutex<()>>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl SystemMonitor {
    pub fn new(
        config: &AppConfig,
        health_service: Arc<HealthMonitorService>,
        optimizer: Arc<OptimizerService>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            health_service,
            optimizer,
            health_interval: Duration::from_secs(config.health_check_interval_seconds),
            optimization_interval: Duration::from_secs(config.optimization_interval_seconds),
            tick_gate: Arc::new(Mutex::new(())),
            shutdown_tx,
            shutdown_rx,
            handles: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        if !self.handles.is_empty() {
            warn!("System monitor already started");
            return;
        }

        info!(
            "Starting system monitor (health every {:?}, optimization every {:?})",
            self.health_interval, self.optimization_interval
        );

        let health_service = Arc::clone(&self.health_service);
        let gate = Arc::clone(&self.tick_gate);
        let mut shutdown = self.shutdown_rx.clone();
        let period = self.health_interval;
        self.handles.push(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => run_health_tick(&health_service, &gate).await,
                    _ = shutdown.changed() => {
                        debug!("Health loop stopping");
                        break;
                    }
                }
            }
        }));

        let health_service = Arc::clone(&self.health_service);
        let optimizer = Arc::clone(&self.optimizer);
        let gate = Arc::clone(&self.tick_gate);
        let mut shutdown = self.shutdown_rx.clone();
        let period = self.optimization_interval;
        self.handles.push(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => run_optimization_tick(&health_service, &optimizer, &gate).await,
                    _ = shutdown.changed() => {
                        debug!("Optimization loop stopping");
                        break;
                    }
                }
            }
        }));
    }

    /// Signals both loops and waits for them to exit. An in-flight tick is
    /// allowed to complete; only the timers are torn down.
    pub async fn stop(&mut self) {
        info!("Stopping system monitor");

        let _ = self.shutdown_tx.send(true);
        for handle in self.handles.drain(..) {
            if let Err(e) = handle.await {
                warn!("Monitor loop ended abnormally: {}", e);
            }
        }
    }
}

async fn run_health_tick(health_service: &HealthMonitorService, gate: &Mutex<()>) {
    let Ok(_guard) = gate.try_lock() else {
        debug!("Previous tick still in flight, skipping health tick");
        return;
    };

    match health_service.generate_report().await {
        Ok(report) => info!(
            score = report.score,
            status = ?report.status,
            issues = report.issues.len(),
            "Health tick complete"
        ),
        Err(e) => error!("Health tick failed: {}", e),
    }
}

async fn run_optimization_tick(
    health_service: &HealthMonitorService,
    optimizer: &OptimizerService,
    gate: &Mutex<()>,
) {
    let Ok(_guard) = gate.try_lock() else {
        debug!("Previous tick still in flight, skipping optimization tick");
        return;
    };

    match health_service.generate_report().await {
        Ok(report) if report.status != HealthStatus::Healthy => {
            info!(status = ?report.status, "Status degraded, running optimization pass");
            let optimizations = optimizer.run_optimization_pass().await;
            let applied = optimizations.iter().filter(|opt| opt.applied).count();
            info!(
                "Optimization tick applied {} of {} records",
                applied,
                optimizations.len()
            );
        }
        Ok(_) => debug!("System healthy, no optimization needed"),
        Err(e) => error!("Optimization tick failed to assess health: {}", e),
    }
}
