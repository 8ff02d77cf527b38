// =====================================================================================
// METRIC COLLECTORS
// =====================================================================================

use std::sync::Arc;
use std::time::Duration;

use sysinfo::{Disks, Networks, System};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::models::MetricSnapshot;
use crate::services::CacheClient;
use shared_database::DataStoreClient;

/// Window across which CPU and network counters are sampled.
const SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Interface capacity assumed when turning a byte rate into a utilization
/// percentage (1 Gbit/s).
const ASSUMED_LINK_BYTES_PER_SEC: f64 = 125_000_000.0;

pub struct MetricsCollectorService {
    data_store: Arc<DataStoreClient>,
    cache: Arc<CacheClient>,
}

impl MetricsCollectorService {
    pub fn new(data_store: Arc<DataStoreClient>, cache: Arc<CacheClient>) -> Self {
        Self { data_store, cache }
    }

    /// Collects one full snapshot. Never fails: a broken probe degrades its
    /// channel to 0.0 and logs a warning instead of aborting the cycle.
    pub async fn collect(&self) -> MetricSnapshot {
        let (cpu_percent, network_percent) = self.sample_cpu_and_network().await;
        let memory_percent = self.sample_memory();
        let disk_percent = self.sample_disk();
        let data_store_health = self.probe_data_store().await;
        let cache_health = self.probe_cache().await;

        MetricSnapshot {
            cpu_percent,
            memory_percent,
            disk_percent,
            network_percent,
            data_store_health,
            cache_health,
            collected_at: chrono::Utc::now(),
        }
    }

    /// CPU and network both need two reads separated by a delay, so one
    /// sampling window serves them together. CPU is the process share of
    /// wall time between the two reads.
    pub async fn sample_cpu_and_network(&self) -> (f64, f64) {
        let mut sys = System::new();
        let mut networks = Networks::new_with_refreshed_list();

        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                warn!("Failed to resolve current process id: {}", e);
                None
            }
        };

        if let Some(pid) = pid {
            sys.refresh_process(pid);
        }
        sleep(SAMPLE_WINDOW).await;
        if let Some(pid) = pid {
            sys.refresh_process(pid);
        }
        networks.refresh();

        let cpu = match pid.and_then(|pid| sys.process(pid)) {
            Some(process) => clamp_percent(process.cpu_usage() as f64),
            None => 0.0,
        };

        let window_bytes: u64 = networks
            .iter()
            .map(|(_, data)| data.received() + data.transmitted())
            .sum();
        let rate = window_bytes as f64 / SAMPLE_WINDOW.as_secs_f64();
        let network = clamp_percent(rate / ASSUMED_LINK_BYTES_PER_SEC * 100.0);

        (cpu, network)
    }

    pub fn sample_memory(&self) -> f64 {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            warn!("Total system memory reported as zero");
            return 0.0;
        }

        clamp_percent(sys.used_memory() as f64 / total as f64 * 100.0)
    }

    /// Usage of the fullest mounted filesystem.
    pub fn sample_disk(&self) -> f64 {
        let disks = Disks::new_with_refreshed_list();

        let mut worst: f64 = 0.0;
        for disk in disks.iter() {
            let total = disk.total_space();
            if total == 0 {
                continue;
            }
            let used = total.saturating_sub(disk.available_space());
            let percent = used as f64 / total as f64 * 100.0;
            if percent > worst {
                worst = percent;
            }
        }

        clamp_percent(worst)
    }

    pub async fn probe_data_store(&self) -> f64 {
        match self.data_store.ping().await {
            Ok(latency) => {
                debug!("Data store responded in {:?}", latency);
                latency_score(latency)
            }
            Err(e) => {
                warn!("Data store probe failed: {}", e);
                0.0
            }
        }
    }

    pub async fn probe_cache(&self) -> f64 {
        match self.cache.ping().await {
            Ok(latency) => {
                debug!("Cache responded in {:?}", latency);
                latency_score(latency)
            }
            Err(e) => {
                warn!("Cache probe failed: {}", e);
                0.0
            }
        }
    }
}

/// Fixed latency bands mapping a probe round-trip to a 0-100 health score.
pub fn latency_score(latency: Duration) -> f64 {
    let ms = latency.as_millis();
    if ms < 50 {
        100.0
    } else if ms < 100 {
        90.0
    } else if ms < 200 {
        80.0
    } else if ms < 500 {
        70.0
    } else if ms < 1000 {
        50.0
    } else {
        30.0
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
