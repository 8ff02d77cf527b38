use std::time::{Duration, Instant};

use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;
use tracing::{debug, info, warn};

use crate::error::MonitorError;
use crate::models::HealthReport;
use shared_config::AppConfig;

/// Single-slot cache key for the latest health report.
pub const HEALTH_REPORT_KEY: &str = "system:health";
const HEALTH_REPORT_TTL_SECONDS: u64 = 60;

/// The only namespace the optimizer is allowed to evict. Business cache
/// entries live outside it and are never touched.
const TEMPORARY_KEY_PREFIX: &str = "system:tmp:";

pub struct CacheClient {
    pool: Pool,
}

impl CacheClient {
    /// Builds the connection pool. A malformed URL is a configuration error
    /// and fails construction; an unreachable server does not, the monitor
    /// starts degraded and the cache probe reports it as failed.
    pub async fn new(config: &AppConfig) -> Result<Self, MonitorError> {
        let redis_url = config
            .redis_url
            .clone()
            .unwrap_or_else(|| "redis://localhost:6379".to_string());

        let cfg = Config::from_url(redis_url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| MonitorError::CachePoolError(format!("Pool creation error: {}", e)))?;

        let client = Self { pool };

        match client.ping().await {
            Ok(latency) => info!("Cache connection established in {:?}", latency),
            Err(e) => warn!("Cache unreachable at startup: {}", e),
        }

        Ok(client)
    }

    async fn get_connection(&self) -> Result<Connection, MonitorError> {
        self.pool
            .get()
            .await
            .map_err(|e| MonitorError::CachePoolError(e.to_string()))
    }

    /// Round-trip liveness probe. Returns the measured latency on success.
    pub async fn ping(&self) -> Result<Duration, MonitorError> {
        let mut conn = self.get_connection().await?;

        let start = Instant::now();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(start.elapsed())
    }

    /// Overwrites the single report slot. The TTL outlives at least one
    /// monitoring tick, so a reader always finds a complete report.
    pub async fn store_report(&self, report: &HealthReport) -> Result<(), MonitorError> {
        let mut conn = self.get_connection().await?;

        let payload = serde_json::to_string(report)?;
        let _: () = conn
            .set_ex(HEALTH_REPORT_KEY, payload, HEALTH_REPORT_TTL_SECONDS)
            .await?;

        debug!("Health report cached under {}", HEALTH_REPORT_KEY);
        Ok(())
    }

    pub async fn load_report(&self) -> Result<Option<HealthReport>, MonitorError> {
        let mut conn = self.get_connection().await?;

        let payload: Option<String> = conn.get(HEALTH_REPORT_KEY).await?;
        match payload {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// Evicts the temporary key namespace. The prefix is fixed at compile
    /// time; callers cannot widen the sweep to other keyspaces.
    pub async fn evict_temporary_keys(&self) -> Result<u64, MonitorError> {
        let mut conn = self.get_connection().await?;

        let keys: Vec<String> = conn.keys(format!("{}*", TEMPORARY_KEY_PREFIX)).await?;
        if keys.is_empty() {
            debug!("No temporary cache keys to evict");
            return Ok(0);
        }

        let evicted = keys.len() as u64;
        let _: () = conn.del(keys).await?;

        info!("Evicted {} temporary cache keys", evicted);
        Ok(evicted)
    }
}
