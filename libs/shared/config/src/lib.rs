use std::env;
use tracing::warn;

const DEFAULT_HEALTH_INTERVAL_SECONDS: u64 = 30;
const DEFAULT_OPTIMIZATION_INTERVAL_SECONDS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_store_url: String,
    pub data_store_api_key: String,
    pub redis_url: Option<String>,
    pub health_check_interval_seconds: u64,
    pub optimization_interval_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            data_store_url: env::var("DATA_STORE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATA_STORE_URL not set, using empty value");
                    String::new()
                }),
            data_store_api_key: env::var("DATA_STORE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("DATA_STORE_API_KEY not set, using empty value");
                    String::new()
                }),
            redis_url: env::var("REDIS_URL").ok(),
            health_check_interval_seconds: env::var("HEALTH_CHECK_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HEALTH_INTERVAL_SECONDS),
            optimization_interval_seconds: env::var("OPTIMIZATION_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_OPTIMIZATION_INTERVAL_SECONDS),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.data_store_url.is_empty()
            && !self.data_store_api_key.is_empty()
            && self.redis_url.is_some()
    }
}
