use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde_json::json;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Per-request ceiling for probe and maintenance calls. The data store is
/// considered failed, not slow, beyond this point.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Thin client for the relational data dependency, exposed over its REST
/// gateway. Only the two operations the monitor needs are implemented: a
/// liveness round-trip and a query-planner statistics refresh.
pub struct DataStoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DataStoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.data_store_url.clone(),
            api_key: config.data_store_api_key.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.api_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers
    }

    /// Round-trip liveness check. Returns the measured latency on success.
    pub async fn ping(&self) -> Result<Duration> {
        let url = format!("{}/rest/v1/", self.base_url);
        debug!("Pinging data store at {}", url);

        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .headers(self.get_headers())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Data store ping failed ({}): {}", status, error_text);
            return Err(anyhow!("Data store ping failed ({}): {}", status, error_text));
        }

        Ok(start.elapsed())
    }

    /// Asks the data store to refresh its query-planner statistics. No schema
    /// or row data is touched by this call.
    pub async fn refresh_statistics(&self) -> Result<()> {
        let url = format!("{}/rest/v1/rpc/refresh_statistics", self.base_url);
        debug!("Requesting statistics refresh at {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.get_headers())
            .timeout(REQUEST_TIMEOUT)
            .json(&json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Statistics refresh rejected ({}): {}", status, error_text);
            return Err(anyhow!(
                "Statistics refresh rejected ({}): {}",
                status,
                error_text
            ));
        }

        Ok(())
    }
}
