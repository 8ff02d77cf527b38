use thiserror::Error;

/// Hard failures of the monitoring surface. Probe failures never reach this
/// type: they degrade the affected metric inside the collector instead.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Cache connection error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Cache pool error: {0}")]
    CachePoolError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
