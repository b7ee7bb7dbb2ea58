use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::config::Config;

/// Read-side operations the gateway needs from its key-value store.
///
/// Handlers depend on this trait rather than a concrete client so tests
/// can substitute an in-memory fake.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Look up a single key. `None` means the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Enumerate every key matching a glob-style pattern.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Count keys matching a glob-style pattern.
    ///
    /// Redis has no such command; the concrete client issues one anyway
    /// and surfaces the server's rejection. Kept so the known-broken
    /// diagnostic endpoint fails the same way it always has.
    async fn count(&self, pattern: &str) -> Result<i64>;

    /// Liveness probe against the store.
    async fn ping(&self) -> Result<()>;
}

/// Shareable Redis client for use across async handlers
///
/// `ConnectionManager` multiplexes one connection and reconnects on
/// failure, so cloning the handle per call is cheap.
#[derive(Clone)]
pub struct RedisKvStore {
    conn: ConnectionManager,
}

impl RedisKvStore {
    /// Create a new Redis client from configuration
    ///
    /// Connects eagerly: startup fails if the store is unreachable,
    /// matching the behavior of constructing the client at process start.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let url = format!("redis://{}:{}/", config.redis_host, config.redis_port);

        tracing::info!("Connecting to Redis at {}:{}", config.redis_host, config.redis_port);

        let client = redis::Client::open(url.as_str())
            .context("Invalid Redis connection URL")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        tracing::info!("Successfully connected to Redis");

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await.context("GET command failed")?;

        tracing::debug!("GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn.keys(pattern).await.context("KEYS command failed")?;

        tracing::debug!("KEYS {} -> {} matches", pattern, keys.len());
        Ok(keys)
    }

    async fn count(&self, pattern: &str) -> Result<i64> {
        let mut conn = self.conn.clone();

        // Not a real Redis command; the server rejects it with an
        // unknown-command error.
        let count: i64 = redis::cmd("COUNT")
            .arg(pattern)
            .query_async(&mut conn)
            .await
            .context("COUNT command failed")?;

        Ok(count)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("PING command failed")?;

        tracing::debug!("Health check ping succeeded");
        Ok(())
    }
}
