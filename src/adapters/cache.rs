use crate::config::RedisConfig;

/// Thin wrapper around the Redis client.
///
/// Connections are opened per call and dropped when the call returns, so no
/// cache connection outlives the request that needed it.
#[derive(Clone, Debug)]
pub struct CacheClient {
    client: redis::Client,
}

impl CacheClient {
    /// Creates a new cache client. No connection is made until first use.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed.
    pub fn new(config: &RedisConfig) -> anyhow::Result<Self> {
        let client = redis::Client::open(config.redis_url.as_str())?;
        Ok(Self { client })
    }

    /// Round-trips a `PING` over a connection scoped to this call.
    ///
    /// # Errors
    /// Returns an error if the connection or the command fails.
    pub async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }
}
