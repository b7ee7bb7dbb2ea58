use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub bucket_name: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let redis_host = env::var("REDIS_HOST")
            .unwrap_or_else(|_| "localhost".to_string());

        let redis_port = env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        // Only the blob write endpoint needs a bucket; its absence is
        // reported there, not at startup.
        let bucket_name = env::var("BUCKET_NAME").ok().filter(|b| !b.is_empty());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8005".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            redis_host,
            redis_port,
            bucket_name,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis: {}:{}", self.redis_host, self.redis_port);
        tracing::info!("  Bucket: {}",
            self.bucket_name.as_deref().unwrap_or("not configured"));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
