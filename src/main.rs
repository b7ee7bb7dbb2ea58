mod api_doc;
mod config;
mod error;
mod handlers;
mod kv;
mod models;
mod routes;
mod s3;
mod state;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use kv::RedisKvStore;
use s3::S3ObjectStore;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Guard must outlive the server so buffered file log lines are
    // flushed on shutdown.
    let _log_guard = init_tracing()?;

    tracing::info!("rust-redis-gateway starting");
    tracing::info!("pid: {}", std::process::id());
    if let Ok(cwd) = std::env::current_dir() {
        tracing::info!("working directory: {}", cwd.display());
    }

    let config = Config::from_env()?;
    config.log_startup();

    let kv_store = RedisKvStore::from_config(&config).await?;
    let object_store = S3ObjectStore::from_env().await;

    let state = AppState {
        kv: Arc::new(kv_store),
        objects: Arc::new(object_store),
        config: Arc::new(config.clone()),
    };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, routes::router(state))
        .await
        .context("Server error")?;

    Ok(())
}

/// Initialize tracing with two sinks: stdout and a static `app.log` file
/// in the working directory. `RUST_LOG` overrides the default `info`
/// filter.
fn init_tracing() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let file_appender = tracing_appender::rolling::never(".", "app.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(guard)
}
