use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use taskboard_core::ApiKey;
use taskboard_server::ServerConfig;
use taskboard_store::Database;
use taskboard_telemetry::{LogFormat, TelemetryConfig};

/// HTTP service for tasks, categories and the UI theme.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "TASKBOARD_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// SQLite database file. Defaults to ~/.taskboard/taskboard.db.
    #[arg(long, env = "TASKBOARD_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Log output format: pretty or json.
    #[arg(long, env = "TASKBOARD_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,

    /// Shared secret expected in the `api-key` header.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is not up yet, so a bad .env is reported once it is.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    taskboard_telemetry::init_telemetry(&TelemetryConfig {
        format: cli.log_format,
        ..TelemetryConfig::default()
    })
    .context("failed to initialize logging")?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env file");
        }
    }

    tracing::info!("Starting taskboard server");

    let db_path = cli.db_path.unwrap_or_else(default_db_path);
    let db = Database::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    db.initialize().context("failed to initialize schema")?;
    tracing::info!(path = %db_path.display(), "Database ready");

    let api_key = cli.api_key.filter(|k| !k.is_empty()).map(ApiKey::new);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        api_key,
    };
    let handle = taskboard_server::start(config, db)
        .await
        .context("failed to start server")?;

    tracing::info!(port = handle.port, "Taskboard server ready");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl+c")?;

    tracing::info!("Shutting down");
    handle.shutdown().await;
    Ok(())
}

fn default_db_path() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join(".taskboard")
        .join("taskboard.db")
}
