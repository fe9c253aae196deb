mod config;
mod http;
mod persistence;
mod service;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use http::AppState;
use persistence::sqlite::Database;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// NeuroTrack stress-monitoring REST API.
///
/// Flags take precedence over the matching `NEUROTRACK_*` environment
/// variables.
#[derive(Parser)]
#[command(name = "neurotrack-server", about = "NeuroTrack stress-monitoring REST API")]
struct Cli {
    /// Address to listen on, e.g. `0.0.0.0:8080`.
    #[arg(long)]
    bind: Option<String>,

    /// SQLite database file. Created on first start.
    #[arg(long)]
    database: Option<PathBuf>,

    /// Write daily rolling log files here instead of stdout.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing with span durations. The returned guard must live as
/// long as the process when logging to files.
fn init_tracing(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(log_dir) = log_dir else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_span_events(FmtSpan::CLOSE)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "neurotrack-server");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(env_filter())
        .init();
    Ok(Some(guard))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_dir = cli.log_dir.or_else(config::get_log_dir);
    let _guard = init_tracing(log_dir.as_deref())?;

    tracing::info!("Starting NeuroTrack API server");

    let db_path = cli.database.unwrap_or_else(config::get_database_path);
    tracing::info!("Using database: {}", db_path.display());
    if let Some(dir) = &log_dir {
        tracing::info!("Writing logs to: {}", dir.display());
    }

    let db = Database::open(
        &db_path,
        config::get_max_connections(),
        config::get_acquire_timeout(),
    )
    .await
    .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let users = db.count_users().await?;
    tracing::info!(users, "Database ready");

    let addr = cli.bind.unwrap_or_else(config::get_bind_addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, http::router(AppState { db }))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
