/*
[INPUT]:  CLI arguments, optional YAML configuration, TASKBOARD_* environment
[OUTPUT]: Running task board TUI against the configured backend
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskboard_adapter::TaskboardClient;
use taskboard_tui::tui::{self, LogBufferHandle, LogWriterFactory};
use taskboard_tui::{AppConfig, TaskBoard};

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Terminal task board over a REST task service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // the TUI owns the screen, so tracing goes to the in-memory logs tab
    let log_buffer = tui::log_buffer();
    init_tracing(&args.log_level, log_buffer.clone())?;

    let config_path = match args.config_path.as_deref() {
        Some(path) => Some(
            path.to_str()
                .context("config path must be valid utf-8")?,
        ),
        None => None,
    };
    let config = AppConfig::load(config_path, args.base_url.as_deref())?;

    info!(base_url = %config.base_url, "starting taskboard");

    let client = TaskboardClient::with_config(config.client_config(), &config.base_url)
        .map_err(|err| anyhow!("create client failed: {err}"))?;
    let board = TaskBoard::new(client);

    tui::run(board, log_buffer).await
}

fn init_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
