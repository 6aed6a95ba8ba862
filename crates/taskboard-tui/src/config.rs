/*
[INPUT]:  Defaults, optional YAML file, TASKBOARD_* environment, CLI override
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use taskboard_adapter::ClientConfig;

/// Fallback API base. The backend serves the API under `/api`; override with
/// `TASKBOARD_BASE_URL` or `--base-url` when it lives elsewhere.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const DEFAULT_TIMEOUT_SECS: i64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: i64 = 10;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the task API, including the path prefix
    pub base_url: String,
    /// Overall request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration in layers: defaults, then an optional YAML file,
    /// then `TASKBOARD_*` environment variables, then the CLI override.
    pub fn load(file: Option<&str>, base_url_override: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)
            .context("default base_url")?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)
            .context("default timeout_secs")?
            .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)
            .context("default connect_timeout_secs")?;

        if let Some(path) = file {
            builder = builder.add_source(File::with_name(path));
        }

        builder = builder.add_source(Environment::with_prefix("TASKBOARD"));

        if let Some(url) = base_url_override {
            builder = builder
                .set_override("base_url", url)
                .context("override base_url")?;
        }

        let config = builder.build().context("build configuration")?;
        config
            .try_deserialize()
            .context("deserialize configuration")
    }

    /// Client configuration derived from the timeouts
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}
