use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// FTP server to connect to (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server address, e.g. `ftp://ftp.example.org` or `ftp://10.0.0.5:2121`.
    pub address: String,
    pub user: String,
    pub password: String,
    /// Connect, read and write timeout for control and data sockets, in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "ftp://localhost".to_string(),
            user: "anonymous".to_string(),
            password: "anonymous@".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ServerConfig {
    /// `host:port` for the control connection. Port defaults to 21.
    pub fn socket_addr(&self) -> Result<String> {
        let parsed = url::Url::parse(&self.address)
            .with_context(|| format!("invalid server address: {}", self.address))?;
        if parsed.scheme() != "ftp" {
            anyhow::bail!("unsupported scheme '{}' (expected ftp)", parsed.scheme());
        }
        let host = parsed
            .host_str()
            .with_context(|| format!("server address has no host: {}", self.address))?;
        let port = parsed.port_or_known_default().unwrap_or(21);
        Ok(format!("{}:{}", host, port))
    }

    /// Socket timeout; zero is treated as one second so no socket blocks forever.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Remote directory roots, manifest name and the suffixes used to classify files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedLayout {
    /// Root of the dated daily drops (`<front_root>/<year>/<month>/<day:02>`).
    pub front_root: String,
    /// Root of the yearly archives (`<back_root>/<year>`).
    pub back_root: String,
    /// Name of the per-day manifest file.
    pub manifest_name: String,
    pub biblio_suffix: String,
    pub chem_suffix: String,
    /// Marker preceding the supplement number, as in `X_supp3.chemicals.tsv.gz`.
    pub supp_marker: String,
}

impl Default for FeedLayout {
    fn default() -> Self {
        Self {
            front_root: "/data/external/frontfile".to_string(),
            back_root: "/data/external/backfile".to_string(),
            manifest_name: "newfiles.txt".to_string(),
            biblio_suffix: ".biblio.json.gz".to_string(),
            chem_suffix: ".chemicals.tsv.gz".to_string(),
            supp_marker: "_supp".to_string(),
        }
    }
}

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per file (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.5 = 500ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.5,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    /// Negative or NaN base delays become zero; anything too large for a
    /// `Duration` is clamped to `max_delay`.
    pub fn to_policy(&self) -> RetryPolicy {
        let max_delay = Duration::from_secs(self.max_delay_secs);
        let base_delay = if self.base_delay_secs > 0.0 {
            Duration::try_from_secs_f64(self.base_delay_secs)
                .map_or(max_delay, |d| d.min(max_delay))
        } else {
            Duration::ZERO
        };
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay,
            max_delay,
        }
    }
}

/// Global configuration loaded from `~/.config/chemfeed/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub layout: FeedLayout,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl FeedConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().to_policy()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chemfeed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FeedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<FeedConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FeedConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
