use anyhow::Context;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub display: DisplayConfig,
    pub views: ViewConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the statistics API, e.g. `http://localhost:8080/api`
    pub base_url: String,
    /// Optional per-request timeout; requests wait indefinitely when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Timezone used when the browser does not send one
    pub default_timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "ViewConfig::default_max_entries")]
    pub max_entries: u64,
    #[serde(default = "ViewConfig::default_idle_secs")]
    pub idle_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Path to directory containing static frontend files
    /// If None, uses embedded frontend
    pub static_dir: Option<String>,
}

impl UpstreamConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";
}

impl DisplayConfig {
    pub fn timezone(&self) -> anyhow::Result<Tz> {
        self.default_timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("invalid DEFAULT_TIMEZONE '{}': {e}", self.default_timezone))
    }
}

impl ViewConfig {
    /// Longest idle period a view may be kept (30 days)
    pub const MAX_IDLE_SECS: u64 = 30 * 24 * 60 * 60;

    const fn default_max_entries() -> u64 {
        10_000
    }

    const fn default_idle_secs() -> u64 {
        1800
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_entries: Self::default_max_entries(),
            idle_secs: Self::default_idle_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            upstream: UpstreamConfig {
                base_url: UpstreamConfig::DEFAULT_BASE_URL.to_string(),
                timeout_secs: None,
            },
            display: DisplayConfig {
                default_timezone: "UTC".to_string(),
            },
            views: ViewConfig::default(),
            frontend: FrontendConfig { static_dir: None },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from `lookup`, which returns the raw value of
    /// an environment variable if it is set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        // API_BASE_URL is the name older deployments used
        let base_url = lookup("STATS_API_BASE_URL")
            .or_else(|| lookup("API_BASE_URL"))
            .unwrap_or_else(|| UpstreamConfig::DEFAULT_BASE_URL.to_string());

        let timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;

        let host = lookup("STATS_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("STATS_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("STATS_PORT must be a valid port number")?;

        let default_timezone = lookup("DEFAULT_TIMEZONE").unwrap_or_else(|| "UTC".to_string());

        let max_entries = lookup("VIEW_MAX_ENTRIES")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("VIEW_MAX_ENTRIES must be a whole number")?
            .unwrap_or_else(ViewConfig::default_max_entries);
        let idle_secs = lookup("VIEW_IDLE_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("VIEW_IDLE_SECS must be a whole number of seconds")?
            .unwrap_or_else(ViewConfig::default_idle_secs);
        if idle_secs == 0 || idle_secs > ViewConfig::MAX_IDLE_SECS {
            anyhow::bail!(
                "VIEW_IDLE_SECS must be between 1 and {} seconds, got {idle_secs}",
                ViewConfig::MAX_IDLE_SECS
            );
        }

        let frontend_static_dir = lookup("FRONTEND_STATIC_DIR");

        let config = Config {
            server: ServerConfig { host, port },
            upstream: UpstreamConfig {
                base_url,
                timeout_secs,
            },
            display: DisplayConfig { default_timezone },
            views: ViewConfig {
                max_entries,
                idle_secs,
            },
            frontend: FrontendConfig {
                static_dir: frontend_static_dir,
            },
        };

        config.display.timezone()?;

        Ok(config)
    }
}
