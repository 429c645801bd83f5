use std::env;
use std::path::Path;

use anyhow::Result;
use config as cfg;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the analytics engine.
    pub url: String,
    #[serde(default = "EngineConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EngineConfig {
    fn default_timeout_secs() -> u64 {
        30
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".into(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub id: u64,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationConfig {
    pub id: u64,
    /// Feature names enabled for the organization, e.g.
    /// "organizations:discover-basic".
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

/// Declarative tenancy for the deployment: which organizations exist,
/// which projects they own and which features they carry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TenancyConfig {
    #[serde(default)]
    pub organizations: Vec<OrganizationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_env")]
    pub env: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub tenancy: TenancyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: Self::default_env(),
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
            tenancy: TenancyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    fn default_env() -> String {
        env::var("APP_ENV")
            .ok()
            .or_else(|| env::var("RUST_ENV").ok())
            .unwrap_or_else(|| "development".to_string())
    }

    /// Layered load: default file, env-specific file, then EVENTFACETS__*
    /// environment overrides. Every file source is optional.
    pub fn load_from(config_dir: &Path, env_name: &str) -> Result<Self> {
        let settings: Settings = cfg::Config::builder()
            .add_source(cfg::File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                cfg::File::from(config_dir.join(format!("{}.toml", env_name))).required(false),
            )
            .add_source(cfg::File::from(config_dir.join("local.toml")).required(false))
            .add_source(cfg::Environment::with_prefix("EVENTFACETS").separator("__"))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        info!(env = %settings.env, "configuration loaded");
        Ok(settings)
    }

    pub fn load() -> Result<Self> {
        let env_name = Self::default_env();
        Self::load_from(Path::new("config"), &env_name)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.server.host.trim().is_empty(),
            "server.host cannot be empty"
        );
        anyhow::ensure!(self.server.port > 0, "server.port must be > 0");
        anyhow::ensure!(
            !self.logging.level.trim().is_empty(),
            "logging.level cannot be empty"
        );
        anyhow::ensure!(
            !self.engine.url.trim().is_empty(),
            "engine.url cannot be empty"
        );
        anyhow::ensure!(
            self.engine.timeout_secs > 0,
            "engine.timeout_secs must be > 0"
        );
        Ok(())
    }
}
