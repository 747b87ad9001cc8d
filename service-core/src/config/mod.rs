use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Conventional variable set by process managers and PaaS hosts.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3002
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// `.env`, then `configuration.*`, then `APP__*` variables; a bare `PORT` wins over all.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut config: Config = config.try_deserialize()?;
        if let Some(port) = std::env::var(PORT_ENV).ok().filter(|p| !p.trim().is_empty()) {
            config.port = parse_port(&port)?;
        }

        Ok(config)
    }
}

pub fn parse_port(raw: &str) -> Result<u16, AppError> {
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("{} '{}' is not a valid port: {}", PORT_ENV, raw, e))
    })
}
