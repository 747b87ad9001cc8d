use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "talker.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct TalkerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub data_file: PathBuf,
    pub log_level: String,
}

impl TalkerConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        Ok(TalkerConfig {
            common,
            data_file: PathBuf::from(get_env("TALKER_FILE_PATH", DEFAULT_DATA_FILE)),
            log_level: get_env("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
