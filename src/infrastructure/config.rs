use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::utils::paths;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    /// Base URL of the interview backend
    #[serde(default)]
    pub api_base_url: String,
    /// Identifier sent with start-interview requests
    #[serde(default)]
    pub user_id: String,
    /// Roles offered on the selection screen, in display order
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| config::ConfigError::Message(format!("bad embedded config: {e}")))?;
        let data_dir = paths::get_data_dir();
        let config_dir = paths::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
        }

        // Every key has a usable default, so a missing user config file is
        // fine; the embedded defaults fill whatever the file leaves unset.
        let mut cfg: Self = builder.build()?.try_deserialize()?;

        if cfg.api_base_url.is_empty() {
            cfg.api_base_url = default_config.api_base_url.clone();
        }
        if cfg.user_id.is_empty() {
            cfg.user_id = default_config.user_id.clone();
        }
        if cfg.roles.is_empty() {
            cfg.roles = default_config.roles.clone();
        }

        Ok(cfg)
    }
}
