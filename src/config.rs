use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable that overrides the configured base URL
const API_URL_ENV: &str = "REQPAD_API_URL";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the server; the request path is appended to it
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 560.0,
        }
    }
}

/// Load the config file, then apply the environment override on top.
pub fn load() -> Config {
    let mut config = read_file();
    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.is_empty() => {
            tracing::info!("Base URL set from {}: {}", API_URL_ENV, url);
            config.api.base_url = url;
        }
        _ => {}
    }
    config
}

fn read_file() -> Config {
    let path = config_path();
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".config")
        .join("reqpad")
        .join("config.toml")
}
