use log::LevelFilter;
use serde::Deserialize;
use std::{env, fs::read_to_string, path::Path};

/// The client version extracted from the Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable key to load the config from
const CONFIG_ENV_KEY: &str = "QR_CONFIG_JSON";

pub fn load_config() -> Option<Config> {
    // Attempt to load the config from the env
    if let Ok(env) = env::var(CONFIG_ENV_KEY) {
        let config: Config = match serde_json::from_str(&env) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("Failed to load env config (Using default): {:?}", err);
                return None;
            }
        };
        return Some(config);
    }

    // Attempt to load the config from disk
    let file = Path::new("config.json");
    if !file.exists() {
        return None;
    }

    let data = match read_to_string(file) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using defaults): {:?}", err);
            return None;
        }
    };

    let config: Config = match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using default): {:?}", err);
            return None;
        }
    };

    Some(config)
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LevelFilter,
    pub display: DisplayConfig,
    /// Nicknames that players may not use. The quiz backend owns the
    /// real identity rules, this list only covers local rejections
    pub reserved_nicknames: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Default::default(),
            logging: LevelFilter::Info,
            display: Default::default(),
            reserved_nicknames: Vec::new(),
        }
    }
}

/// Configuration for reaching the quiz backend API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL the API routes are resolved against
    pub url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
        }
    }
}

/// Configuration for how the rank screen presents the leaderboard
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Entries shown above the player in windowed mode
    pub window_before: usize,
    /// Entries shown below the player in windowed mode
    pub window_after: usize,
    /// Most rows either display mode will render
    pub max_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_before: 2,
            window_after: 2,
            max_rows: 10,
        }
    }
}
